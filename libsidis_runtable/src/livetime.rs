use super::constants::{round_to, LIVETIME_DECIMALS, SENTINEL};
use super::report::ReportRecord;
use super::run::DetectorConfiguration;

/// Prescale variables multiplied into the livetime, in channel order.
const PRESCALE_VARS: [&str; 6] = ["ps1", "ps2", "ps3", "ps4", "ps5", "ps6"];

/// Compute the dead-time-corrected livetime scaling factor for a run.
///
/// The coincidence trigger self-normalizes, so Coincidence reports are fixed at
/// 1.0. For a single arm the factor is
/// `-(ps1*...*ps6 * phys_triggers) / ptrigN`, rounded to 5 decimals and
/// clamped to a maximum of 1.0. The discriminating channel N is the first of
/// the arm's two candidates whose trigger count is present and nonzero and
/// whose own prescale is positive (ArmA: ptrig3 then ptrig4; ArmB: ptrig1 then
/// ptrig2). Missing prescales count as 1. Without a physical-trigger count or
/// a usable channel the livetime is undefined, not zero.
pub fn compute_livetime(
    configuration: DetectorConfiguration,
    record: &ReportRecord,
) -> Option<f64> {
    let channels: [(&str, &str); 2] = match configuration {
        DetectorConfiguration::Coincidence => return Some(1.0),
        DetectorConfiguration::ArmA => [("ptrig3", "ps3"), ("ptrig4", "ps4")],
        DetectorConfiguration::ArmB => [("ptrig1", "ps1"), ("ptrig2", "ps2")],
    };

    let phys_triggers = defined(record, "phys_triggers")?;
    let ps_product: f64 = PRESCALE_VARS
        .iter()
        .map(|&ps| defined(record, ps).unwrap_or(1.0))
        .product();

    for (trigger_var, prescale_var) in channels {
        let trigger_count = match defined(record, trigger_var) {
            Some(count) if count != 0.0 => count,
            _ => continue,
        };
        if !matches!(defined(record, prescale_var), Some(ps) if ps > 0.0) {
            continue;
        }
        let livetime = round_to(
            -(ps_product * phys_triggers) / trigger_count,
            LIVETIME_DECIMALS,
        );
        return Some(livetime.min(1.0));
    }
    None
}

/// A value that is present and not the sentinel
fn defined(record: &ReportRecord, name: &str) -> Option<f64> {
    match record.get(name) {
        Some(Some(value)) if *value != SENTINEL => Some(*value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&'static str, Option<f64>)]) -> ReportRecord {
        entries.iter().copied().collect()
    }

    fn arm_a_record(phys: f64, ptrig3: Option<f64>, ptrig4: Option<f64>) -> ReportRecord {
        let mut rec = record(&[
            ("ps1", Some(1.0)),
            ("ps2", Some(1.0)),
            ("ps3", Some(1.0)),
            ("ps4", Some(1.0)),
            ("ps5", Some(1.0)),
            ("ps6", Some(1.0)),
            ("phys_triggers", Some(phys)),
        ]);
        rec.insert("ptrig3", ptrig3);
        rec.insert("ptrig4", ptrig4);
        rec
    }

    #[test]
    fn test_coincidence_is_unity() {
        let rec = record(&[]);
        assert_eq!(
            compute_livetime(DetectorConfiguration::Coincidence, &rec),
            Some(1.0)
        );
    }

    #[test]
    fn test_arm_a_uses_channel_three_first() {
        let rec = arm_a_record(-950.0, Some(1000.0), Some(500.0));
        assert_eq!(
            compute_livetime(DetectorConfiguration::ArmA, &rec),
            Some(0.95)
        );
    }

    #[test]
    fn test_arm_a_falls_back_to_channel_four() {
        let rec = arm_a_record(-450.0, None, Some(500.0));
        assert_eq!(
            compute_livetime(DetectorConfiguration::ArmA, &rec),
            Some(0.9)
        );
    }

    #[test]
    fn test_clamped_to_unity() {
        let rec = arm_a_record(-2000.0, Some(1000.0), None);
        assert_eq!(
            compute_livetime(DetectorConfiguration::ArmA, &rec),
            Some(1.0)
        );
    }

    #[test]
    fn test_sentinel_prescales_count_as_one() {
        let mut rec = arm_a_record(-950.0, Some(1000.0), None);
        rec.insert("ps5", Some(SENTINEL));
        rec.insert("ps6", None);
        assert_eq!(
            compute_livetime(DetectorConfiguration::ArmA, &rec),
            Some(0.95)
        );
    }

    #[test]
    fn test_undefined_prescale_disqualifies_channel() {
        let mut rec = arm_a_record(-450.0, Some(1000.0), Some(500.0));
        // ps3 unknown: channel 3 is unusable but the product still counts it as 1
        rec.insert("ps3", Some(SENTINEL));
        assert_eq!(
            compute_livetime(DetectorConfiguration::ArmA, &rec),
            Some(0.9)
        );
    }

    #[test]
    fn test_undefined_without_phys_triggers_or_channel() {
        let mut rec = arm_a_record(-950.0, None, None);
        assert_eq!(compute_livetime(DetectorConfiguration::ArmA, &rec), None);
        rec = arm_a_record(-950.0, Some(1000.0), None);
        rec.insert("phys_triggers", None);
        assert_eq!(compute_livetime(DetectorConfiguration::ArmA, &rec), None);
    }

    #[test]
    fn test_arm_b_channels() {
        let mut rec = record(&[
            ("ps1", Some(2.0)),
            ("ps2", Some(1.0)),
            ("ps3", Some(1.0)),
            ("ps4", Some(1.0)),
            ("ps5", Some(1.0)),
            ("ps6", Some(1.0)),
            ("phys_triggers", Some(-400.0)),
            ("ptrig1", Some(1000.0)),
            ("ptrig2", Some(500.0)),
        ]);
        // ps_product = 2, channel 1 chosen: -(2 * -400) / 1000 = 0.8
        assert_eq!(
            compute_livetime(DetectorConfiguration::ArmB, &rec),
            Some(0.8)
        );
        // A zero trigger count disqualifies channel 1; channel 2 takes over
        rec.insert("ptrig1", Some(0.0));
        rec.insert("phys_triggers", Some(-100.0));
        assert_eq!(
            compute_livetime(DetectorConfiguration::ArmB, &rec),
            Some(0.4)
        );
    }
}
