use serde::Deserialize;
use std::fmt;
use std::path::Path;

use super::config::Config;
use super::error::CatalogError;

/// Which detector-arm combination produced a given replay report.
///
/// Every derived record carries this tag explicitly; downstream logic switches
/// on it, never on which schema table happened to be in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorConfiguration {
    ArmA,
    ArmB,
    Coincidence,
}

impl DetectorConfiguration {
    /// File-name prefix used by the replay for this configuration's reports
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Self::ArmA => "arm_a",
            Self::ArmB => "arm_b",
            Self::Coincidence => "coin",
        }
    }
}

impl fmt::Display for DetectorConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArmA => write!(f, "ArmA"),
            Self::ArmB => write!(f, "ArmB"),
            Self::Coincidence => write!(f, "Coincidence"),
        }
    }
}

/// Run-type tag from the run catalog. Unrecognized tags are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RunType {
    Hole,
    Optics,
    Heep,
    Hee,
    HmsDis,
    ShmsDis,
    PiMinusSidis,
    PiPlusSidis,
    Junk,
    Other(String),
}

impl From<String> for RunType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "HOLE" => Self::Hole,
            "OPTICS" => Self::Optics,
            "HEEP" => Self::Heep,
            "HEE" => Self::Hee,
            "HMSDIS" => Self::HmsDis,
            "SHMSDIS" => Self::ShmsDis,
            "PI-SIDIS" => Self::PiMinusSidis,
            "PI+SIDIS" => Self::PiPlusSidis,
            "JUNK" => Self::Junk,
            _ => Self::Other(tag),
        }
    }
}

impl RunType {
    /// The catalog spelling of this run type
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hole => "HOLE",
            Self::Optics => "OPTICS",
            Self::Heep => "HEEP",
            Self::Hee => "HEE",
            Self::HmsDis => "HMSDIS",
            Self::ShmsDis => "SHMSDIS",
            Self::PiMinusSidis => "PI-SIDIS",
            Self::PiPlusSidis => "PI+SIDIS",
            Self::Junk => "JUNK",
            Self::Other(tag) => tag,
        }
    }
}

/// One row of the primary run catalog.
///
/// The catalog carries more columns than these (beam current, prescales, date,
/// shift comment); only the identity fields used by the table builder are kept.
/// The run number is kept as text so it round-trips to the output verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct RunIdentity {
    pub run: String,
    pub ebeam: f64,
    pub target: String,
    pub arm_a_p: f64,
    pub arm_a_th: f64,
    pub arm_b_p: f64,
    pub arm_b_th: f64,
    pub run_type: RunType,
}

/// Load the primary run catalog.
///
/// The catalog is the root input: an unreadable or empty catalog aborts the
/// batch, unlike every secondary table which degrades to sentinel.
pub fn load_catalog(catalog_path: &Path) -> Result<Vec<RunIdentity>, CatalogError> {
    if !catalog_path.exists() {
        return Err(CatalogError::BadFilePath(catalog_path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(catalog_path)?;
    let mut runs = Vec::new();
    for record in reader.deserialize::<RunIdentity>() {
        runs.push(record?);
    }

    if runs.is_empty() {
        return Err(CatalogError::EmptyCatalog(catalog_path.to_path_buf()));
    }
    Ok(runs)
}

/// Resolve which detector configuration's report applies to a run.
///
/// Coincidence production run types map straight to the coincidence report and
/// the two single-arm DIS types to their own arm. Everything else is resolved
/// by probing which report file actually exists. HEE runs deliberately take the
/// probe path as well: their direct ArmA routing has not been confirmed with
/// the instrument owner, so the table leaves them unmapped for now.
pub fn resolve_configuration(
    config: &Config,
    run: &str,
    run_type: &RunType,
) -> DetectorConfiguration {
    match run_type {
        RunType::PiMinusSidis | RunType::PiPlusSidis | RunType::Hole | RunType::Heep => {
            DetectorConfiguration::Coincidence
        }
        RunType::HmsDis => DetectorConfiguration::ArmA,
        RunType::ShmsDis => DetectorConfiguration::ArmB,
        RunType::Hee => probe_configuration(config, run),
        _ => probe_configuration(config, run),
    }
}

/// Probe report-file existence in priority order Coincidence, ArmA, ArmB and
/// take the first hit. With no file present at all, fall through to ArmB; the
/// extractor then degrades that run to an all-sentinel record.
fn probe_configuration(config: &Config, run: &str) -> DetectorConfiguration {
    for configuration in [
        DetectorConfiguration::Coincidence,
        DetectorConfiguration::ArmA,
    ] {
        if config.report_path(run, configuration).exists() {
            return configuration;
        }
    }
    DetectorConfiguration::ArmB
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn touch(path: &Path) {
        std::fs::File::create(path)
            .unwrap()
            .write_all(b"\n")
            .unwrap();
    }

    fn probe_config(dir: &Path) -> Config {
        Config {
            coin_report_dir: dir.to_path_buf(),
            arm_a_report_dir: dir.to_path_buf(),
            arm_b_report_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_type_round_trip() {
        for tag in [
            "HOLE", "OPTICS", "HEEP", "HEE", "HMSDIS", "SHMSDIS", "PI-SIDIS", "PI+SIDIS", "JUNK",
        ] {
            assert_eq!(RunType::from(tag.to_string()).as_str(), tag);
        }
        assert_eq!(
            RunType::from(String::from("LUMI")),
            RunType::Other(String::from("LUMI"))
        );
    }

    #[test]
    fn test_mapped_dispatch() {
        let config = Config::default();
        for tag in ["PI-SIDIS", "PI+SIDIS", "HOLE", "HEEP"] {
            assert_eq!(
                resolve_configuration(&config, "1000", &RunType::from(tag.to_string())),
                DetectorConfiguration::Coincidence
            );
        }
        assert_eq!(
            resolve_configuration(&config, "1000", &RunType::HmsDis),
            DetectorConfiguration::ArmA
        );
        assert_eq!(
            resolve_configuration(&config, "1000", &RunType::ShmsDis),
            DetectorConfiguration::ArmB
        );
    }

    #[test]
    fn test_probe_prefers_coincidence() {
        let dir = tempfile::tempdir().unwrap();
        let config = probe_config(dir.path());
        touch(&config.report_path("2000", DetectorConfiguration::Coincidence));
        touch(&config.report_path("2000", DetectorConfiguration::ArmA));
        assert_eq!(
            resolve_configuration(&config, "2000", &RunType::Optics),
            DetectorConfiguration::Coincidence
        );
    }

    #[test]
    fn test_probe_falls_back_through_arms() {
        let dir = tempfile::tempdir().unwrap();
        let config = probe_config(dir.path());
        touch(&config.report_path("2001", DetectorConfiguration::ArmA));
        assert_eq!(
            resolve_configuration(&config, "2001", &RunType::Junk),
            DetectorConfiguration::ArmA
        );
        // Nothing on disk for this run: the probe bottoms out at ArmB
        assert_eq!(
            resolve_configuration(&config, "2002", &RunType::Junk),
            DetectorConfiguration::ArmB
        );
    }

    #[test]
    fn test_hee_takes_probe_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = probe_config(dir.path());
        touch(&config.report_path("2003", DetectorConfiguration::Coincidence));
        // HEE is not routed straight to ArmA; it resolves by probing
        assert_eq!(
            resolve_configuration(&config, "2003", &RunType::Hee),
            DetectorConfiguration::Coincidence
        );
    }
}
