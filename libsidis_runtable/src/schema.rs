//! Fixed-offset report schemas, one per detector configuration.
//!
//! Replay report files are fixed-width text. Each variable of interest lives at
//! a fixed (line, start column, end column) window whose location depends on
//! which detector configuration produced the report. The three tables below are
//! immutable configuration data, declared once and never mutated at run time.
//! Offsets are tied to the replay output format and must track it exactly.

use super::run::DetectorConfiguration;

/// A fixed (line, column range) window in a report file.
///
/// `line` is a zero-based line index; `start`/`end` delimit a half-open byte
/// range within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWindow {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

const fn window(line: usize, start: usize, end: usize) -> FieldWindow {
    FieldWindow { line, start, end }
}

/// A report schema: ordered list of (variable name, window) pairs.
pub type ReportSchema = &'static [(&'static str, FieldWindow)];

/// ArmA single-arm production report schema.
pub static ARM_A_SCHEMA: ReportSchema = &[
    ("BCM1_Q", window(36, 22, 32)),
    ("BCM1_I", window(29, 22, 29)),
    ("BCM2_Q", window(37, 22, 32)),
    ("BCM2_I", window(30, 22, 29)),
    ("BCM4A_Q", window(38, 22, 32)),
    ("BCM4A_I", window(31, 23, 29)),
    ("BCM4B_Q", window(39, 22, 32)),
    ("BCM4B_I", window(32, 23, 29)),
    ("BCM4C_Q", window(40, 22, 32)),
    ("BCM4C_I", window(33, 23, 29)),
    ("a_esing_eff", window(336, 37, 43)),
    ("a_hadron_eff", window(337, 37, 43)),
    ("ps1", window(47, 12, 15)),
    ("ps2", window(48, 12, 15)),
    ("ps3", window(49, 12, 15)),
    ("ps4", window(50, 12, 15)),
    ("ps5", window(51, 12, 15)),
    ("ps6", window(52, 12, 15)),
    ("ptrig3", window(111, 10, 20)),
    ("ptrig4", window(112, 10, 18)),
    ("phys_triggers", window(78, 32, 41)),
    ("el_real", window(87, 11, 19)),
    ("electr_deadtime", window(160, 42, 50)),
];

/// ArmB single-arm production report schema.
pub static ARM_B_SCHEMA: ReportSchema = &[
    ("BCM1_Q", window(36, 22, 31)),
    ("BCM1_I", window(29, 22, 29)),
    ("BCM2_Q", window(37, 22, 31)),
    ("BCM2_I", window(30, 22, 29)),
    ("BCM4A_Q", window(38, 22, 31)),
    ("BCM4A_I", window(31, 23, 30)),
    ("BCM4B_Q", window(39, 22, 31)),
    ("BCM4B_I", window(32, 23, 30)),
    ("BCM4C_Q", window(40, 22, 31)),
    ("BCM4C_I", window(33, 23, 30)),
    ("b_esing_eff", window(367, 35, 41)),
    ("b_hadron_eff", window(368, 35, 41)),
    ("ps1", window(47, 13, 15)),
    ("ps2", window(48, 13, 15)),
    ("ps3", window(49, 13, 15)),
    ("ps4", window(50, 13, 15)),
    ("ps5", window(51, 13, 15)),
    ("ps6", window(52, 13, 15)),
    ("ptrig1", window(106, 10, 20)),
    ("ptrig2", window(107, 10, 20)),
    ("phys_triggers", window(75, 32, 41)),
    ("el_real", window(102, 11, 21)),
    ("electr_deadtime", window(157, 42, 50)),
];

/// Coincidence production report schema.
pub static COIN_SCHEMA: ReportSchema = &[
    ("BCM1_Q", window(46, 26, 33)),
    ("BCM1_I", window(39, 26, 33)),
    ("BCM2_Q", window(47, 26, 33)),
    ("BCM2_I", window(40, 26, 33)),
    ("BCM4A_Q", window(48, 26, 33)),
    ("BCM4A_I", window(41, 27, 34)),
    ("BCM4B_Q", window(49, 26, 33)),
    ("BCM4B_I", window(42, 27, 34)),
    ("BCM4C_Q", window(50, 26, 33)),
    ("BCM4C_I", window(43, 27, 34)),
    ("a_esing_eff", window(626, 36, 43)),
    ("a_hadron_eff", window(627, 36, 43)),
    ("b_esing_eff", window(485, 35, 41)),
    ("b_hadron_eff", window(486, 35, 41)),
    ("ps1", window(89, 12, 15)),
    ("ps2", window(90, 12, 15)),
    ("ps3", window(91, 12, 15)),
    ("ps4", window(92, 12, 15)),
    ("ps5", window(93, 12, 15)),
    ("ps6", window(94, 12, 15)),
    ("phys_triggers", window(75, 32, 41)),
    ("el_real", window(84, 11, 19)),
    ("electr_deadtime", window(256, 60, 68)),
];

/// The schema applying to a given detector configuration
pub fn schema_for(configuration: DetectorConfiguration) -> ReportSchema {
    match configuration {
        DetectorConfiguration::ArmA => ARM_A_SCHEMA,
        DetectorConfiguration::ArmB => ARM_B_SCHEMA,
        DetectorConfiguration::Coincidence => COIN_SCHEMA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_var(schema: ReportSchema, name: &str) -> bool {
        schema.iter().any(|(var, _)| *var == name)
    }

    #[test]
    fn test_every_schema_carries_prescales_and_triggers() {
        for schema in [ARM_A_SCHEMA, ARM_B_SCHEMA, COIN_SCHEMA] {
            for ps in ["ps1", "ps2", "ps3", "ps4", "ps5", "ps6"] {
                assert!(has_var(schema, ps));
            }
            assert!(has_var(schema, "phys_triggers"));
            assert!(has_var(schema, "electr_deadtime"));
        }
    }

    #[test]
    fn test_arm_schemas_carry_their_own_efficiencies() {
        assert!(has_var(ARM_A_SCHEMA, "a_esing_eff"));
        assert!(!has_var(ARM_A_SCHEMA, "b_esing_eff"));
        assert!(has_var(ARM_B_SCHEMA, "b_hadron_eff"));
        assert!(!has_var(ARM_B_SCHEMA, "a_hadron_eff"));
        // The coincidence report carries both arms
        assert!(has_var(COIN_SCHEMA, "a_esing_eff"));
        assert!(has_var(COIN_SCHEMA, "b_esing_eff"));
    }

    #[test]
    fn test_trigger_channels_match_configuration() {
        assert!(has_var(ARM_A_SCHEMA, "ptrig3"));
        assert!(has_var(ARM_A_SCHEMA, "ptrig4"));
        assert!(has_var(ARM_B_SCHEMA, "ptrig1"));
        assert!(has_var(ARM_B_SCHEMA, "ptrig2"));
    }
}
