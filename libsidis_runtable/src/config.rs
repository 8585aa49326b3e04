use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::run::DetectorConfiguration;

/// Structure representing the application configuration. Contains pathing for every
/// input table and the output location.
/// Configs are serializable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub coin_report_dir: PathBuf,
    pub arm_a_report_dir: PathBuf,
    pub arm_b_report_dir: PathBuf,
    pub coin_stats_dir: PathBuf,
    pub fan_table_path: PathBuf,
    pub polarization_table_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    /// Generate a new Config object. All fields will be empty/invalid
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("None"),
            coin_report_dir: PathBuf::from("None"),
            arm_a_report_dir: PathBuf::from("None"),
            arm_b_report_dir: PathBuf::from("None"),
            coin_stats_dir: PathBuf::from("None"),
            fan_table_path: PathBuf::from("None"),
            polarization_table_path: PathBuf::from("None"),
            output_path: PathBuf::from("None"),
        }
    }
}

impl Config {
    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Get the path to the replay report for a run under a given detector configuration
    pub fn report_path(&self, run: &str, configuration: DetectorConfiguration) -> PathBuf {
        let report_dir = match configuration {
            DetectorConfiguration::ArmA => &self.arm_a_report_dir,
            DetectorConfiguration::ArmB => &self.arm_b_report_dir,
            DetectorConfiguration::Coincidence => &self.coin_report_dir,
        };
        report_dir.join(format!("{}_{}.report", configuration.file_prefix(), run))
    }

    /// Get the path to the per-run coincidence-statistics file
    pub fn coin_stats_path(&self, run: &str) -> PathBuf {
        self.coin_stats_dir.join(format!("coin_stats_{run}.csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_per_configuration() {
        let config = Config {
            coin_report_dir: PathBuf::from("/reports/coin"),
            arm_a_report_dir: PathBuf::from("/reports/arm_a"),
            arm_b_report_dir: PathBuf::from("/reports/arm_b"),
            ..Default::default()
        };
        assert_eq!(
            config.report_path("20873", DetectorConfiguration::Coincidence),
            PathBuf::from("/reports/coin/coin_20873.report")
        );
        assert_eq!(
            config.report_path("20873", DetectorConfiguration::ArmA),
            PathBuf::from("/reports/arm_a/arm_a_20873.report")
        );
        assert_eq!(
            config.report_path("20873", DetectorConfiguration::ArmB),
            PathBuf::from("/reports/arm_b/arm_b_20873.report")
        );
    }
}
