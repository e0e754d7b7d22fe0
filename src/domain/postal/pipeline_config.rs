// ============================================================
// PIPELINE CONFIGURATION
// ============================================================
// Input and output locations for one conversion run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Shift_JIS address-range dataset (default: KEN_ALL.CSV)
    pub general_input: PathBuf,

    /// Shift_JIS business dataset (default: JIGYOSYO.CSV)
    pub business_input: PathBuf,

    /// UTF-8 unified output (default: postal.csv)
    pub output: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            general_input: PathBuf::from("KEN_ALL.CSV"),
            business_input: PathBuf::from("JIGYOSYO.CSV"),
            output: PathBuf::from("postal.csv"),
        }
    }
}

impl PipelineConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.general_input.as_os_str().is_empty() {
            return Err("general_input must not be empty".to_string());
        }
        if self.business_input.as_os_str().is_empty() {
            return Err("business_input must not be empty".to_string());
        }
        if self.output.as_os_str().is_empty() {
            return Err("output must not be empty".to_string());
        }
        if self.output == self.general_input || self.output == self.business_input {
            return Err("output must not overwrite an input file".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_path() {
        let config = PipelineConfig {
            business_input: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_output_over_input() {
        let config = PipelineConfig {
            output: PathBuf::from("KEN_ALL.CSV"),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err("output must not overwrite an input file".to_string())
        );
    }
}
