//! Generation configuration.
//!
//! Defaults reproduce the reference vector set: 64 coefficients, base
//! seed 2024, eta values 2 and 3, written to `test/`. A TOML file can
//! override any of these, and command-line flags override the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parameters shared by every case in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Coefficients per case. Signed so that negative input can be
    /// reported instead of failing to parse.
    pub coeff_count: i64,
    /// Base seed; each case uses `seed + eta`.
    pub seed: u64,
    /// Eta values to generate, in order.
    pub etas: Vec<usize>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            coeff_count: 64,
            seed: 2024,
            etas: vec![2, 3],
        }
    }
}

impl GenerationConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coeff_count < 0 {
            return Err(ConfigError::NegativeCount(self.coeff_count));
        }
        if self.etas.is_empty() {
            return Err(ConfigError::NoEta);
        }
        if self.etas.contains(&0) {
            return Err(ConfigError::ZeroEta);
        }
        if let Some(&eta) = self
            .etas
            .iter()
            .enumerate()
            .find_map(|(i, eta)| self.etas[..i].contains(eta).then_some(eta))
        {
            return Err(ConfigError::DuplicateEta(eta));
        }
        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the `.hex` artifacts.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("test"),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Coefficient count below zero.
    #[error("invalid argument: coefficient count {0} is negative")]
    NegativeCount(i64),
    /// Empty eta list.
    #[error("at least one eta value is required")]
    NoEta,
    /// An eta of zero.
    #[error("eta must be positive")]
    ZeroEta,
    /// The same eta appears twice.
    #[error("eta {0} listed more than once")]
    DuplicateEta(usize),
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Where artifacts are written.
    #[serde(default)]
    pub output: OutputConfig,
    /// Parameters shared by all cases.
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.generation.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.generation.validate().is_ok());
        assert_eq!(config.generation.etas, vec![2, 3]);
        assert_eq!(config.output.dir, PathBuf::from("test"));
    }

    #[test]
    fn test_negative_count_invalid() {
        let config = GenerationConfig {
            coeff_count: -5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeCount(-5)));
    }

    #[test]
    fn test_eta_list_checks() {
        let mut config = GenerationConfig::default();

        config.etas = vec![];
        assert_eq!(config.validate(), Err(ConfigError::NoEta));

        config.etas = vec![2, 0];
        assert_eq!(config.validate(), Err(ConfigError::ZeroEta));

        config.etas = vec![2, 3, 2];
        assert_eq!(config.validate(), Err(ConfigError::DuplicateEta(2)));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FileConfig::from_toml("[generation]\nseed = 7\n").unwrap();

        assert_eq!(config.generation.seed, 7);
        assert_eq!(config.generation.coeff_count, 64);
        assert_eq!(config.output.dir, PathBuf::from("test"));
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
            [output]
            dir = "vectors"

            [generation]
            coeff_count = 256
            seed = 1
            etas = [3]
        "#;
        let config = FileConfig::from_toml(text).unwrap();

        assert_eq!(config.output.dir, PathBuf::from("vectors"));
        assert_eq!(config.generation.coeff_count, 256);
        assert_eq!(config.generation.etas, vec![3]);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            FileConfig::from_toml("[generation]\ncoeff_count = \"many\"\n"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            FileConfig::from_toml("[generation]\ncoeff_count = -1\n"),
            Err(ConfigError::NegativeCount(-1))
        ));
    }
}
