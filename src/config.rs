//! YAML Configuration File Support for pathrank
//!
//! A single YAML file names the candidate source and the ranking settings, so
//! the CLI and embedding applications can share one description of a
//! deployment.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # pathrank configuration
//! version: "1.0"
//! name: "chromium checkout"
//!
//! source:
//!   kind: sqlite
//!   path: "/src/chrome/builddb.sqlite"
//!   table: filenames
//!   column: name
//!
//! matcher:
//!   max_results: 20
//!   use_parallel: true
//! ```

use std::fs;
use std::path::Path;

use matcher::RankConfig;
use serde::{Deserialize, Serialize};
use source::SourceConfig;
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PathRankConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Where candidate paths come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Ranking configuration
    #[serde(default)]
    pub matcher: MatcherYamlConfig,
}

impl PathRankConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PathRankConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.source
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.matcher.validate()?;

        Ok(())
    }

    /// Ranking settings for the core.
    pub fn rank_config(&self) -> RankConfig {
        self.matcher.to_rank_config()
    }
}

impl Default for PathRankConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            source: SourceConfig::default(),
            matcher: MatcherYamlConfig::default(),
        }
    }
}

/// Ranking YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherYamlConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default)]
    pub use_parallel: bool,
}

impl MatcherYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.max_results == 0 {
            return Err(ConfigLoadError::Validation(
                "matcher.max_results must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_rank_config(&self) -> RankConfig {
        RankConfig {
            max_results: self.max_results,
            use_parallel: self.use_parallel,
        }
    }
}

impl Default for MatcherYamlConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            use_parallel: false,
        }
    }
}

fn default_max_results() -> usize {
    RankConfig::DEFAULT_MAX_RESULTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
source:
  kind: file_list
  path: "files.txt"
matcher:
  max_results: 5
"#;

        let config = PathRankConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.source, SourceConfig::file_list("files.txt"));
        assert_eq!(config.matcher.max_results, 5);
        assert!(!config.matcher.use_parallel);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
source:
  kind: git
  repo: "/src/chromium"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = PathRankConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source, SourceConfig::git("/src/chromium"));
    }

    #[test]
    fn test_default_config() {
        let config = PathRankConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.rank_config(), RankConfig::default());
    }

    #[test]
    fn test_sqlite_defaults_table_and_column() {
        let yaml = r#"
version: "1.0"
source:
  kind: sqlite
  path: "builddb.sqlite"
"#;
        let config = PathRankConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.source, SourceConfig::sqlite("builddb.sqlite"));
    }

    #[test]
    fn test_matcher_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  max_results: 0
"#;

        let result = PathRankConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("max_results must be >= 1"));
    }

    #[test]
    fn test_source_validation() {
        let yaml = r#"
version: "1.0"
source:
  kind: sqlite
  path: "builddb.sqlite"
  table: "filenames; DROP TABLE filenames"
"#;

        let err = PathRankConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Validation(_)));
    }

    #[test]
    fn test_unsupported_version() {
        let err = PathRankConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_unknown_source_kind_is_parse_error() {
        let yaml = r#"
version: "1.0"
source:
  kind: ftp
"#;
        assert!(matches!(
            PathRankConfig::from_yaml(yaml),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }
}
