//! Configuration for pipeline runs
//!
//! Defines per-stage concurrency bounds and the inter-stage queue capacity.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_concurrency() -> usize {
    4
}

fn default_queue_capacity() -> usize {
    64
}

/// Configuration for one pipeline run
///
/// Created once at invocation and immutable thereafter; the pipeline owns it
/// for the run's lifetime.
///
/// # Examples
///
/// ```
/// use stubgen_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::new("src", "generated");
/// assert_eq!(config.read_concurrency, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory whose direct children are scanned (non-recursive)
    pub source_dir: PathBuf,

    /// Directory artifacts are written into (must already exist)
    pub dest_dir: PathBuf,

    /// Maximum files read concurrently
    /// Default: 4
    #[serde(default = "default_concurrency")]
    pub read_concurrency: usize,

    /// Maximum file contents transformed concurrently
    /// Default: 4
    #[serde(default = "default_concurrency")]
    pub generate_concurrency: usize,

    /// Maximum artifacts written concurrently
    /// Default: 4
    #[serde(default = "default_concurrency")]
    pub write_concurrency: usize,

    /// Capacity of each inter-stage queue; a full queue throttles the
    /// upstream stage instead of buffering without limit
    /// Default: 64
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl PipelineConfig {
    /// Create a configuration with default concurrency bounds
    pub fn new(source_dir: impl AsRef<Path>, dest_dir: impl AsRef<Path>) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            dest_dir: dest_dir.as_ref().to_path_buf(),
            read_concurrency: default_concurrency(),
            generate_concurrency: default_concurrency(),
            write_concurrency: default_concurrency(),
            queue_capacity: default_queue_capacity(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.source_dir.as_os_str().is_empty() {
            return Err("source_dir must not be empty".to_string());
        }
        if self.dest_dir.as_os_str().is_empty() {
            return Err("dest_dir must not be empty".to_string());
        }
        if self.read_concurrency == 0 {
            return Err("read_concurrency must be at least 1".to_string());
        }
        if self.generate_concurrency == 0 {
            return Err("generate_concurrency must be at least 1".to_string());
        }
        if self.write_concurrency == 0 {
            return Err("write_concurrency must be at least 1".to_string());
        }
        if self.queue_capacity == 0 {
            return Err("queue_capacity must be at least 1".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_is_valid() {
        let config = PipelineConfig::new("src", "out");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_source_dir_rejected() {
        let config = PipelineConfig::new("", "out");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_dest_dir_rejected() {
        let config = PipelineConfig::new("src", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = PipelineConfig::new("src", "out");
        config.read_concurrency = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::new("src", "out");
        config.generate_concurrency = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::new("src", "out");
        config.write_concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_queue_capacity_rejected() {
        let mut config = PipelineConfig::new("src", "out");
        config.queue_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::new("src", "out");
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.source_dir, parsed.source_dir);
        assert_eq!(config.dest_dir, parsed.dest_dir);
        assert_eq!(config.read_concurrency, parsed.read_concurrency);
        assert_eq!(config.queue_capacity, parsed.queue_capacity);
    }

    #[test]
    fn test_toml_defaults_applied() {
        let parsed = PipelineConfig::from_toml(
            r#"
            source_dir = "src"
            dest_dir = "out"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.read_concurrency, 4);
        assert_eq!(parsed.generate_concurrency, 4);
        assert_eq!(parsed.write_concurrency, 4);
        assert_eq!(parsed.queue_capacity, 64);
    }
}
