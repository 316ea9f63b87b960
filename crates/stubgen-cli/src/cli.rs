//! CLI argument definitions and config assembly.

use crate::error::{CliError, Result};
use clap::Parser;
use std::path::PathBuf;
use stubgen_pipeline::PipelineConfig;

/// Stubgen - Generate failing test stubs for every public operation of every
/// type found in a directory of Rust source files.
#[derive(Debug, Parser)]
#[command(name = "stubgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source directory to scan (direct children only)
    pub source: Option<PathBuf>,

    /// Destination directory for generated stubs (must already exist)
    pub dest: Option<PathBuf>,

    /// Maximum files read concurrently
    #[arg(long, env = "STUBGEN_READ_CONCURRENCY", default_value_t = 4)]
    pub read_concurrency: usize,

    /// Maximum files transformed concurrently
    #[arg(long, env = "STUBGEN_GENERATE_CONCURRENCY", default_value_t = 4)]
    pub generate_concurrency: usize,

    /// Maximum stubs written concurrently
    #[arg(long, env = "STUBGEN_WRITE_CONCURRENCY", default_value_t = 4)]
    pub write_concurrency: usize,

    /// Capacity of the queues between pipeline stages
    #[arg(long, default_value_t = 64)]
    pub queue_capacity: usize,

    /// Load the full pipeline configuration from a TOML file instead of
    /// the positional arguments and flags
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only print the summary when something failed
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Assemble the pipeline configuration from a config file or from the
    /// positional arguments plus flags.
    pub fn load_config(&self) -> Result<PipelineConfig> {
        if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path)?;
            return PipelineConfig::from_toml(&text).map_err(CliError::Config);
        }

        let source = self
            .source
            .clone()
            .ok_or_else(|| CliError::InvalidInput("SOURCE is required unless --config is given".to_string()))?;
        let dest = self
            .dest
            .clone()
            .ok_or_else(|| CliError::InvalidInput("DEST is required unless --config is given".to_string()))?;

        let mut config = PipelineConfig::new(source, dest);
        config.read_concurrency = self.read_concurrency;
        config.generate_concurrency = self.generate_concurrency;
        config.write_concurrency = self.write_concurrency;
        config.queue_capacity = self.queue_capacity;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_args_build_config() {
        let cli = Cli::try_parse_from(["stubgen", "src", "out"]).unwrap();
        let config = cli.load_config().unwrap();

        assert_eq!(config.source_dir, PathBuf::from("src"));
        assert_eq!(config.dest_dir, PathBuf::from("out"));
        assert_eq!(config.read_concurrency, 4);
    }

    #[test]
    fn test_concurrency_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "stubgen",
            "src",
            "out",
            "--read-concurrency",
            "8",
            "--generate-concurrency",
            "2",
            "--write-concurrency",
            "1",
            "--queue-capacity",
            "16",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();

        assert_eq!(config.read_concurrency, 8);
        assert_eq!(config.generate_concurrency, 2);
        assert_eq!(config.write_concurrency, 1);
        assert_eq!(config.queue_capacity, 16);
    }

    #[test]
    fn test_missing_positionals_rejected() {
        let cli = Cli::try_parse_from(["stubgen"]).unwrap();
        assert!(matches!(cli.load_config(), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_config_file_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stubgen.toml");
        std::fs::write(
            &path,
            r#"
            source_dir = "from-file"
            dest_dir = "out"
            read_concurrency = 9
            "#,
        )
        .unwrap();

        let cli =
            Cli::try_parse_from(["stubgen", "--config", path.to_str().unwrap()]).unwrap();
        let config = cli.load_config().unwrap();

        assert_eq!(config.source_dir, PathBuf::from("from-file"));
        assert_eq!(config.read_concurrency, 9);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.queue_capacity, 64);
    }
}
