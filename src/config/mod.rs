// src/config/mod.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::ConvertError;

/// Runtime configuration, loaded from a small YAML file.
///
/// Every field has a default, so a missing file just means "run with the
/// conventional layout".
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root directory scanned recursively for `*.pdf` input files.
    pub input_dir: PathBuf,
    /// Directory receiving the generated CSV files.
    pub output_dir: PathBuf,
    /// Static files copied verbatim into `output_dir` before generation.
    pub templates_dir: PathBuf,
    /// The state reference table: `id,name` CSV with one header line.
    pub state_table: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            templates_dir: PathBuf::from("data/templates"),
            state_table: PathBuf::from("State.csv"),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to the defaults when
    /// the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        if !path.is_file() {
            info!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let config = Config::load("no/such/config.yaml")?;
        assert_eq!(config.input_dir, PathBuf::from("data"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.templates_dir, PathBuf::from("data/templates"));
        assert_eq!(config.state_table, PathBuf::from("State.csv"));
        Ok(())
    }

    #[test]
    fn partial_file_fills_the_rest_from_defaults() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"input_dir: acf-data\noutput_dir: normalized\n")?;

        let config = Config::load(tmp.path())?;
        assert_eq!(config.input_dir, PathBuf::from("acf-data"));
        assert_eq!(config.output_dir, PathBuf::from("normalized"));
        assert_eq!(config.state_table, PathBuf::from("State.csv"));
        Ok(())
    }

    #[test]
    fn unknown_keys_are_rejected() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"input_dri: typo\n")?;

        assert!(matches!(
            Config::load(tmp.path()).unwrap_err(),
            ConvertError::Config(_)
        ));
        Ok(())
    }
}
