use crate::error::{CleanError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "./data.txt";
pub const DEFAULT_OUTPUT: &str = "../internal/repo/fasttext/labels.txt";

/// Run configuration. Every field has a default, so an empty JSON object (or
/// running without `--config`) reproduces the fixed-path behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleanConfig {
    /// Line-per-example UTF-8 text to clean
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Destination for the cleaned, shuffled labels
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Fixed shuffle seed; unseeded when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Create the output's parent directories when missing
    #[serde(default = "default_create_output_dir")]
    pub create_output_dir: bool,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_create_output_dir() -> bool {
    true
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            seed: None,
            create_output_dir: default_create_output_dir(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl CleanConfig {
    /// Load config from a JSON file. Fields missing from the file keep their
    /// defaults; a missing file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CleanError::at_path(path, e))?;
        let config: CleanConfig =
            serde_json::from_str(&content).map_err(CleanError::Serialization)?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(CleanError::Serialization)
    }
}
