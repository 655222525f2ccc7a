//! Runtime configuration for the command line tool

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::io::ParseOptions;

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sparse_arith.toml";

/// Prefix of environment variable overrides, e.g. `SPARSE_ARITH_OUTPUT_DIR`
pub const ENV_PREFIX: &str = "SPARSE_ARITH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory result files are written into
    pub output_dir: String,

    /// Reject entries outside the declared shape when parsing
    pub check_bounds: bool,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output_dir: "sample_outputs".to_string(),
            check_bounds: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with precedence: defaults → `sparse_arith.toml` → env vars
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a custom file path; a missing file is skipped
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::build(Some(path.as_ref()), true)
    }

    fn build(path: Option<&Path>, with_env: bool) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let mut builder = Config::builder()
            .set_default("output_dir", defaults.output_dir)?
            .set_default("check_bounds", defaults.check_bounds)?
            .set_default("log_level", defaults.log_level)?;

        if let Some(path) = path.filter(|p| p.exists()) {
            builder = builder.add_source(File::from(path));
        }

        if with_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        }

        builder.build()?.try_deserialize()
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            check_bounds: self.check_bounds,
        }
    }
}
