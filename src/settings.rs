use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Folder saved postings land in unless told otherwise.
pub const DEFAULT_OUT_DIR: &str = "staging/manual-saves";

/// Environment settings, `JOBSAVE_*`. Command-line flags take precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub out_dir: PathBuf,
    pub overwrite: bool,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("JOBSAVE").try_parsing(true))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("out_dir", DEFAULT_OUT_DIR)?
            .set_default("overwrite", false)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
