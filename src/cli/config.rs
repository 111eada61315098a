//! Optional TOML configuration file.
//!
//! ```toml
//! host = "https://frain-server.herokuapp.com/graphql"
//! carry_hours = false
//! color = true
//! services = ["github", "twilio"]
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{FrainError, Result};

/// Settings read from `--config`; every key is optional
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// GraphQL endpoint of the status backend
    pub host: Option<String>,

    /// Borrow hours from days when computing elapsed time
    pub carry_hours: Option<bool>,

    /// Colorize text reports
    pub color: Option<bool>,

    /// Services summarized when no service is given on the command line
    pub services: Vec<String>,
}

impl FileConfig {
    /// Reads and parses the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| FrainError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents).map_err(|source| FrainError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(contents)?;
        config.services = config
            .services
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Ok(config)
    }
}
