//! Error types for frain.
//!
//! `FrainError` is the top-level error; each variant knows the process exit
//! code it maps to.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for frain operations
pub type Result<T> = std::result::Result<T, FrainError>;

/// Main error type for all frain operations
#[derive(Error, Debug)]
pub enum FrainError {
    /// CLI argument errors
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Transport errors talking to the status backend
    #[error("a network error occurred while fetching data: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with something we could not decode
    #[error("failed to decode fetched data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend does not know the requested service
    #[error("unknown service specified '{name}'")]
    UnknownService {
        /// Requested service name
        name: String,
    },

    /// Configuration file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// Path of the config file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("failed to parse config file {}: {source}", path.display())]
    Config {
        /// Path of the config file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("{reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("no {argument} specified.")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Unsupported output format
    #[error("bad format specified '{format}'")]
    BadFormat {
        /// Requested format
        format: String,
    },

    /// Second positional argument is not a known query
    #[error("unknown query specified for {service}: '{query}'")]
    UnknownQuery {
        /// Service the query was given for
        service: String,
        /// The rejected query
        query: String,
    },

    /// Start or end date could not be parsed
    #[error("{which} time error. {reason}")]
    BadDate {
        /// "start" or "end"
        which: &'static str,
        /// Reason for the error
        reason: String,
    },
}

impl FrainError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FrainError::Cli(CliError::BadDate { .. }) => 4,
            FrainError::Cli(CliError::UnknownQuery { .. }) => 2,
            FrainError::Cli(_) | FrainError::Config { .. } | FrainError::ConfigRead { .. } => 1,
            FrainError::Network(_) | FrainError::Decode(_) | FrainError::UnknownService { .. } => 2,
            FrainError::Io(_) => 3,
        }
    }

    /// Whether usage help should be shown alongside this error
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            FrainError::Cli(CliError::MissingArgument { .. } | CliError::BadFormat { .. })
        )
    }
}
