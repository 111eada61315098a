//! Command line interface for frain.
//!
//! Parses arguments, merges them with the optional config file, fetches the
//! requested service and prints the report to stdout.

mod args;
pub mod commands;
mod config;

pub use args::{parse_date_arg, Args, RuntimeConfig};
pub use commands::{execute, Command};
pub use config::FileConfig;

use chrono::Local;
use clap::CommandFactory;

use crate::client::GraphQlClient;
use crate::error::Result;

/// Main CLI entry point, returning the process exit code
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    log::debug!("{:?}", args);

    let file = args.config.as_deref().map(FileConfig::load).transpose()?;
    let config = RuntimeConfig::resolve(&args, file)?;
    let command = Command::from_args(&args, &config)?;

    let client = GraphQlClient::new(config.host())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    execute(&command, &config, &client, &mut out, Local::now().fixed_offset()).await
}

/// One-line usage string
pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
