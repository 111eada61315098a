//! What a parsed command line asks frain to do, and doing it.

use chrono::{DateTime, FixedOffset};
use std::io::Write;

use super::args::{parse_date_arg, Args, RuntimeConfig};
use crate::client::ServiceDirectory;
use crate::error::{CliError, Result};
use crate::service::{TimeRange, SUPPORTED_SERVICES};

/// Second positional argument selecting the incident-only report
pub const INCIDENTS_QUERY: &str = "incidents";

/// A single frain invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the services known to the backend
    List,

    /// Full report (or summary) for one service
    All { service: String },

    /// Incident history for one service within a date window
    Incidents { service: String, range: TimeRange },

    /// Summary of every service listed in the config file
    Summaries { services: Vec<String> },
}

impl Command {
    /// Works out the command from the positional arguments.
    pub fn from_args(args: &Args, config: &RuntimeConfig) -> Result<Self> {
        if args.list {
            return Ok(Command::List);
        }

        let Some(service) = args.service.as_deref() else {
            if config.services().is_empty() {
                return Err(CliError::MissingArgument {
                    argument: "service".to_string(),
                }
                .into());
            }
            return Ok(Command::Summaries {
                services: config.services().to_vec(),
            });
        };
        let service = service.to_lowercase();

        let Some(query) = args.query.as_deref() else {
            return Ok(Command::All { service });
        };

        if query != INCIDENTS_QUERY {
            return Err(CliError::UnknownQuery {
                service,
                query: query.to_string(),
            }
            .into());
        }

        let mut range = TimeRange::default();
        if let Some(start) = args.start.as_deref() {
            range.start = parse_date_arg("start", start)?;
        }
        if let Some(end) = args.end.as_deref() {
            range.end = parse_date_arg("end", end)?;
        }

        Ok(Command::Incidents { service, range })
    }
}

/// Runs `command` against `directory`, writing the report to `out`.
///
/// Returns the process exit code.
pub async fn execute<D: ServiceDirectory>(
    command: &Command,
    config: &RuntimeConfig,
    directory: &D,
    out: &mut dyn Write,
    now: DateTime<FixedOffset>,
) -> Result<i32> {
    match command {
        Command::List => {
            let names = match directory.service_names().await {
                Ok(names) => names,
                Err(e) => {
                    log::warn!("Falling back to the built-in service list: {}", e);
                    SUPPORTED_SERVICES.iter().map(|s| s.to_string()).collect()
                }
            };
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
        Command::All { service } => {
            let service = directory.service(service, &TimeRange::default()).await?;
            config.report(&service, now).render_all(out, config.quiet())?;
        }
        Command::Incidents { service, range } => {
            let service = directory.service(service, range).await?;
            config
                .report(&service, now)
                .render_incidents(out, config.quiet())?;
        }
        Command::Summaries { services } => {
            return summarize(services, config, directory, out, now).await;
        }
    }

    Ok(0)
}

async fn summarize<D: ServiceDirectory>(
    services: &[String],
    config: &RuntimeConfig,
    directory: &D,
    out: &mut dyn Write,
    now: DateTime<FixedOffset>,
) -> Result<i32> {
    let mut exit_code = 0;

    for name in services {
        match directory.service(name, &TimeRange::default()).await {
            Ok(service) => config.report(&service, now).render_all(out, true)?,
            Err(e) => {
                log::warn!("Skipping {}: {}", name, e);
                writeln!(out, "{}: {}", name, e)?;
                if exit_code == 0 {
                    exit_code = e.exit_code();
                }
            }
        }
    }

    Ok(exit_code)
}
