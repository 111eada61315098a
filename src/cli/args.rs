//! Command line argument parsing and validation.
//!
//! Arguments are parsed with clap and merged with the optional config file
//! into a [`RuntimeConfig`].

use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{ArgAction, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;

use super::config::FileConfig;
use crate::client::DEFAULT_HOST;
use crate::error::{CliError, Result};
use crate::report::{Format, JsonReport, Report, TextReport};
use crate::service::Service;
use crate::time::BorrowMode;

/// A status checker for various developer tools
#[derive(Parser, Debug)]
#[command(
    name = "frain",
    version,
    disable_version_flag = true,
    about = "A status checker for various developer tools.",
    long_about = "A status checker for various developer tools.

Fetches the current status, components and incident history of a service
from the frain backend.

Dates have the format YYYY-MM-DD.",
    after_help = "Examples:
  frain github                                  Fetch report for github
  frain -q github                               Summarize fetched result for github
  frain github incidents                        Fetch only incident reports
  frain github incidents 2019-01-12             Fetch incidents from start date
  frain github incidents 2019-01-12 2019-05-05  Fetch incidents from start to end dates"
)]
pub struct Args {
    /// Service to check, e.g. github
    #[arg(value_name = "SERVICE")]
    pub service: Option<String>,

    /// Query to run against the service (only `incidents` is supported)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Start date of the incident query
    #[arg(value_name = "START")]
    pub start: Option<String>,

    /// End date of the incident query
    #[arg(value_name = "END")]
    pub end: Option<String>,

    /// Configuration file with a list of services to check
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Result output format: txt or json
    #[arg(short, long, value_name = "FORMAT", default_value = "txt")]
    pub format: String,

    /// Display just the summary for the specified service
    #[arg(short, long)]
    pub quiet: bool,

    /// List the services known to the backend
    #[arg(short, long)]
    pub list: bool,

    /// GraphQL endpoint of the status backend
    #[arg(long, env = "FRAIN_HOST", value_name = "URL")]
    pub host: Option<String>,

    /// Borrow hours from days when computing elapsed time
    #[arg(long, env = "FRAIN_CARRY_HOURS")]
    pub carry_hours: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Display the current version of this program
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments and the config file
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    host: String,
    format: Format,
    quiet: bool,
    borrow: BorrowMode,
    colorize: bool,
    services: Vec<String>,
}

impl RuntimeConfig {
    /// Merges `args` over `file`; flags and environment win over the file.
    pub fn resolve(args: &Args, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let format: Format = args.format.parse()?;

        let host = args
            .host
            .clone()
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        validate_host(&host)?;

        let borrow = if args.carry_hours || file.carry_hours.unwrap_or(false) {
            BorrowMode::CarryHours
        } else {
            BorrowMode::Compatible
        };

        let colorize =
            !args.no_color && file.color.unwrap_or(true) && std::io::stdout().is_terminal();

        Ok(Self {
            host,
            format,
            quiet: args.quiet,
            borrow,
            colorize,
            services: file.services,
        })
    }

    /// GraphQL endpoint of the status backend
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn borrow_mode(&self) -> BorrowMode {
        self.borrow
    }

    /// Services listed in the config file
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Report for `service` in the configured format.
    pub fn report<'a>(&self, service: &'a Service, now: DateTime<FixedOffset>) -> Box<dyn Report + 'a> {
        match self.format {
            Format::Text => Box::new(
                TextReport::new(service, now)
                    .borrow_mode(self.borrow)
                    .colorize(self.colorize),
            ),
            Format::Json => Box::new(JsonReport::new(service)),
        }
    }
}

fn validate_host(host: &str) -> Result<()> {
    let url = url::Url::parse(host).map_err(|e| CliError::InvalidArguments {
        reason: format!("invalid host URL '{}': {}", host, e),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CliError::InvalidArguments {
            reason: format!("host URL must use http or https: {}", host),
        }
        .into());
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` date argument.
///
/// Each component is parsed on its own so the message can say which one is
/// wrong; `which` is `"start"` or `"end"`.
pub fn parse_date_arg(which: &'static str, arg: &str) -> std::result::Result<NaiveDate, CliError> {
    let bad = |reason: String| CliError::BadDate { which, reason };

    let parts: Vec<&str> = arg.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(bad("time must have the format: YYYY-MM-DD".to_string()));
    };

    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| bad(format!("failed to parse year arg in {}", arg)))?;
    let month: u32 = month
        .trim()
        .parse()
        .map_err(|_| bad(format!("failed to parse month arg in {}", arg)))?;
    let day: u32 = day
        .trim()
        .parse()
        .map_err(|_| bad(format!("failed to parse day arg in {}", arg)))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| bad(format!("bad format specified for {} time: {}", which, arg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrainError;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("frain").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn parses_positionals_and_flags() {
        let args = args(&["-q", "-f", "JSON", "github", "incidents", "2019-01-12"]);
        assert_eq!(args.service.as_deref(), Some("github"));
        assert_eq!(args.query.as_deref(), Some("incidents"));
        assert_eq!(args.start.as_deref(), Some("2019-01-12"));
        assert!(args.end.is_none());
        assert!(args.quiet);
        assert_eq!(args.format, "JSON");
    }

    #[test]
    fn short_v_prints_version() {
        let err = Args::try_parse_from(["frain", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn flags_override_config_file() {
        let file = FileConfig {
            host: Some("http://file.example/graphql".to_string()),
            carry_hours: Some(true),
            ..Default::default()
        };

        let config = RuntimeConfig::resolve(
            &args(&["--host", "http://flag.example/graphql", "github"]),
            Some(file.clone()),
        )
        .unwrap();
        assert_eq!(config.host(), "http://flag.example/graphql");
        assert_eq!(config.borrow_mode(), BorrowMode::CarryHours);

        let config = RuntimeConfig::resolve(&args(&["github"]), Some(file)).unwrap();
        assert_eq!(config.host(), "http://file.example/graphql");
    }

    #[test]
    fn rejects_bad_format_and_host() {
        let err = RuntimeConfig::resolve(&args(&["-f", "xml", "github"]), None).unwrap_err();
        assert!(matches!(err, FrainError::Cli(CliError::BadFormat { .. })));
        assert!(err.wants_usage());

        let err = RuntimeConfig::resolve(&args(&["--host", "ftp://x", "github"]), None).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn date_args_are_cleaned() {
        assert_eq!(
            parse_date_arg("start", "2019-1-2").unwrap(),
            NaiveDate::from_ymd_opt(2019, 1, 2).unwrap()
        );

        let cases = [
            ("2019-01", "start time error. time must have the format: YYYY-MM-DD"),
            ("year-01-02", "start time error. failed to parse year arg in year-01-02"),
            ("2019-xx-02", "start time error. failed to parse month arg in 2019-xx-02"),
            ("2019-01-", "start time error. failed to parse day arg in 2019-01-"),
            ("2019-02-30", "start time error. bad format specified for start time: 2019-02-30"),
        ];
        for (arg, want) in cases {
            assert_eq!(parse_date_arg("start", arg).unwrap_err().to_string(), want);
        }
    }
}
