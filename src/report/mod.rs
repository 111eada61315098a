//! Report generation for fetched services.
//!
//! A [`Report`] renders either the whole service (components and incident
//! history) or only its incidents, optionally collapsed to a one-line summary.

mod format;
mod json;
mod text;

use std::io::{self, Write};
use std::str::FromStr;

pub use json::JsonReport;
pub use text::TextReport;

use crate::error::CliError;

/// Output formats understood by `--format`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(CliError::BadFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Renders a service in some output format
pub trait Report {
    /// Components followed by incident history, or a one-line summary when `quiet`.
    fn render_all(&self, out: &mut dyn Write, quiet: bool) -> io::Result<()>;

    /// Incident history only, or the number of incidents reported today when `quiet`.
    fn render_incidents(&self, out: &mut dyn Write, quiet: bool) -> io::Result<()>;
}
