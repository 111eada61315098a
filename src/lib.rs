//! Status checker for developer tools.
//!
//! This library provides:
//! - calendar-aware elapsed time (`time`)
//! - the status records and a client for the frain backend (`service`, `client`)
//! - text and JSON reports (`report`)
//!
//! The `frain` binary wires them together behind a small CLI.

pub mod cli;
pub mod client;
pub mod error;
pub mod report;
pub mod service;
pub mod time;

// Re-export commonly used types
pub use error::{CliError, FrainError, Result};
pub use time::{decompose, format_ago, BorrowMode, Clock, TimeError};
