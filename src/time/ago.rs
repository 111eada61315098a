//! "N units ago" rendering of a [`Clock`].

use chrono::{DateTime, TimeZone};
use thiserror::Error;

use super::clock::{decompose_with, BorrowMode, Clock};

/// Errors produced while formatting elapsed time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The measured time lies after the reference time
    #[error("reference time argument is in the future")]
    FutureTime,
}

/// Describes how long ago `then` was, as seen from `now`.
///
/// Only the largest non-zero unit is reported, e.g. `"3 days ago"` or
/// `"1 minute ago"`. Equal instants give `"0 seconds ago"`.
///
/// # Errors
///
/// Returns [`TimeError::FutureTime`] when `then` is after `now`.
pub fn format_ago<Tz1: TimeZone, Tz2: TimeZone>(
    then: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
) -> Result<String, TimeError> {
    format_ago_with(then, now, BorrowMode::default())
}

/// Like [`format_ago`], with an explicit [`BorrowMode`].
pub fn format_ago_with<Tz1: TimeZone, Tz2: TimeZone>(
    then: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
    mode: BorrowMode,
) -> Result<String, TimeError> {
    if then > now {
        return Err(TimeError::FutureTime);
    }

    let (count, unit) = largest_unit(&decompose_with(now, then, mode));
    let plural = if count == 1 { "" } else { "s" };

    Ok(format!("{count} {unit}{plural} ago"))
}

fn largest_unit(elapsed: &Clock) -> (i32, &'static str) {
    [
        (elapsed.years, "year"),
        (elapsed.months, "month"),
        (elapsed.days, "day"),
        (elapsed.hours, "hour"),
        (elapsed.minutes, "minute"),
    ]
    .into_iter()
    .find(|(count, _)| *count > 0)
    .unwrap_or((elapsed.seconds, "second"))
}
