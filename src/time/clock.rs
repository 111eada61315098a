//! Field-wise difference between two calendar instants.

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, TimeZone, Timelike};

/// Calendar-normalized difference between two instants, excluding sub-second precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Clock {
    pub seconds: i32,
    pub minutes: i32,
    /// Can be negative under [`BorrowMode::Compatible`] when the earlier
    /// instant has a later time of day than the later one.
    pub hours: i32,

    pub days: i32,
    pub months: i32,
    pub years: i32,
}

impl Clock {
    /// True when every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Controls how a negative hour difference is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorrowMode {
    /// Borrow seconds, minutes, days and months, but leave a negative hour
    /// difference in place. Matches the historical output of frain.
    #[default]
    Compatible,
    /// Also borrow 24 hours from the day count, keeping hours in `0..24`.
    CarryHours,
}

/// Computes the elapsed calendar time between `t1` and `t2` in either order.
///
/// `t1`'s wall-clock reading is reinterpreted in `t2`'s zone before the
/// fields are compared.
pub fn decompose<Tz1: TimeZone, Tz2: TimeZone>(t1: &DateTime<Tz1>, t2: &DateTime<Tz2>) -> Clock {
    decompose_with(t1, t2, BorrowMode::default())
}

/// Like [`decompose`], with an explicit [`BorrowMode`].
pub fn decompose_with<Tz1: TimeZone, Tz2: TimeZone>(
    t1: &DateTime<Tz1>,
    t2: &DateTime<Tz2>,
    mode: BorrowMode,
) -> Clock {
    let zone = t2.timezone();
    let t1 = match zone.from_local_datetime(&t1.naive_local()) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t,
        // wall-clock reading falls in a gap of the target zone
        LocalResult::None => t1.with_timezone(&zone),
    };
    let t2 = t2.clone();

    let (later, earlier) = if t2 > t1 { (t2, t1) } else { (t1, t2) };

    let mut seconds = later.second() as i32 - earlier.second() as i32;
    let mut minutes = later.minute() as i32 - earlier.minute() as i32;
    let mut hours = later.hour() as i32 - earlier.hour() as i32;
    let mut days = later.day() as i32 - earlier.day() as i32;
    let mut months = later.month() as i32 - earlier.month() as i32;
    let mut years = later.year() - earlier.year();

    if seconds < 0 {
        seconds += 60;
        minutes -= 1;
    }

    if minutes < 0 {
        minutes += 60;
        hours -= 1;
    }

    if mode == BorrowMode::CarryHours && hours < 0 {
        hours += 24;
        days -= 1;
    }

    // Compatible mode borrows once; CarryHours keeps walking back a month
    // until days is non-negative (at most twice, from a short February).
    let (mut year, mut month) = (later.year(), later.month());
    while days < 0 {
        days += days_before_month(year, month);
        months -= 1;
        if mode == BorrowMode::Compatible {
            break;
        }
        (year, month) = if month == 1 { (year - 1, 12) } else { (year, month - 1) };
    }

    if months < 0 {
        months += 12;
        years -= 1;
    }

    Clock {
        seconds,
        minutes,
        hours,
        days,
        months,
        years,
    }
}

/// Length of the month preceding `year`-`month`, i.e. day 0 of that month.
fn days_before_month(year: i32, month: u32) -> i32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day() as i32)
}
