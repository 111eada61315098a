//! Calendar-aware elapsed time.
//!
//! `decompose` breaks the distance between two instants into years, months,
//! days, hours, minutes and seconds by field-wise subtraction with borrowing,
//! and `format_ago` renders the largest non-zero unit as "N units ago".

mod ago;
mod clock;

pub use ago::{format_ago, format_ago_with, TimeError};
pub use clock::{decompose, decompose_with, BorrowMode, Clock};
