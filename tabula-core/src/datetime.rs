//! Date rendering for the home panel.

use chrono::{Local, NaiveDate};

/// Today's date on the local wall clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Long-form rendering of a date, e.g. "Monday, January 5, 2026".
///
/// Pure function of the date; the caller decides when to re-compute
/// (at startup, and again on click in case the session crossed midnight).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
