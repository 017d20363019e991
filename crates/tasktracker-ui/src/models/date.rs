//! Date helpers for the form and task cards

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the browser's local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Long human date, e.g. "March 12th, 2025".
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{} {day}{}, {}", date.format("%B"), ordinal_suffix(day), date.year())
}

const fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
