// Date utility functions
// Extracts the day/hour/minute components the layout works with

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::models::interval::TimeComponents;

/// Split a date-time into the components used for vertical placement.
pub fn time_components(date_time: NaiveDateTime) -> TimeComponents {
    TimeComponents {
        date: date_time.date(),
        hour: date_time.hour() as i32,
        minute: date_time.minute(),
    }
}

pub fn is_same_day(first: NaiveDateTime, second: NaiveDateTime) -> bool {
    first.date() == second.date()
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}
