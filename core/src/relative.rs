//! Strict relative time ("in 3 days", "2 hours ago").
//!
//! The distance is expressed in exactly one unit picked from its magnitude
//! and rounded half-up. A month is 30 days and a year 365 days; a rounded
//! value of 12 months is reported as `1 year`.

use chrono::{DateTime, Utc};

const MINUTES_IN_HOUR: f64 = 60.0;
const MINUTES_IN_DAY: f64 = 1_440.0;
const MINUTES_IN_MONTH: f64 = 43_200.0;
const MINUTES_IN_YEAR: f64 = 525_600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    fn name(&self) -> &str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }
}

/// Distance between two instants as `(value, unit)`, sign ignored
pub fn strict_distance(date: DateTime<Utc>, base: DateTime<Utc>) -> (u64, Unit) {
    let millis = (date - base).num_milliseconds().unsigned_abs() as f64;
    let minutes = millis / 60_000.0;

    if minutes < 1.0 {
        ((millis / 1_000.0).round() as u64, Unit::Second)
    } else if minutes < MINUTES_IN_HOUR {
        (minutes.round() as u64, Unit::Minute)
    } else if minutes < MINUTES_IN_DAY {
        ((minutes / MINUTES_IN_HOUR).round() as u64, Unit::Hour)
    } else if minutes < MINUTES_IN_MONTH {
        ((minutes / MINUTES_IN_DAY).round() as u64, Unit::Day)
    } else if minutes < MINUTES_IN_YEAR {
        let months = (minutes / MINUTES_IN_MONTH).round() as u64;
        if months == 12 {
            (1, Unit::Year)
        } else {
            (months, Unit::Month)
        }
    } else {
        ((minutes / MINUTES_IN_YEAR).round() as u64, Unit::Year)
    }
}

/// Format `date` relative to `base` with an `in …` / `… ago` suffix
pub fn format_relative(date: DateTime<Utc>, base: DateTime<Utc>) -> String {
    let (value, unit) = strict_distance(date, base);
    let amount = if value == 1 {
        format!("1 {}", unit.name())
    } else {
        format!("{} {}s", value, unit.name())
    };

    if date > base {
        format!("in {}", amount)
    } else {
        format!("{} ago", amount)
    }
}
