//! Validation helper functions for task input
//!
//! This module contains the checks the menu runs before anything reaches the
//! tracker: numeric range checks and calendar validity of due dates.

use crate::tracker::DueDate;
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// Inclusive bounds accepted for each due date component
pub const DAY_RANGE: (i64, i64) = (1, 31);
pub const MONTH_RANGE: (i64, i64) = (1, 12);
pub const YEAR_RANGE: (i64, i64) = (1, 9999);

/// Parse a whole number typed at a prompt
///
/// # Returns
/// `None` if the trimmed input is not an integer
pub fn parse_number(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// Check that `value` lies within `min..=max`
pub fn in_range(value: i64, min: i64, max: i64) -> bool {
    (min..=max).contains(&value)
}

/// Build a due date after checking it exists on the calendar
///
/// # Arguments
/// * `day` - Day of month
/// * `month` - Month, 1-12
/// * `year` - Year, 1-9999
///
/// # Returns
/// Result containing the due date or an error naming the rejected date.
/// Leap years follow the Gregorian rules (29/2/2024 is valid, 29/2/1900 is not).
pub fn parse_due_date(day: u32, month: u32, year: i32) -> Result<DueDate> {
    if !in_range(i64::from(year), YEAR_RANGE.0, YEAR_RANGE.1) {
        bail!("Invalid year '{}'. Use a year between 1 and 9999", year);
    }
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        bail!("Invalid date '{}/{}/{}'", day, month, year);
    }
    Ok(DueDate::new(day, month, year))
}
