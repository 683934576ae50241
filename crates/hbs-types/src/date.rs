use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// A `YYYY-MM-DD` calendar date used for bookings and stays.
///
/// Only the shape of the date is validated: month must be in `1..=12` and day
/// in `1..=31`. There is no per-month or leap-year checking, which matches the
/// approximate day arithmetic in [`StayDate::ordinal`].
///
/// The text is kept as entered (minus surrounding whitespace) and is what
/// `Display` and serde produce, so `2024-1-5` stays `2024-1-5`.
///
/// Ordering: `year` → `month` → `day` → text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StayDate {
    year: i32,
    month: u32,
    day: u32,
    text: String,
}

impl StayDate {
    /// Create a date from explicit components, rendered as `YYYY-MM-DD`.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TypeError> {
        if !(1..=12).contains(&month) {
            return Err(TypeError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
                reason: format!("month {month} is outside 1..=12"),
            });
        }
        if !(1..=31).contains(&day) {
            return Err(TypeError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
                reason: format!("day {day} is outside 1..=31"),
            });
        }
        Ok(Self {
            year,
            month,
            day,
            text: format!("{year:04}-{month:02}-{day:02}"),
        })
    }

    /// Parse a `YYYY-MM-DD` string. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let invalid = |reason: &str| TypeError::InvalidDate {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        let mut parts = trimmed.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected YYYY-MM-DD"));
        };

        let year = parse_component::<i32>(year).ok_or_else(|| invalid("year is not a number"))?;
        let month =
            parse_component::<u32>(month).ok_or_else(|| invalid("month is not a number"))?;
        let day = parse_component::<u32>(day).ok_or_else(|| invalid("day is not a number"))?;

        let date = Self::new(year, month, day).map_err(|err| match err {
            TypeError::InvalidDate { reason, .. } => TypeError::InvalidDate {
                input: input.to_string(),
                reason,
            },
            other => other,
        })?;
        Ok(Self {
            text: trimmed.to_string(),
            ..date
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The date as it was entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Approximate day number: `year * 365 + month * 30 + day`.
    ///
    /// Every month counts as 30 days and no leap years are applied. Stay
    /// lengths are differences of these ordinals, not calendar-accurate
    /// night counts.
    pub fn ordinal(&self) -> i64 {
        i64::from(self.year) * DAYS_PER_YEAR
            + i64::from(self.month) * DAYS_PER_MONTH
            + i64::from(self.day)
    }

    /// Approximate number of days from `self` until `later`.
    ///
    /// Negative when `later` precedes `self`.
    pub fn days_until(&self, later: &Self) -> i64 {
        later.ordinal() - self.ordinal()
    }
}

fn parse_component<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for StayDate {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StayDate {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StayDate> for String {
    fn from(date: StayDate) -> Self {
        date.text
    }
}

impl fmt::Debug for StayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StayDate({self})")
    }
}

impl fmt::Display for StayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
