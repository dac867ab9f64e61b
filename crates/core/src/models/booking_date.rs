use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar day a service is requested for, with no time component.
///
/// Comparisons against "today" happen at day granularity only, so no timezone
/// conversion is involved once the caller has produced a local wall-clock `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar day of `now`
    pub fn today(now: NaiveDateTime) -> Self {
        Self(now.date())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whether this date is the same calendar day as `now`
    pub fn is_same_day(&self, now: NaiveDateTime) -> bool {
        self.0 == now.date()
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Parses a strict `YYYY-MM-DD` date string
impl FromStr for BookingDate {
    type Err = BookingError;

    fn from_str(s: &str) -> BookingResult<Self> {
        let invalid = || BookingError::InvalidDate(format!("'{s}' is not a YYYY-MM-DD date"));

        // chrono accepts single-digit months and days, the storefront never sends them
        if s.len() != 10 {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl From<NaiveDate> for BookingDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl TryFrom<String> for BookingDate {
    type Error = BookingError;

    fn try_from(s: String) -> BookingResult<Self> {
        s.parse()
    }
}

impl From<BookingDate> for String {
    fn from(date: BookingDate) -> Self {
        date.to_string()
    }
}
