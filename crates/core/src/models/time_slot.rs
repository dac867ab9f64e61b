use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// First slot of the standard business day (09:00 AM)
pub const STANDARD_OPEN_HOUR: u32 = 9;

/// Last slot of the standard business day (05:00 PM)
pub const STANDARD_CLOSE_HOUR: u32 = 17;

/// A fixed point in the business day at which a service may begin.
///
/// Slots are stored as a wall-clock time with zero seconds and are rendered with
/// the storefront's 12-hour label format, e.g. `"09:00 AM"` or `"12:00 PM"`.
///
/// # Example
///
/// ```
/// use glowbook_core::models::time_slot::TimeSlot;
///
/// let slot: TimeSlot = "05:00 PM".parse().unwrap();
/// assert_eq!(slot.hour(), 17);
/// assert_eq!(slot.to_string(), "05:00 PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    time: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot from a 24-hour `hour` and a `minute`.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - hour above 23 or minute above 59
    pub fn new(hour: u32, minute: u32) -> BookingResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(|time| Self { time })
            .ok_or_else(|| {
                BookingError::Validation(format!("{hour:02}:{minute:02} is not a valid time of day"))
            })
    }

    /// Hour in 24-hour form (0-23)
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Display label, e.g. `"09:00 AM"`
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// The instant this slot starts on the given calendar day
    pub fn starts_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.time)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, period) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{:02}:{:02} {}", hour, self.minute(), period)
    }
}

/// Parses a 12-hour label such as `"9:00 am"` or `"12:30 PM"`.
///
/// `12 AM` maps to hour 0, `12 PM` stays at 12 and every other `PM` hour gains 12.
/// Anything that is not `H:MM` or `HH:MM` followed by `AM`/`PM` is rejected with
/// `BookingError::MalformedSlot`.
impl FromStr for TimeSlot {
    type Err = BookingError;

    fn from_str(label: &str) -> BookingResult<Self> {
        let malformed = || BookingError::MalformedSlot(label.to_string());

        let mut parts = label.split_whitespace();
        let (Some(clock), Some(period), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let (hour, minute) = clock.split_once(':').ok_or_else(malformed)?;
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(hour) || hour.len() > 2 || !is_digits(minute) || minute.len() != 2 {
            return Err(malformed());
        }

        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(malformed());
        }

        let hour = match period.to_ascii_uppercase().as_str() {
            "AM" if hour == 12 => 0,
            "AM" => hour,
            "PM" if hour == 12 => 12,
            "PM" => hour + 12,
            _ => return Err(malformed()),
        };

        Self::new(hour, minute).map_err(|_| malformed())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = BookingError;

    fn try_from(label: String) -> BookingResult<Self> {
        label.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// The ordered, fixed set of slots a customer can choose from.
///
/// Slots are kept sorted by time of day and free of duplicates, so iteration
/// order is always the canonical morning-to-evening order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TimeSlot>", into = "Vec<TimeSlot>")]
pub struct SlotCatalog {
    slots: Vec<TimeSlot>,
}

impl SlotCatalog {
    /// Hourly slots from 09:00 AM through 05:00 PM
    pub fn standard() -> Self {
        Self::build_hourly(STANDARD_OPEN_HOUR, STANDARD_CLOSE_HOUR)
    }

    /// Hourly slots from `open_hour` through `close_hour`, both inclusive.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - `open_hour` after `close_hour`, or `close_hour` above 23
    pub fn hourly(open_hour: u32, close_hour: u32) -> BookingResult<Self> {
        if close_hour > 23 {
            return Err(BookingError::Validation(format!(
                "Closing hour {close_hour} is outside 0-23"
            )));
        }
        if open_hour > close_hour {
            return Err(BookingError::Validation(format!(
                "Opening hour {open_hour} is after closing hour {close_hour}"
            )));
        }
        Ok(Self::build_hourly(open_hour, close_hour))
    }

    fn build_hourly(open_hour: u32, close_hour: u32) -> Self {
        Self::from_slots((open_hour..=close_hour).filter_map(|hour| TimeSlot::new(hour, 0).ok()))
    }

    /// Builds a catalog from arbitrary slots, sorting and de-duplicating them
    pub fn from_slots(slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        let mut slots: Vec<TimeSlot> = slots.into_iter().collect();
        slots.sort();
        slots.dedup();
        Self { slots }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.slots.binary_search(slot).is_ok()
    }

    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(TimeSlot::label).collect()
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<TimeSlot>> for SlotCatalog {
    fn from(slots: Vec<TimeSlot>) -> Self {
        Self::from_slots(slots)
    }
}

impl From<SlotCatalog> for Vec<TimeSlot> {
    fn from(catalog: SlotCatalog) -> Self {
        catalog.slots
    }
}
