//! # Slot Availability
//!
//! Decides which slots of the catalog a customer may pick for a given day.
//!
//! ## Rules
//!
//! - A selected date on any other calendar day than `now` has full availability.
//! - On the same day (or when no date is given), a slot is disabled when its start
//!   is less than the lead-time buffer away from `now`. Slots already in the past
//!   have a negative gap and are therefore disabled too.
//!
//! Every operation is a pure function of its arguments. The storefront re-queries
//! on a timer to keep the picker fresh; nothing here caches or remembers a
//! selection.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{
    booking_date::BookingDate,
    policy::LeadTimeBuffer,
    time_slot::{SlotCatalog, TimeSlot},
};

pub const SELECT_SLOT_MESSAGE: &str = "Please select a time slot";
pub const SELECT_DATE_MESSAGE: &str = "Please select a date";
pub const SLOT_UNAVAILABLE_MESSAGE: &str =
    "This time slot is not available. Please select another time.";
pub const SLOT_AVAILABLE_MESSAGE: &str = "Time slot is available";

/// A catalog slot paired with its eligibility for a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub slot: TimeSlot,
    pub disabled: bool,
}

/// Outcome of checking a customer's date and slot choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotValidation {
    pub is_valid: bool,
    pub message: String,
}

impl SlotValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: SLOT_AVAILABLE_MESSAGE.to_string(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            message: message.to_string(),
        }
    }
}

/// Classifies catalog slots as selectable or disabled.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use glowbook_core::availability::SlotAvailabilityEngine;
///
/// let engine = SlotAvailabilityEngine::default();
/// let now = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .and_then(|d| d.and_hms_opt(10, 5, 0))
///     .unwrap();
///
/// let next = engine.next_available_slot(None, now).map(|slot| slot.label());
/// assert_eq!(next.as_deref(), Some("11:00 AM"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotAvailabilityEngine {
    catalog: SlotCatalog,
    buffer: LeadTimeBuffer,
}

impl SlotAvailabilityEngine {
    pub fn new(catalog: SlotCatalog, buffer: LeadTimeBuffer) -> Self {
        Self { catalog, buffer }
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    pub fn buffer(&self) -> LeadTimeBuffer {
        self.buffer
    }

    /// Whether `slot` cannot be booked for `selected_date` as of `now`.
    ///
    /// `None` for the date means today. The gap is measured in real elapsed time
    /// between `now` and the slot's start on `now`'s calendar day.
    pub fn is_slot_disabled(
        &self,
        slot: &TimeSlot,
        now: NaiveDateTime,
        selected_date: Option<BookingDate>,
    ) -> bool {
        if selected_date.is_some_and(|date| !date.is_same_day(now)) {
            return false;
        }

        let gap = slot.starts_on(now.date()) - now;
        gap < self.buffer.duration()
    }

    /// Every catalog slot with its disabled flag, in catalog order
    pub fn slot_statuses(
        &self,
        selected_date: Option<BookingDate>,
        now: NaiveDateTime,
    ) -> Vec<SlotStatus> {
        self.catalog
            .iter()
            .map(|slot| SlotStatus {
                slot: *slot,
                disabled: self.is_slot_disabled(slot, now, selected_date),
            })
            .collect()
    }

    pub fn available_slots(
        &self,
        selected_date: Option<BookingDate>,
        now: NaiveDateTime,
    ) -> Vec<TimeSlot> {
        self.catalog
            .iter()
            .filter(|slot| !self.is_slot_disabled(slot, now, selected_date))
            .copied()
            .collect()
    }

    pub fn disabled_slots(
        &self,
        selected_date: Option<BookingDate>,
        now: NaiveDateTime,
    ) -> Vec<TimeSlot> {
        self.catalog
            .iter()
            .filter(|slot| self.is_slot_disabled(slot, now, selected_date))
            .copied()
            .collect()
    }

    /// Earliest selectable slot, or `None` when the day is fully booked
    pub fn next_available_slot(
        &self,
        selected_date: Option<BookingDate>,
        now: NaiveDateTime,
    ) -> Option<TimeSlot> {
        self.catalog
            .iter()
            .find(|slot| !self.is_slot_disabled(slot, now, selected_date))
            .copied()
    }

    /// Checks a complete date and slot choice.
    ///
    /// The checks run in order: slot present, date present, slot not disabled.
    pub fn validate_slot_selection(
        &self,
        slot: Option<&TimeSlot>,
        selected_date: Option<BookingDate>,
        now: NaiveDateTime,
    ) -> SlotValidation {
        let Some(slot) = slot else {
            return SlotValidation::invalid(SELECT_SLOT_MESSAGE);
        };
        if selected_date.is_none() {
            return SlotValidation::invalid(SELECT_DATE_MESSAGE);
        }
        if self.is_slot_disabled(slot, now, selected_date) {
            return SlotValidation::invalid(SLOT_UNAVAILABLE_MESSAGE);
        }
        SlotValidation::valid()
    }

    /// Same as [`validate_slot_selection`](Self::validate_slot_selection) for a raw
    /// label. A blank label counts as no selection; a label that does not parse
    /// is reported as unavailable.
    pub fn validate_slot_label(
        &self,
        label: Option<&str>,
        selected_date: Option<BookingDate>,
        now: NaiveDateTime,
    ) -> SlotValidation {
        let Some(label) = label.filter(|l| !l.trim().is_empty()) else {
            return SlotValidation::invalid(SELECT_SLOT_MESSAGE);
        };
        if selected_date.is_none() {
            return SlotValidation::invalid(SELECT_DATE_MESSAGE);
        }
        match label.parse::<TimeSlot>() {
            Ok(slot) => self.validate_slot_selection(Some(&slot), selected_date, now),
            Err(_) => SlotValidation::invalid(SLOT_UNAVAILABLE_MESSAGE),
        }
    }
}
