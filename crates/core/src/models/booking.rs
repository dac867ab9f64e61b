use serde::{Deserialize, Serialize};

use crate::{
    availability::SlotStatus,
    models::{booking_date::BookingDate, time_slot::TimeSlot},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAvailabilityResponse {
    pub date: BookingDate,
    pub slots: Vec<SlotStatus>,
    pub available: Vec<TimeSlot>,
    pub disabled: Vec<TimeSlot>,
    pub next_available: Option<TimeSlot>,
    /// How long the picker may show this answer before asking again
    pub refresh_after_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextSlotResponse {
    pub date: BookingDate,
    pub next_available: Option<TimeSlot>,
}

/// Raw picker state sent by the storefront; either field may still be empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateSlotRequest {
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReschedulePolicyResponse {
    pub window_hours: i64,
    pub max_reschedules: u32,
    pub remaining: u32,
}
