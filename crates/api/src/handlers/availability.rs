//! # Availability Handlers
//!
//! Serves the slot picker. Each request reads the clock once and hands that
//! instant to the availability engine, so all figures in one response agree
//! with each other.
//!
//! A missing or blank `date` means today on the query endpoints. A `date` that
//! is present but not `YYYY-MM-DD` is rejected with 400 everywhere. On the
//! validation endpoint, a malformed slot label is not an error: it comes back
//! as an unavailable selection so the picker can show the message inline.

use axum::{
    Json,
    extract::{Query, State},
};
use glowbook_core::{
    availability::{SlotStatus, SlotValidation},
    errors::BookingResult,
    models::{
        booking::{NextSlotResponse, SlotAvailabilityResponse, ValidateSlotRequest},
        booking_date::BookingDate,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the slot endpoints
///
/// * `date` - Booking date as `YYYY-MM-DD`; omitted means today
#[derive(Debug, Default, Deserialize)]
pub struct SlotQuery {
    pub date: Option<String>,
}

fn parse_date(raw: Option<&str>) -> BookingResult<Option<BookingDate>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<BookingDate>()
            .map(Some)
            .inspect_err(|e| warn!("Rejected date: {}", e)),
        None => Ok(None),
    }
}

/// Lists every slot of the day with its availability
///
/// # Endpoint
///
/// ```text
/// GET /api/slots?date=2024-01-15
/// ```
///
/// # Errors
///
/// * `BookingError::InvalidDate` - `date` is not a `YYYY-MM-DD` string
#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<SlotAvailabilityResponse>, AppError> {
    let now = state.clock.now();
    let selected = parse_date(query.date.as_deref())?;
    let date = selected.unwrap_or_else(|| BookingDate::today(now));

    let slots = state.engine.slot_statuses(selected, now);
    let (open, closed): (Vec<SlotStatus>, Vec<SlotStatus>) =
        slots.iter().copied().partition(|status| !status.disabled);
    let available: Vec<_> = open.into_iter().map(|status| status.slot).collect();
    let disabled: Vec<_> = closed.into_iter().map(|status| status.slot).collect();
    let next_available = available.first().copied();

    debug!(
        %date,
        %now,
        available = available.len(),
        disabled = disabled.len(),
        "Computed slot availability"
    );

    Ok(Json(SlotAvailabilityResponse {
        date,
        slots,
        available,
        disabled,
        next_available,
        refresh_after_seconds: state.refresh_interval_seconds,
    }))
}

/// Returns the earliest bookable slot, or `null` when the day is fully booked
///
/// # Endpoint
///
/// ```text
/// GET /api/slots/next?date=2024-01-15
/// ```
#[axum::debug_handler]
pub async fn get_next_slot(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<NextSlotResponse>, AppError> {
    let now = state.clock.now();
    let selected = parse_date(query.date.as_deref())?;
    let next_available = state.engine.next_available_slot(selected, now);

    if next_available.is_none() {
        debug!(%now, "No slots left for the requested day");
    }

    Ok(Json(NextSlotResponse {
        date: selected.unwrap_or_else(|| BookingDate::today(now)),
        next_available,
    }))
}

/// Checks the customer's date and slot choice before checkout
///
/// # Endpoint
///
/// ```text
/// POST /api/slots/validate
/// {"slot": "11:00 AM", "date": "2024-01-15"}
/// ```
///
/// Unlike the query endpoints, a missing date is reported through the
/// validation result instead of defaulting to today.
#[axum::debug_handler]
pub async fn validate_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ValidateSlotRequest>,
) -> Result<Json<SlotValidation>, AppError> {
    let now = state.clock.now();
    let selected = parse_date(payload.date.as_deref())?;

    let result = state
        .engine
        .validate_slot_label(payload.slot.as_deref(), selected, now);

    if !result.is_valid {
        debug!(slot = ?payload.slot, date = ?payload.date, "Slot selection rejected: {}", result.message);
    }

    Ok(Json(result))
}
