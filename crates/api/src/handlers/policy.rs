use axum::{
    Json,
    extract::{Query, State},
};
use glowbook_core::models::booking::ReschedulePolicyResponse;
use serde::Deserialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Debug, Default, Deserialize)]
pub struct RescheduleQuery {
    /// Reschedules the booking has already used
    pub used: Option<u32>,
}

/// Describes the reschedule limits for display.
///
/// The booking backend enforces these limits; this endpoint only reports them.
pub async fn get_reschedule_policy(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<RescheduleQuery>,
) -> Json<ReschedulePolicyResponse> {
    let policy = state.reschedule_policy;

    Json(ReschedulePolicyResponse {
        window_hours: policy.window_hours(),
        max_reschedules: policy.max_reschedules,
        remaining: policy.remaining(query.used.unwrap_or(0)),
    })
}
