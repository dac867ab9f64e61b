use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/policies/reschedule",
        get(handlers::policy::get_reschedule_policy),
    )
}
