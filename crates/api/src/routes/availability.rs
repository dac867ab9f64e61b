use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", get(handlers::availability::get_slots))
        .route("/api/slots/next", get(handlers::availability::get_next_slot))
        .route(
            "/api/slots/validate",
            post(handlers::availability::validate_slot),
        )
}
