//! # Glowbook API
//!
//! The API crate serves slot availability to the Glowbook storefront. The
//! storefront's picker, checkout form and reschedule dialog call these endpoints
//! instead of computing eligibility in the browser.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Read the clock, call the availability engine, shape responses
//! - **Middleware**: Error mapping
//! - **Config**: Environment configuration
//!
//! The API uses Axum as the web framework. All booking rules live in
//! `glowbook-core`; this crate holds no state beyond configuration.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use glowbook_core::{
    availability::SlotAvailabilityEngine,
    clock::{Clock, SystemClock},
    models::policy::ReschedulePolicy,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Slot rules for the configured business day
    pub engine: SlotAvailabilityEngine,

    /// Source of "now" for every request
    pub clock: Arc<dyn Clock>,

    /// Reschedule limits echoed to clients
    pub reschedule_policy: ReschedulePolicy,

    /// Suggested interval between availability refreshes
    pub refresh_interval_seconds: u64,
}

impl ApiState {
    /// Builds the state described by `config`, reading time from `clock`
    ///
    /// # Errors
    ///
    /// Fails when the configured business hours do not form a valid catalog
    pub fn from_config(config: &config::ApiConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            engine: config.engine()?,
            clock,
            reschedule_policy: ReschedulePolicy::default(),
            refresh_interval_seconds: config.refresh_interval_seconds,
        })
    }
}

/// Builds the application router with all routes attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot picker endpoints
        .merge(routes::availability::routes())
        // Reschedule policy endpoints
        .merge(routes::policy::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration
///
/// Sets up logging, builds the availability engine from the configured
/// business hours and lead time, and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = ApiState::from_config(&config, Arc::new(SystemClock))?;
    info!(
        slots = state.engine.catalog().len(),
        lead_time_minutes = state.engine.buffer().minutes(),
        "Slot catalog loaded"
    );

    let app = app(Arc::new(state));

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
