//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Glowbook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `SLOT_LEAD_TIME_MINUTES`: Minimum gap before a same-day slot (default: 30)
//! - `BUSINESS_OPEN_HOUR`: Hour of the first slot, 24-hour clock (default: 9)
//! - `BUSINESS_CLOSE_HOUR`: Hour of the last slot, 24-hour clock (default: 17)
//! - `SLOT_REFRESH_INTERVAL_SECONDS`: How often the storefront should re-query (default: 60)

use eyre::{Result, WrapErr};
use glowbook_core::{
    availability::SlotAvailabilityEngine,
    models::{
        policy::{DEFAULT_LEAD_TIME_MINUTES, LeadTimeBuffer},
        time_slot::{STANDARD_CLOSE_HOUR, STANDARD_OPEN_HOUR, SlotCatalog},
    },
};
use std::env;
use tracing::Level;

/// Configuration for the Glowbook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use glowbook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Lead-time buffer for same-day bookings, in minutes
    pub lead_time_minutes: u32,

    /// Hour of the first slot of the day
    pub business_open_hour: u32,

    /// Hour of the last slot of the day
    pub business_close_hour: u32,

    /// Suggested re-query interval handed to clients
    pub refresh_interval_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            lead_time_minutes: DEFAULT_LEAD_TIME_MINUTES,
            business_open_hour: STANDARD_OPEN_HOUR,
            business_close_hour: STANDARD_CLOSE_HOUR,
            refresh_interval_seconds: 60,
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - SLOT_LEAD_TIME_MINUTES, BUSINESS_OPEN_HOUR or BUSINESS_CLOSE_HOUR is not a non-negative integer
    /// - The business hours do not describe a valid day
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        // Network settings
        let host = lookup("API_HOST").unwrap_or(defaults.host);
        let port = match lookup("API_PORT") {
            Some(port) => port.parse().wrap_err("Invalid API_PORT value")?,
            None => defaults.port,
        };

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout);
        let refresh_interval_seconds = lookup("SLOT_REFRESH_INTERVAL_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_interval_seconds);

        // Booking rules
        let lead_time_minutes = match lookup("SLOT_LEAD_TIME_MINUTES") {
            Some(v) => v.parse().wrap_err("Invalid SLOT_LEAD_TIME_MINUTES value")?,
            None => defaults.lead_time_minutes,
        };
        let business_open_hour = match lookup("BUSINESS_OPEN_HOUR") {
            Some(v) => v.parse().wrap_err("Invalid BUSINESS_OPEN_HOUR value")?,
            None => defaults.business_open_hour,
        };
        let business_close_hour = match lookup("BUSINESS_CLOSE_HOUR") {
            Some(v) => v.parse().wrap_err("Invalid BUSINESS_CLOSE_HOUR value")?,
            None => defaults.business_close_hour,
        };

        let config = Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            lead_time_minutes,
            business_open_hour,
            business_close_hour,
            refresh_interval_seconds,
        };

        // Fail at startup rather than on the first request
        config.engine()?;

        Ok(config)
    }

    /// Builds the availability engine described by this configuration
    pub fn engine(&self) -> Result<SlotAvailabilityEngine> {
        let catalog = SlotCatalog::hourly(self.business_open_hour, self.business_close_hour)
            .wrap_err("Invalid business hours")?;
        let buffer = LeadTimeBuffer::from_minutes(self.lead_time_minutes);
        Ok(SlotAvailabilityEngine::new(catalog, buffer))
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
