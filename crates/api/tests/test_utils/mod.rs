use std::sync::Arc;

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use glowbook_api::{ApiState, app, config::ApiConfig};
use glowbook_core::clock::{Clock, FixedClock};

pub fn at(date: &str, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

// Server with default configuration reading time from `clock`
pub fn server_with_clock(clock: impl Clock + 'static) -> TestServer {
    let state = ApiState::from_config(&ApiConfig::default(), Arc::new(clock)).unwrap();
    TestServer::new(app(Arc::new(state))).unwrap()
}

// Server whose clock is frozen at `now`
pub fn test_server(now: NaiveDateTime) -> TestServer {
    server_with_clock(FixedClock(now))
}
