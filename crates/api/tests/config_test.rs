use std::collections::HashMap;

use glowbook_api::config::ApiConfig;
use pretty_assertions::assert_eq;
use tracing::Level;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = ApiConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.refresh_interval_seconds, 60);

    let engine = config.engine().unwrap();
    assert_eq!(engine.catalog().len(), 9);
    assert_eq!(engine.buffer().minutes(), 30);
}

#[test]
fn test_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("API_CORS_ORIGINS", "https://a.example, https://b.example"),
        ("SLOT_LEAD_TIME_MINUTES", "45"),
        ("BUSINESS_OPEN_HOUR", "10"),
        ("BUSINESS_CLOSE_HOUR", "14"),
    ]))
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "https://a.example".to_string(),
            "https://b.example".to_string()
        ])
    );

    let engine = config.engine().unwrap();
    assert_eq!(
        engine.catalog().labels(),
        vec!["10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM"]
    );
    assert_eq!(engine.buffer().minutes(), 45);
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = ApiConfig::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).unwrap();

    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_invalid_port_is_an_error() {
    let err = ApiConfig::from_lookup(lookup(&[("API_PORT", "http")])).unwrap_err();

    assert!(err.to_string().contains("API_PORT"));
}

#[test]
fn test_inverted_business_hours_are_an_error() {
    let err = ApiConfig::from_lookup(lookup(&[
        ("BUSINESS_OPEN_HOUR", "18"),
        ("BUSINESS_CLOSE_HOUR", "9"),
    ]))
    .unwrap_err();

    assert!(err.to_string().contains("Invalid business hours"));
}

#[test]
fn test_negative_lead_time_is_an_error() {
    let err = ApiConfig::from_lookup(lookup(&[("SLOT_LEAD_TIME_MINUTES", "-120")])).unwrap_err();

    assert!(err.to_string().contains("SLOT_LEAD_TIME_MINUTES"));
}
