mod test_utils;

use axum::http::StatusCode;
use glowbook_core::{
    availability::{
        SELECT_DATE_MESSAGE, SELECT_SLOT_MESSAGE, SLOT_AVAILABLE_MESSAGE, SLOT_UNAVAILABLE_MESSAGE,
        SlotValidation,
    },
    mock::MockClock,
    models::booking::{NextSlotResponse, ReschedulePolicyResponse, SlotAvailabilityResponse},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{at, server_with_clock, test_server};

fn labels(slots: &[glowbook_core::models::time_slot::TimeSlot]) -> Vec<String> {
    slots.iter().map(|s| s.label()).collect()
}

#[test_log::test(tokio::test)]
async fn test_get_slots_for_today() {
    let server = test_server(at("2024-01-15", 10, 5));

    let response = server
        .get("/api/slots")
        .add_query_param("date", "2024-01-15")
        .await;

    response.assert_status_ok();
    let body: SlotAvailabilityResponse = response.json();
    assert_eq!(body.date.to_string(), "2024-01-15");
    assert_eq!(labels(&body.disabled), vec!["09:00 AM", "10:00 AM"]);
    assert_eq!(body.available.len(), 7);
    assert_eq!(body.slots.len(), 9);
    assert_eq!(body.next_available.map(|s| s.label()), Some("11:00 AM".to_string()));
    assert_eq!(body.refresh_after_seconds, 60);
}

#[test_log::test(tokio::test)]
async fn test_get_slots_defaults_to_today() {
    let server = test_server(at("2024-01-15", 10, 5));

    let response = server.get("/api/slots").await;

    response.assert_status_ok();
    let body: SlotAvailabilityResponse = response.json();
    assert_eq!(body.date.to_string(), "2024-01-15");
    assert_eq!(labels(&body.disabled), vec!["09:00 AM", "10:00 AM"]);
}

#[test_log::test(tokio::test)]
async fn test_get_slots_for_future_date() {
    let server = test_server(at("2024-01-15", 10, 5));

    let response = server
        .get("/api/slots")
        .add_query_param("date", "2024-01-16")
        .await;

    response.assert_status_ok();
    let body: SlotAvailabilityResponse = response.json();
    assert_eq!(body.available.len(), 9);
    assert!(body.disabled.is_empty());
    assert!(body.slots.iter().all(|s| !s.disabled));
}

#[test_log::test(tokio::test)]
async fn test_slot_json_shape() {
    let server = test_server(at("2024-01-15", 16, 35));

    let body: Value = server.get("/api/slots").await.json();

    assert_eq!(body["slots"][0], json!({ "slot": "09:00 AM", "disabled": true }));
    assert_eq!(body["next_available"], Value::Null);
}

#[rstest]
#[case("15-01-2024")]
#[case("2024-13-01")]
#[case("tomorrow")]
#[tokio::test]
async fn test_get_slots_rejects_bad_date(#[case] date: &str) {
    let server = test_server(at("2024-01-15", 10, 5));

    let response = server.get("/api/slots").add_query_param("date", date).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid booking date"));
}

#[test_log::test(tokio::test)]
async fn test_next_slot_when_fully_booked() {
    let server = test_server(at("2024-01-15", 16, 35));

    let response = server
        .get("/api/slots/next")
        .add_query_param("date", "2024-01-15")
        .await;

    response.assert_status_ok();
    let body: NextSlotResponse = response.json();
    assert_eq!(body.next_available, None);
}

#[test_log::test(tokio::test)]
async fn test_each_request_reads_the_clock_once() {
    let mut clock = MockClock::new();
    let mut readings = vec![at("2024-01-15", 16, 35), at("2024-01-15", 10, 5)];
    clock
        .expect_now()
        .times(2)
        .returning(move || readings.pop().unwrap());
    let server = server_with_clock(clock);

    let morning: NextSlotResponse = server.get("/api/slots/next").await.json();
    let evening: NextSlotResponse = server.get("/api/slots/next").await.json();

    assert_eq!(morning.next_available.map(|s| s.label()), Some("11:00 AM".to_string()));
    assert_eq!(evening.next_available, None);
}

#[test_log::test(tokio::test)]
async fn test_next_slot_tomorrow_is_opening_slot() {
    let server = test_server(at("2024-01-15", 16, 35));

    let body: NextSlotResponse = server
        .get("/api/slots/next")
        .add_query_param("date", "2024-01-16")
        .await
        .json();

    assert_eq!(body.date.to_string(), "2024-01-16");
    assert_eq!(body.next_available.map(|s| s.label()), Some("09:00 AM".to_string()));
}

#[rstest]
#[case(json!({ "date": "2024-01-16" }), false, SELECT_SLOT_MESSAGE)]
#[case(json!({ "slot": "11:00 AM" }), false, SELECT_DATE_MESSAGE)]
#[case(json!({ "slot": "11:00 AM", "date": "" }), false, SELECT_DATE_MESSAGE)]
#[case(json!({ "slot": "10:30 AM", "date": "2024-01-15" }), false, SLOT_UNAVAILABLE_MESSAGE)]
#[case(json!({ "slot": "half past ten", "date": "2024-01-15" }), false, SLOT_UNAVAILABLE_MESSAGE)]
#[case(json!({ "slot": "11:00 AM", "date": "2024-01-15" }), true, SLOT_AVAILABLE_MESSAGE)]
#[tokio::test]
async fn test_validate_slot(
    #[case] payload: Value,
    #[case] is_valid: bool,
    #[case] message: &str,
) {
    let server = test_server(at("2024-01-15", 10, 5));

    let response = server.post("/api/slots/validate").json(&payload).await;

    response.assert_status_ok();
    let body: SlotValidation = response.json();
    assert_eq!(
        body,
        SlotValidation {
            is_valid,
            message: message.to_string(),
        }
    );
}

#[test_log::test(tokio::test)]
async fn test_validate_slot_rejects_bad_date() {
    let server = test_server(at("2024-01-15", 10, 5));

    let response = server
        .post("/api/slots/validate")
        .json(&json!({ "slot": "11:00 AM", "date": "01/15/2024" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[rstest]
#[case(None, 3)]
#[case(Some(1), 2)]
#[case(Some(5), 0)]
#[tokio::test]
async fn test_reschedule_policy(#[case] used: Option<u32>, #[case] remaining: u32) {
    let server = test_server(at("2024-01-15", 10, 5));

    let mut request = server.get("/api/policies/reschedule");
    if let Some(used) = used {
        request = request.add_query_param("used", used);
    }
    let response = request.await;

    response.assert_status_ok();
    let body: ReschedulePolicyResponse = response.json();
    assert_eq!(
        body,
        ReschedulePolicyResponse {
            window_hours: 4,
            max_reschedules: 3,
            remaining,
        }
    );
}

#[tokio::test]
async fn test_health_and_version() {
    let server = test_server(at("2024-01-15", 10, 5));

    let health: Value = server.get("/health").await.json();
    assert_eq!(health, json!({ "status": "ok" }));

    let version: Value = server.get("/version").await.json();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}
