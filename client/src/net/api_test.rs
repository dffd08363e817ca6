use super::*;

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Мария".to_owned(),
        email: "maria@example.ru".to_owned(),
        category: "memory".to_owned(),
        message: "Письма деда с фронта".to_owned(),
        timestamp: "2026-05-09T10:00:00.000Z".to_owned(),
    }
}

#[test]
fn memories_request_failed_message_formats_status() {
    assert_eq!(memories_request_failed_message(404), "memories request failed: 404");
}

#[test]
fn memories_endpoint_points_at_static_data() {
    assert_eq!(MEMORIES_ENDPOINT, "/data/memories.json");
}

#[test]
fn contact_payload_contains_fields_and_timestamp() {
    let payload = contact_payload(&submission()).expect("payload");
    let value: serde_json::Value = serde_json::from_str(&payload).expect("json");
    assert_eq!(value["name"], "Мария");
    assert_eq!(value["category"], "memory");
    assert_eq!(value["timestamp"], "2026-05-09T10:00:00.000Z");
}

#[test]
fn submit_contact_is_simulated_success() {
    assert_eq!(submit_contact(&submission()), Ok(()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_memories_unavailable_outside_browser() {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    // The SSR stub never awaits, so the first poll resolves it.
    let mut fut = pin!(fetch_memories());
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(result) => assert_eq!(result, Err("not available on server".to_owned())),
        Poll::Pending => panic!("SSR fetch stub should resolve immediately"),
    }
}
