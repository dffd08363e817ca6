//! HTTP helpers for the memorial page.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the memory fetch returns an error since it is only
//! meaningful in the browser; the page renders its pending state instead.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Result<_, String>` so the catalog can log them and
//! fail closed to an empty collection instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use archive::MemoryRecord;

use crate::state::contact::ContactSubmission;

/// Static JSON document holding the memory collection.
pub const MEMORIES_ENDPOINT: &str = "/data/memories.json";

#[cfg(any(test, feature = "hydrate"))]
fn memories_request_failed_message(status: u16) -> String {
    format!("memories request failed: {status}")
}

fn contact_payload(submission: &ContactSubmission) -> Result<String, String> {
    serde_json::to_string(submission).map_err(|e| e.to_string())
}

/// Fetch and decode the memory collection from [`MEMORIES_ENDPOINT`].
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not match the record schema.
pub async fn fetch_memories() -> Result<Vec<MemoryRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(MEMORIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(memories_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        archive::parse_memories(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Hand a validated contact submission to the transport.
///
/// There is no backend for the form yet: the payload is logged and treated
/// as delivered. A real integration would `POST` it to `/api/contact`.
///
/// # Errors
///
/// Returns an error string if the payload cannot be serialized.
pub fn submit_contact(submission: &ContactSubmission) -> Result<(), String> {
    let payload = contact_payload(submission)?;
    log::info!("contact form submitted: {payload}");
    Ok(())
}
