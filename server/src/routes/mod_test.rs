use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn memories_route_matches_client_endpoint() {
    assert_eq!(MEMORIES_ROUTE, "/data/memories.json");
}
