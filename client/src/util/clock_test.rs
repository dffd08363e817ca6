use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_iso8601_is_parseable_rfc3339() {
    let now = now_iso8601();
    let parsed = time::OffsetDateTime::parse(&now, &time::format_description::well_known::Rfc3339);
    assert!(parsed.is_ok(), "not RFC 3339: {now}");
}
