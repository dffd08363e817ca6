//! Wall-clock timestamps for outgoing payloads.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time as an ISO-8601 / RFC 3339 string in UTC.
///
/// In the browser this comes from `Date.prototype.toISOString`; elsewhere
/// (SSR, native tests) from the system clock.
pub fn now_iso8601() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default()
    }
}
