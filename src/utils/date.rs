//! UTC timestamps for lead records.

use chrono::{SecondsFormat, Utc};

/// Current UTC instant as ISO-8601 with microseconds and an explicit offset.
///
/// Example: `2025-03-14T09:26:53.589793+00:00`
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_now_iso8601_is_utc() {
        let stamp = now_iso8601();

        assert!(stamp.ends_with("+00:00"));
        assert!(stamp.contains('T'));
        let parsed = DateTime::parse_from_rfc3339(&stamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_now_iso8601_is_monotonic_enough() {
        let a = DateTime::parse_from_rfc3339(&now_iso8601()).unwrap();
        let b = DateTime::parse_from_rfc3339(&now_iso8601()).unwrap();
        assert!(b >= a);
    }
}
