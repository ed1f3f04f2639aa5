//! Display formatting helpers for table cells and headers.

use chrono::{DateTime, Local, Utc};

/// Short local timestamp for table cells.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Date-only rendering for campaign ranges.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_are_stable_shapes() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        // Local offset varies by machine; assert on shape, not exact value.
        assert_eq!(format_timestamp(&ts).len(), 16);
        assert_eq!(format_date(&ts).len(), 10);
    }
}
