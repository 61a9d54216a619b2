//! Display formatting for timestamps and attachment sizes.

use chrono::{DateTime, Local, Timelike};

/// Byte length formatted in kilobytes with one decimal, picker-style
/// ("12.3 KB").
pub fn kb_size(len: u64) -> String {
    format!("{:.1} KB", len as f64 / 1024.0)
}

/// Wall-clock time formatted for the message header ("9:50 AM").
pub fn clock_time(t: DateTime<Local>) -> String {
    let (is_pm, hour12) = t.hour12();
    format!(
        "{}:{:02} {}",
        hour12,
        t.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kb_size_one_decimal() {
        assert_eq!(kb_size(1024), "1.0 KB");
        assert_eq!(kb_size(1536), "1.5 KB");
        assert_eq!(kb_size(0), "0.0 KB");
        assert_eq!(kb_size(123_456), "120.6 KB");
    }

    #[test]
    fn test_clock_time_morning() {
        let t = Local.with_ymd_and_hms(2025, 10, 15, 9, 50, 0).unwrap();
        assert_eq!(clock_time(t), "9:50 AM");
    }

    #[test]
    fn test_clock_time_afternoon_pads_minutes() {
        let t = Local.with_ymd_and_hms(2025, 10, 15, 14, 5, 0).unwrap();
        assert_eq!(clock_time(t), "2:05 PM");
    }

    #[test]
    fn test_clock_time_midnight_is_twelve() {
        let t = Local.with_ymd_and_hms(2025, 10, 15, 0, 7, 0).unwrap();
        assert_eq!(clock_time(t), "12:07 AM");
    }
}
