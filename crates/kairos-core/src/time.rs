//! Lightweight UTC wall-clock utilities (no chrono dependency).
//!
//! Uses Howard Hinnant's civil_from_days algorithm for Unix-to-date conversion.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current UTC time as Unix milliseconds, with sub-millisecond precision.
pub fn now_unix_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
        * 1000.0
}

/// Convert Unix milliseconds to an ISO-8601 UTC string with millisecond precision.
///
/// Floors toward negative infinity, so instants before 1970 render correctly.
pub fn unix_ms_to_iso8601(ms: f64) -> String {
    let total_ms = ms.floor() as i64;
    let secs = total_ms.div_euclid(1000);
    let millis = total_ms.rem_euclid(1000);
    let days = secs.div_euclid(86400);
    let time_of_day = secs.rem_euclid(86400);
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    let (y, m, d) = civil_from_days(days);
    format!("{y:04}-{m:02}-{d:02}T{hours:02}:{minutes:02}:{seconds:02}.{millis:03}Z")
}

/// Howard Hinnant's civil_from_days: Unix epoch days → (year, month, day).
fn civil_from_days(days: i64) -> (i64, u64, u64) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GENESIS_MS;

    #[test]
    fn test_unix_epoch() {
        assert_eq!(unix_ms_to_iso8601(0.0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_genesis_instant() {
        assert_eq!(unix_ms_to_iso8601(GENESIS_MS), "2024-05-10T06:45:41.888Z");
    }

    #[test]
    fn test_before_unix_epoch() {
        assert_eq!(unix_ms_to_iso8601(-1.0), "1969-12-31T23:59:59.999Z");
    }

    #[test]
    fn test_now_is_recent() {
        let now = now_unix_millis();
        assert!(now > GENESIS_MS, "clock should be past genesis: {now}");
        assert!(unix_ms_to_iso8601(now).starts_with("20"));
    }
}
