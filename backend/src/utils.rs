use chrono::{DateTime, Local, Timelike};

/// Local wall clock, no offset. Microseconds are left out when zero, as `isoformat()` does.
pub fn iso_timestamp(ts: DateTime<Local>) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
