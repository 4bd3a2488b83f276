//! Elapsed-time formatting for the per-render log line.

use std::time::Duration;

/// Format a duration as `"HH hours : MM minutes : SS.ssssss seconds"`.
pub fn format_hms(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = (total_seconds % 60) as f64 + f64::from(elapsed.subsec_nanos()) * 1e-9;
    format!("{hours:02} hours : {minutes:02} minutes : {seconds:09.6} seconds")
}
