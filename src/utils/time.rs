//! Time utilities: elapsed-duration formatting for the punch clock display.

use chrono::Duration;

/// Format a millisecond count as zero-padded HH:MM:SS.
/// Components are obtained by integer division, so the value is truncated,
/// never rounded (3_599_999 ms -> "00:59:59").
pub fn format_hms_ms(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a chrono Duration as HH:MM:SS (truncating).
pub fn format_hms(d: Duration) -> String {
    format_hms_ms(d.num_milliseconds())
}
