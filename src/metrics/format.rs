use std::time::Duration;

use chrono::{DateTime, Local};

/// Base-1024 divisors, largest first.
const BYTE_UNITS: [(u64, &str); 5] = [
    (1 << 40, "TB"),
    (1 << 30, "GB"),
    (1 << 20, "MB"),
    (1 << 10, "KB"),
    (1, ""),
];

/// Formats a byte count with the largest unit whose divisor does not exceed
/// it, to two decimals: `0` -> `"0.00 "`, `1536` -> `"1.50 KB"`.
#[must_use]
pub fn format_bytes(bytes: i64) -> String {
    let magnitude = bytes.unsigned_abs();
    let (divisor, suffix) = BYTE_UNITS
        .iter()
        .copied()
        .find(|(divisor, _)| *divisor <= magnitude)
        .unwrap_or((1, ""));
    let divisor = u128::from(divisor);
    let scaled_x100 = u128::from(magnitude)
        .saturating_mul(100)
        .saturating_add(divisor / 2)
        .checked_div(divisor)
        .unwrap_or(0);
    let sign = if bytes < 0 { "-" } else { "" };
    format!(
        "{}{}.{:02} {}",
        sign,
        scaled_x100 / 100,
        scaled_x100 % 100,
        suffix
    )
}

/// `HH:MM:SS.mmm`, hours not wrapped at a day.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60,
        duration.subsec_millis()
    )
}

#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S%.3f %:z").to_string()
}
