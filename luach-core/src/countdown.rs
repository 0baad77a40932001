//! Remaining-time text for the live countdown.

use chrono::{DateTime, Duration, Utc};

/// Shown when there is nothing to count down to.
pub const NO_TARGET: &str = "—";

/// `HH:MM:SS`, or `00:00:00` once the target has passed. Hours are not
/// capped at 24.
pub fn format_remaining(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds();
    if total_seconds <= 0 {
        return "00:00:00".to_string();
    }

    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Countdown text for an optional target at `now`.
pub fn countdown(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match target {
        Some(target) => format_remaining(target - now),
        None => NO_TARGET.to_string(),
    }
}
