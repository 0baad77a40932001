//! Desktop notifications.
//!
//! A missing notification daemon is not an error: showing is best effort
//! and failures are only logged.

use chrono::{DateTime, Utc};
use notify_rust::Notification;

/// Body of the "Upcoming Event" notification.
pub fn upcoming_message(title: &str, minutes: i64) -> String {
    format!("{title} in {minutes} minutes")
}

/// How long to wait for `at`, or `None` if it is not in the future.
pub fn delay_until(at: DateTime<Utc>, now: DateTime<Utc>) -> Option<std::time::Duration> {
    (at - now).to_std().ok().filter(|d| !d.is_zero())
}

pub fn show(summary: &str, body: &str) {
    if let Err(e) = Notification::new().summary(summary).body(body).appname("luach").show() {
        tracing::debug!("notification not shown: {e}");
    }
}

/// "Upcoming Event" notification for something `minutes` away.
pub fn notify_upcoming(summary: &str, title: &str, minutes: i64) {
    show(summary, &upcoming_message(title, minutes));
}

/// Sleep until `at`, then show the notification. Returns `false` without
/// waiting when `at` has already passed.
pub async fn schedule(at: DateTime<Utc>, summary: &str, body: &str) -> bool {
    let Some(delay) = delay_until(at, Utc::now()) else {
        tracing::debug!(%at, "not scheduling a notification in the past");
        return false;
    };

    tracing::info!(%at, "notification scheduled");
    tokio::time::sleep(delay).await;
    show(summary, body);
    true
}
