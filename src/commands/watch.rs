//! Live countdown.
//!
//! The card is redrawn every second from the last snapshot. Data is
//! fetched once; the ticker is not tied to refreshes.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use luach_core::dashboard::Snapshot;
use luach_core::hebcal::HebcalClient;
use luach_core::timefmt::{MEDIUM_DATE_TIME, format_in_tz};
use luach_core::view::ViewState;
use owo_colors::OwoColorize;
use tokio::time::{MissedTickBehavior, interval};

use crate::commands::load_snapshot;
use crate::render::{Render, StatusCard};
use crate::strings::strings;

/// Clear the screen and move the cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

pub async fn run(client: &HebcalClient, view: &ViewState) -> Result<()> {
    let snapshot = load_snapshot(client, view).await?;

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let card = StatusCard { snapshot: &snapshot, now: Utc::now() }.render(view);
                println!("{CLEAR}{card}\n\n{}", footer(&snapshot, view));
                std::io::stdout().flush()?;
            }
            _ = &mut ctrl_c => {
                println!();
                tracing::debug!("countdown stopped");
                return Ok(());
            }
        }
    }
}

/// When the shown data was fetched, and how to stop.
fn footer(snapshot: &Snapshot, view: &ViewState) -> String {
    let s = strings(view.locale);
    let fetched = format_in_tz(snapshot.fetched_at, view.timezone, MEDIUM_DATE_TIME);
    format!("{} {} · {}", s.updated, fetched, s.stop_hint).dimmed().to_string()
}
