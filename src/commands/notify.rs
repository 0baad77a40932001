use anyhow::Result;
use chrono::Utc;
use luach_core::hebcal::HebcalClient;
use luach_core::timefmt::{MEDIUM_DATE_TIME, format_in_tz};
use luach_core::view::ViewState;
use owo_colors::OwoColorize;

use crate::commands::load_snapshot;
use crate::notify::{notify_upcoming, schedule, upcoming_message};
use crate::strings::strings;

/// Notify `before` ahead of the selected start time. If that moment has
/// already passed but the start has not, notify right away.
pub async fn run(client: &HebcalClient, view: &ViewState, before: std::time::Duration) -> Result<()> {
    let snapshot = load_snapshot(client, view).await?;
    let s = strings(view.locale);
    let now = Utc::now();

    let Some(start) = snapshot.selection.start.filter(|start| *start > now) else {
        println!("{}", s.no_times.dimmed());
        return Ok(());
    };

    let title = snapshot
        .events
        .iter()
        .find(|e| e.when == start)
        .map(|e| e.text(view.locale))
        .unwrap_or(s.start);

    let lead = chrono::Duration::from_std(before)?;
    let minutes = lead.num_minutes();
    let at = start - lead;

    if at <= now {
        notify_upcoming(s.upcoming_event, title, (start - now).num_minutes());
        return Ok(());
    }

    println!(
        "{} {}",
        "Waiting until".dimmed(),
        format_in_tz(at, view.timezone, MEDIUM_DATE_TIME)
    );
    schedule(at, s.upcoming_event, &upcoming_message(title, minutes)).await;
    Ok(())
}
