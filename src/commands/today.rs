use anyhow::Result;
use chrono::Utc;
use luach_core::hebcal::HebcalClient;
use luach_core::view::ViewState;

use crate::commands::load_snapshot;
use crate::render::{Render, StatusCard};

pub async fn run(client: &HebcalClient, view: &ViewState, details: bool) -> Result<()> {
    let snapshot = load_snapshot(client, view).await?;

    println!("{}", StatusCard { snapshot: &snapshot, now: Utc::now() }.render(view));

    if details {
        println!();
        println!("{}", snapshot.events.render(view));
    }

    Ok(())
}
