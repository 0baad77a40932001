use anyhow::Result;
use luach_core::hebcal::HebcalClient;
use luach_core::view::ViewState;

use crate::commands::load_snapshot;
use crate::render::Render;

pub async fn run(client: &HebcalClient, view: &ViewState) -> Result<()> {
    let snapshot = load_snapshot(client, view).await?;
    println!("{}", snapshot.events.render(view));
    Ok(())
}
