use anyhow::Result;
use luach_core::hebcal::HebcalClient;
use luach_core::view::ViewState;
use owo_colors::OwoColorize;

use crate::commands::load_snapshot;
use crate::render::Render;
use crate::strings::strings;

pub async fn run(client: &HebcalClient, view: &ViewState) -> Result<()> {
    let snapshot = load_snapshot(client, view).await?;

    match &snapshot.zmanim {
        Some(zmanim) => println!("{}", zmanim.render(view)),
        None => println!("{}", strings(view.locale).zmanim_unavailable.dimmed()),
    }

    Ok(())
}
