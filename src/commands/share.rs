use anyhow::Result;
use luach_core::dashboard::{share_line, share_text};
use luach_core::hebcal::HebcalClient;
use luach_core::view::ViewState;

use crate::commands::{load_snapshot, require_holiday};

/// Print the share payload: title, description and link on three lines.
pub async fn run(client: &HebcalClient, view: &ViewState, query: &str, url: &str) -> Result<()> {
    let snapshot = load_snapshot(client, view).await?;
    let item = require_holiday(&snapshot.holidays, query, view.locale)?;

    println!(
        "{}",
        share_text(item.display_title(view.locale), &share_line(item, view.locale), url)
    );
    Ok(())
}
