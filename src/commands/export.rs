use std::path::PathBuf;

use anyhow::{Context, Result};
use luach_core::event::parse_hebcal_date;
use luach_core::hebcal::HebcalClient;
use luach_core::ics::{HolidayExport, generate_ics, ics_filename};
use luach_core::view::ViewState;
use luach_core::{HebcalItem, LuachError};
use owo_colors::OwoColorize;

use crate::commands::{load_snapshot, require_holiday};

pub async fn run(client: &HebcalClient, view: &ViewState, query: &str, output: Option<PathBuf>) -> Result<()> {
    let snapshot = load_snapshot(client, view).await?;
    let item = require_holiday(&snapshot.holidays, query, view.locale)?;

    let holiday = holiday_export(item, view)?;
    let ics = generate_ics(&holiday)?;
    let path = output.unwrap_or_else(|| PathBuf::from(ics_filename(&holiday.title)));

    std::fs::write(&path, ics).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", "Exported".green(), path.display());
    Ok(())
}

/// The calendar event for a month-list holiday: localized title, the
/// holiday's memo as description and the selected city as location.
fn holiday_export(item: &HebcalItem, view: &ViewState) -> Result<HolidayExport, LuachError> {
    let start = parse_hebcal_date(&item.date, view.timezone)
        .ok_or_else(|| LuachError::InvalidDate(item.date.clone()))?;

    let mut holiday = HolidayExport::new(item.display_title(view.locale), start);
    holiday.description = item.memo.clone();
    holiday.location = Some(view.city.name.to_string());
    Ok(holiday)
}
