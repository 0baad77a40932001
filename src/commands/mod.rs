pub mod cities;
pub mod config;
pub mod export;
pub mod month;
pub mod notify;
pub mod share;
pub mod times;
pub mod today;
pub mod watch;
pub mod zmanim;

use anyhow::{Context, Result};
use chrono::Utc;
use luach_core::dashboard::{Snapshot, refresh};
use luach_core::hebcal::HebcalClient;
use luach_core::view::ViewState;
use luach_core::{HebcalItem, Locale};

use crate::strings::strings;
use crate::utils::tui::create_spinner;

/// Fetch everything for `view` behind a spinner.
pub async fn load_snapshot(client: &HebcalClient, view: &ViewState) -> Result<Snapshot> {
    let spinner = create_spinner(strings(view.locale).loading.to_string());
    let result = refresh(client, view, Utc::now()).await;
    spinner.finish_and_clear();

    result.context("Could not load times from Hebcal. Check your connection and run the command again")
}

/// A holiday by its 1-based number in the month list, or by title in
/// either language (case-insensitive).
pub fn find_holiday<'a>(holidays: &'a [HebcalItem], query: &str, locale: Locale) -> Option<&'a HebcalItem> {
    let query = query.trim();

    if let Ok(n) = query.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| holidays.get(i));
    }

    let wanted = query.to_lowercase();
    holidays.iter().find(|item| {
        item.display_title(locale).to_lowercase() == wanted || item.title.to_lowercase() == wanted
    })
}

/// `find_holiday`, with the available titles listed on failure.
pub fn require_holiday<'a>(holidays: &'a [HebcalItem], query: &str, locale: Locale) -> Result<&'a HebcalItem> {
    find_holiday(holidays, query, locale).with_context(|| {
        let available: Vec<_> = holidays.iter().map(|h| h.display_title(locale)).collect();
        format!(
            "Holiday '{}' not found this month. Available: {}",
            query,
            available.join(", ")
        )
    })
}
