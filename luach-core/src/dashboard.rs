//! One refresh cycle: fetch everything for the current view and derive
//! what the status card shows.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::error::LuachResult;
use crate::event::{HebcalItem, TimedEvent, timed_events};
use crate::hebcal::{
    HebcalClient, HolidaysQuery, HolidaysResponse, Location, TimesQuery, TimesResponse,
    ZmanimQuery, ZmanimResponse,
};
use crate::locale::Locale;
use crate::select::{Selection, select_start_end};
use crate::timefmt::local_date;
use crate::view::ViewState;

static TODAY_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("holiday|fast|חג|צום")
        .case_insensitive(true)
        .build()
        .expect("today category pattern must be valid")
});

/// Everything fetched for one view, plus the derived selection.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub holidays: Vec<HebcalItem>,
    pub times: Vec<HebcalItem>,
    /// Absent when the Zmanim request failed.
    pub zmanim: Option<ZmanimResponse>,
    pub events: Vec<TimedEvent>,
    pub selection: Selection,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Assemble a snapshot from raw Hebcal bodies.
    pub fn from_bodies(
        holidays: &Value,
        times: &Value,
        zmanim: Option<&Value>,
        view: &ViewState,
        now: DateTime<Utc>,
    ) -> Self {
        let holidays = HolidaysResponse::from_value(holidays).items;
        let times = TimesResponse::from_value(times).items;
        let events = timed_events(&times, view.timezone);
        let selection = select_start_end(&events, now, view.locale);

        Snapshot {
            holidays,
            times,
            zmanim: zmanim.map(ZmanimResponse::from_value),
            events,
            selection,
            fetched_at: now,
        }
    }

    /// Today's holiday in the view's time zone, if any.
    pub fn today_holiday(&self, view: &ViewState, now: DateTime<Utc>) -> Option<&HebcalItem> {
        today_holiday(&self.holidays, local_date(now, view.timezone))
    }
}

/// Fetch holidays, times and Zmanim concurrently.
///
/// Holidays and times are required; their failure fails the refresh.
/// A Zmanim failure only drops the Zmanim panel.
pub async fn refresh(client: &HebcalClient, view: &ViewState, now: DateTime<Utc>) -> LuachResult<Snapshot> {
    let today = local_date(now, view.timezone);

    let holidays_query = HolidaysQuery {
        year: today.year(),
        month: today.month(),
        geonameid: Some(view.city.geonameid),
        locale: view.locale,
    };
    let times_query = TimesQuery {
        location: Location::from(view.city),
        locale: view.locale,
    };
    let zmanim_query = ZmanimQuery {
        geonameid: view.city.geonameid,
        date: today.format("%Y-%m-%d").to_string(),
    };

    tracing::info!(city = view.city.name, locale = %view.locale, "refreshing");

    let (holidays, times, zmanim) = tokio::join!(
        client.fetch_month_holidays(&holidays_query),
        client.fetch_daily_times(&times_query),
        client.fetch_zmanim(&zmanim_query),
    );

    let holidays = holidays?;
    let times = times?;
    let zmanim = match zmanim {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!("Zmanim unavailable: {e}");
            None
        }
    };

    Ok(Snapshot::from_bodies(&holidays, &times, zmanim.as_ref(), view, now))
}

/// The first holiday or fast dated `today`.
pub fn today_holiday(items: &[HebcalItem], today: NaiveDate) -> Option<&HebcalItem> {
    let iso = today.format("%Y-%m-%d").to_string();
    items.iter().find(|item| {
        item.date.starts_with(&iso)
            && TODAY_CATEGORY.is_match(item.category.as_deref().unwrap_or_default())
    })
}

/// Text placed on the clipboard or handed to a share target:
/// title, text and link on separate lines.
pub fn share_text(title: &str, text: &str, url: &str) -> String {
    format!("{title}\n{text}\n{url}")
}

/// One-line description of a holiday for sharing.
pub fn share_line(item: &HebcalItem, locale: Locale) -> String {
    match &item.hdate {
        Some(hdate) => format!("{} · {} ({})", item.display_title(locale), item.date, hdate),
        None => format!("{} · {}", item.display_title(locale), item.date),
    }
}
