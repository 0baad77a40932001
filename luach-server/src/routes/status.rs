//! Start/end status for a city, computed server-side.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{DateTime, Datelike, Utc};
use luach_core::countdown::countdown;
use luach_core::dashboard::Snapshot;
use luach_core::hebcal::{HolidaysQuery, Location, TimesQuery};
use luach_core::timefmt::local_date;
use luach_core::view::ViewState;
use luach_core::{City, HebcalItem, LuachError};
use serde::{Deserialize, Serialize};

use crate::routes::{AppError, parse_locale, parse_param};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/status", get(status))
}

#[derive(Deserialize)]
pub struct StatusParams {
    pub geonameid: Option<String>,
    pub lg: Option<String>,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub city: City,
    pub now: DateTime<Utc>,
    pub today: Option<HebcalItem>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub start_countdown: String,
    pub end_countdown: String,
}

/// GET /api/status - Today's holiday and the selected start/end times
async fn status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<StatusResponse>, AppError> {
    let mut view = ViewState::default();
    if let Some(id) = parse_param::<u32>("geonameid", params.geonameid.as_deref())? {
        let city = City::by_geonameid(id).ok_or_else(|| LuachError::CityNotFound(id.to_string()))?;
        view.select_city(city);
    }
    view.set_locale(parse_locale(params.lg.as_deref())?);

    let now = Utc::now();
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

    let (holidays, times) = tokio::try_join!(
        state.hebcal.fetch_month_holidays(&holidays_query),
        state.hebcal.fetch_daily_times(&times_query),
    )?;

    let snapshot = Snapshot::from_bodies(&holidays, &times, None, &view, now);
    let selection = snapshot.selection;

    Ok(Json(StatusResponse {
        city: *view.city,
        now,
        today: snapshot.today_holiday(&view, now).cloned(),
        start: selection.start,
        end: selection.end,
        start_countdown: countdown(selection.start, now),
        end_countdown: countdown(selection.end, now),
    }))
}
