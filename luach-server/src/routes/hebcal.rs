//! Relay endpoints: reshape the browser's query and forward it to Hebcal.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{Datelike, NaiveDate, Utc};
use luach_core::LuachError;
use luach_core::city::DEFAULT_GEONAMEID;
use luach_core::hebcal::{HolidaysQuery, Location, TimesQuery, ZmanimQuery};
use serde::Deserialize;
use serde_json::Value;

use crate::routes::{AppError, parse_locale, parse_param};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/holidays", get(holidays))
        .route("/api/times", get(times))
        .route("/api/zmanim", get(zmanim))
}

#[derive(Deserialize)]
pub struct HolidaysParams {
    pub year: Option<String>,
    pub month: Option<String>,
    pub geonameid: Option<String>,
    pub lg: Option<String>,
}

/// GET /api/holidays - Holidays for a month (current month by default)
async fn holidays(
    State(state): State<AppState>,
    Query(params): Query<HolidaysParams>,
) -> Result<Json<Value>, AppError> {
    let now = Utc::now();

    let month = parse_param::<u32>("month", params.month.as_deref())?.unwrap_or(now.month());
    if !(1..=12).contains(&month) {
        return Err(LuachError::InvalidParameter {
            name: "month".into(),
            value: month.to_string(),
        }
        .into());
    }

    let query = HolidaysQuery {
        year: parse_param("year", params.year.as_deref())?.unwrap_or(now.year()),
        month,
        geonameid: parse_param("geonameid", params.geonameid.as_deref())?,
        locale: parse_locale(params.lg.as_deref())?,
    };

    Ok(Json(state.hebcal.fetch_month_holidays(&query).await?))
}

#[derive(Deserialize)]
pub struct TimesParams {
    pub geonameid: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub tz: Option<String>,
    pub lg: Option<String>,
}

/// GET /api/times - Candle lighting, Havdalah and fast times
async fn times(
    State(state): State<AppState>,
    Query(params): Query<TimesParams>,
) -> Result<Json<Value>, AppError> {
    let location = match parse_param::<u32>("geonameid", params.geonameid.as_deref())? {
        Some(id) => Location::GeonameId(id),
        None => Location::coordinates(
            parse_param("lat", params.lat.as_deref())?,
            parse_param("lon", params.lon.as_deref())?,
            params.tz.filter(|tz| !tz.trim().is_empty()),
        ),
    };

    let query = TimesQuery {
        location,
        locale: parse_locale(params.lg.as_deref())?,
    };

    Ok(Json(state.hebcal.fetch_daily_times(&query).await?))
}

#[derive(Deserialize)]
pub struct ZmanimParams {
    pub geonameid: Option<String>,
    pub date: Option<String>,
}

/// GET /api/zmanim - Prayer times for a day (Jerusalem, today by default)
async fn zmanim(
    State(state): State<AppState>,
    Query(params): Query<ZmanimParams>,
) -> Result<Json<Value>, AppError> {
    let date = match params.date.as_deref().map(str::trim) {
        None | Some("") | Some("now") => "now".to_string(),
        Some(d) => {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|_| LuachError::InvalidDate(d.to_string()))?;
            d.to_string()
        }
    };

    let query = ZmanimQuery {
        geonameid: parse_param("geonameid", params.geonameid.as_deref())?.unwrap_or(DEFAULT_GEONAMEID),
        date,
    };

    Ok(Json(state.hebcal.fetch_zmanim(&query).await?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use mockito::Matcher;
    use serde_json::json;

    use crate::routes::tests::{app_for, get_json};

    #[tokio::test]
    async fn holidays_are_relayed_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let upstream = json!({ "title": "Hebcal Diaspora September 2025", "items": [{ "title": "Rosh Hashana 5786", "date": "2025-09-23" }] });
        let mock = server
            .mock("GET", "/hebcal")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("year".into(), "2025".into()),
                Matcher::UrlEncoded("month".into(), "9".into()),
                Matcher::UrlEncoded("geonameid".into(), "293397".into()),
                Matcher::UrlEncoded("lg".into(), "he-x-NoNikud".into()),
            ]))
            .with_status(200)
            .with_body(upstream.to_string())
            .create_async()
            .await;

        let (status, body) = get_json(
            app_for(&server.url()),
            "/api/holidays?year=2025&month=9&geonameid=293397&lg=he-x-NoNikud",
        )
        .await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, upstream);
    }

    #[tokio::test]
    async fn out_of_range_month_is_rejected() {
        let (status, body) = get_json(app_for("http://127.0.0.1:9"), "/api/holidays?month=13").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid value for 'month': 13");
    }

    #[tokio::test]
    async fn times_without_city_use_coordinates() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/shabbat")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("latitude".into(), "32.1".into()),
                Matcher::UrlEncoded("longitude".into(), "35.235".into()),
                Matcher::UrlEncoded("tzid".into(), "Asia/Jerusalem".into()),
            ]))
            .with_status(200)
            .with_body(json!({ "items": [] }).to_string())
            .create_async()
            .await;

        let (status, _) = get_json(app_for(&server.url()), "/api/times?lat=32.1").await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn upstream_status_is_passed_through() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/zmanim")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body("unknown geonameid")
            .create_async()
            .await;

        let (status, body) = get_json(app_for(&server.url()), "/api/zmanim?geonameid=1").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Hebcal returned HTTP 404");
        assert_eq!(body["details"], "unknown geonameid");
    }

    #[tokio::test]
    async fn zmanim_rejects_bad_dates() {
        let (status, body) = get_json(app_for("http://127.0.0.1:9"), "/api/zmanim?date=yesterday").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid date 'yesterday'");
    }
}
