//! Thin client for the three Hebcal endpoints luach relies on.
//!
//! Every call forwards a normalized query, disables caching and hands the
//! JSON body back untouched. There is no retry and no schema validation;
//! `HolidaysResponse` and `TimesResponse` are lenient views for callers
//! that want typed items.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::city::{City, DEFAULT_GEONAMEID};
use crate::error::{LuachError, LuachResult};
use crate::event::HebcalItem;
use crate::locale::Locale;

pub const DEFAULT_BASE_URL: &str = "https://www.hebcal.com";

/// Minutes after sundown used for Havdalah.
const HAVDALAH_MINUTES: &str = "50";

/// Fallback coordinates for `/shabbat` when no city id is given.
const FALLBACK_LATITUDE: f64 = 31.778;
const FALLBACK_LONGITUDE: f64 = 35.235;
const FALLBACK_TZID: &str = "Asia/Jerusalem";

/// Where to compute times for.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    GeonameId(u32),
    Coordinates { latitude: f64, longitude: f64, tzid: String },
}

impl Default for Location {
    fn default() -> Self {
        Location::coordinates(None, None, None)
    }
}

impl Location {
    /// Explicit coordinates, with Jerusalem filling in whatever is missing.
    pub fn coordinates(latitude: Option<f64>, longitude: Option<f64>, tzid: Option<String>) -> Self {
        Location::Coordinates {
            latitude: latitude.unwrap_or(FALLBACK_LATITUDE),
            longitude: longitude.unwrap_or(FALLBACK_LONGITUDE),
            tzid: tzid.unwrap_or_else(|| FALLBACK_TZID.to_string()),
        }
    }
}

impl From<&City> for Location {
    fn from(city: &City) -> Self {
        Location::GeonameId(city.geonameid)
    }
}

/// Month holiday list (`/hebcal`).
#[derive(Debug, Clone, PartialEq)]
pub struct HolidaysQuery {
    pub year: i32,
    pub month: u32,
    /// Without a city Hebcal is asked for the Israel calendar.
    pub geonameid: Option<u32>,
    pub locale: Locale,
}

impl HolidaysQuery {
    /// Current UTC month.
    pub fn current(geonameid: Option<u32>, locale: Locale) -> Self {
        let now = Utc::now();
        HolidaysQuery {
            year: now.year(),
            month: now.month(),
            geonameid,
            locale,
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("v", "1".to_string()),
            ("cfg", "json".to_string()),
            ("maj", "on".to_string()),
            ("min", "on".to_string()),
            ("mod", "on".to_string()),
            ("nx", "on".to_string()),
            ("year", self.year.to_string()),
            ("month", self.month.to_string()),
            // month names
            ("mf", "on".to_string()),
            // candle-lighting markers
            ("c", "on".to_string()),
            ("lg", self.locale.hebcal_tag().to_string()),
            // Hebrew date parts
            ("hdp", "1".to_string()),
        ];

        match self.geonameid {
            Some(id) => {
                params.push(("geo", "geoname".to_string()));
                params.push(("geonameid", id.to_string()));
            }
            None => params.push(("i", "on".to_string())),
        }

        params
    }
}

/// Candle lighting, Havdalah and fast times for the coming days (`/shabbat`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimesQuery {
    pub location: Location,
    pub locale: Locale,
}

impl TimesQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("cfg", "json".to_string()),
            ("lg", self.locale.hebcal_tag().to_string()),
            ("m", HAVDALAH_MINUTES.to_string()),
        ];

        match &self.location {
            Location::GeonameId(id) => params.push(("geonameid", id.to_string())),
            Location::Coordinates { latitude, longitude, tzid } => {
                params.push(("latitude", latitude.to_string()));
                params.push(("longitude", longitude.to_string()));
                params.push(("tzid", tzid.clone()));
            }
        }

        params
    }
}

/// Solar prayer times for one day (`/zmanim`).
#[derive(Debug, Clone, PartialEq)]
pub struct ZmanimQuery {
    pub geonameid: u32,
    /// `YYYY-MM-DD` or `now`.
    pub date: String,
}

impl Default for ZmanimQuery {
    fn default() -> Self {
        ZmanimQuery {
            geonameid: DEFAULT_GEONAMEID,
            date: "now".to_string(),
        }
    }
}

impl ZmanimQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cfg", "json".to_string()),
            ("geonameid", self.geonameid.to_string()),
            ("date", self.date.clone()),
        ]
    }
}

/// Typed view over a `/hebcal` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidaysResponse {
    #[serde(default)]
    pub items: Vec<HebcalItem>,
}

/// Typed view over a `/shabbat` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimesResponse {
    #[serde(default)]
    pub items: Vec<HebcalItem>,
}

/// Typed view over a `/zmanim` body: zman name to timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZmanimResponse {
    #[serde(default)]
    pub times: BTreeMap<String, String>,
}

impl ZmanimResponse {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Parsed entries in chronological order. Unparseable times are dropped.
    pub fn chronological(&self) -> Vec<(&str, DateTime<Utc>)> {
        let mut entries: Vec<_> = self
            .times
            .iter()
            .filter_map(|(name, time)| {
                DateTime::parse_from_rfc3339(time)
                    .ok()
                    .map(|dt| (name.as_str(), dt.with_timezone(&Utc)))
            })
            .collect();
        entries.sort_by_key(|(_, when)| *when);
        entries
    }
}

impl HolidaysResponse {
    /// Never fails: a body without a usable `items` array is an empty list.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

impl TimesResponse {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct HebcalClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for HebcalClient {
    fn default() -> Self {
        HebcalClient::new(DEFAULT_BASE_URL)
    }
}

impl HebcalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        HebcalClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_month_holidays(&self, query: &HolidaysQuery) -> LuachResult<Value> {
        self.get_json("/hebcal", &query.params()).await
    }

    pub async fn fetch_daily_times(&self, query: &TimesQuery) -> LuachResult<Value> {
        self.get_json("/shabbat", &query.params()).await
    }

    pub async fn fetch_zmanim(&self, query: &ZmanimQuery) -> LuachResult<Value> {
        self.get_json("/zmanim", &query.params()).await
    }

    async fn get_json(&self, path: &str, params: &[(&'static str, String)]) -> LuachResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?params, "requesting Hebcal");

        let response = self
            .http
            .get(&url)
            .query(params)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "Hebcal request failed");
            return Err(LuachError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn holidays_query_with_city() {
        let query = HolidaysQuery {
            year: 2025,
            month: 9,
            geonameid: Some(293397),
            locale: Locale::Hebrew,
        };
        let params = query.params();

        assert_eq!(lookup(&params, "geo"), Some("geoname"));
        assert_eq!(lookup(&params, "geonameid"), Some("293397"));
        assert_eq!(lookup(&params, "lg"), Some("he-x-NoNikud"));
        assert_eq!(lookup(&params, "month"), Some("9"));
        assert_eq!(lookup(&params, "hdp"), Some("1"));
        assert_eq!(lookup(&params, "i"), None);
    }

    #[test]
    fn holidays_query_without_city_uses_israel_calendar() {
        let params = HolidaysQuery::current(None, Locale::English).params();
        assert_eq!(lookup(&params, "i"), Some("on"));
        assert_eq!(lookup(&params, "geonameid"), None);
        for flag in ["maj", "min", "mod", "nx", "mf", "c"] {
            assert_eq!(lookup(&params, flag), Some("on"), "missing flag {flag}");
        }
    }

    #[test]
    fn times_query_falls_back_to_jerusalem_coordinates() {
        let params = TimesQuery::default().params();
        assert_eq!(lookup(&params, "latitude"), Some("31.778"));
        assert_eq!(lookup(&params, "longitude"), Some("35.235"));
        assert_eq!(lookup(&params, "tzid"), Some("Asia/Jerusalem"));
        assert_eq!(lookup(&params, "m"), Some("50"));
        assert_eq!(lookup(&params, "lg"), Some("en"));
    }

    #[test]
    fn partial_coordinates_are_completed() {
        let params = TimesQuery {
            location: Location::coordinates(Some(32.0), None, None),
            locale: Locale::Hebrew,
        }
        .params();
        assert_eq!(lookup(&params, "latitude"), Some("32"));
        assert_eq!(lookup(&params, "longitude"), Some("35.235"));
        assert_eq!(lookup(&params, "lg"), Some("he-x-NoNikud"));
    }

    #[test]
    fn zmanim_query_defaults() {
        let params = ZmanimQuery::default().params();
        assert_eq!(lookup(&params, "geonameid"), Some("281184"));
        assert_eq!(lookup(&params, "date"), Some("now"));
    }

    #[test]
    fn lenient_response_views() {
        let value = serde_json::json!({ "title": "no items here" });
        assert!(HolidaysResponse::from_value(&value).items.is_empty());

        let value = serde_json::json!({ "items": [{ "title": "Havdalah", "date": "2025-07-05T20:20:00+03:00" }] });
        let times = TimesResponse::from_value(&value);
        assert_eq!(times.items.len(), 1);
        assert_eq!(times.items[0].category, None);
    }

    #[test]
    fn zmanim_entries_sorted_by_time() {
        let value = serde_json::json!({
            "date": "2025-07-01",
            "times": {
                "sunset": "2025-07-01T19:48:00+03:00",
                "sunrise": "2025-07-01T05:36:00+03:00",
                "chatzot": "2025-07-01T12:42:00+03:00",
                "broken": "n/a"
            }
        });

        let zmanim = ZmanimResponse::from_value(&value);
        let names: Vec<_> = zmanim.chronological().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["sunrise", "chatzot", "sunset"]);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        assert_eq!(HebcalClient::new("http://localhost:1234/").base_url(), "http://localhost:1234");
    }
}
