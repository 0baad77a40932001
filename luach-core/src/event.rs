//! Hebcal items and the timed events derived from them.
//!
//! Hebcal answers every endpoint with a list of loosely typed items. The
//! wire type keeps them as Hebcal sends them; `TimedEvent` is the parsed
//! form the selector and renderers work with.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// One entry of a Hebcal `items` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HebcalItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    /// Hebrew date, e.g. "1 Av 5785" (present when `hdp=1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcat: Option<String>,
    /// Localized title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hebrew: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Hebrew-lettered date parts (present when `hdp=1`).
    #[serde(default, rename = "heDateParts", skip_serializing_if = "Option::is_none")]
    pub he_date_parts: Option<HeDateParts>,
}

/// Day, month and year of the Hebrew date in Hebrew letters,
/// e.g. `{ "d": "י״ד", "m": "אדר", "y": "תשפ״ה" }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeDateParts {
    #[serde(default)]
    pub d: String,
    #[serde(default)]
    pub m: String,
    #[serde(default)]
    pub y: String,
}

impl HebcalItem {
    /// Title to show for the given UI language. Hebrew falls back to the
    /// primary title when Hebcal omitted the localized one.
    pub fn display_title(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.title,
            Locale::Hebrew => self.hebrew.as_deref().unwrap_or(&self.title),
        }
    }

    /// Hebrew date shown next to the item in the Hebrew UI: the lettered
    /// parts when Hebcal sent them, else the transliterated `hdate`.
    pub fn hebrew_date_label(&self) -> Option<String> {
        match &self.he_date_parts {
            Some(parts) => Some(format!("{} {} {}", parts.d, parts.m, parts.y)),
            None => self.hdate.clone(),
        }
    }
}

/// Hebcal's `category` tag.
///
/// Hebcal tags every fast-related row as plain `fast`, so `Fast` alone does
/// not tell a fast's beginning from its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Candles,
    Havdalah,
    Fast,
    Parashat,
    Holiday,
    RoshChodesh,
    Omer,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Candles => "candles",
            Category::Havdalah => "havdalah",
            Category::Fast => "fast",
            Category::Parashat => "parashat",
            Category::Holiday => "holiday",
            Category::RoshChodesh => "roshchodesh",
            Category::Omer => "omer",
            Category::Other(s) => s,
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "candles" => Category::Candles,
            "havdalah" => Category::Havdalah,
            "fast" => Category::Fast,
            "parashat" => Category::Parashat,
            "holiday" => Category::Holiday,
            "roshchodesh" => Category::RoshChodesh,
            "omer" => Category::Omer,
            _ => Category::Other(s.to_string()),
        }
    }
}

/// A labeled instant taken from a Hebcal item.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEvent {
    pub title: String,
    pub hebrew: Option<String>,
    pub when: DateTime<Utc>,
    pub category: Option<Category>,
}

impl TimedEvent {
    pub fn new(title: impl Into<String>, when: DateTime<Utc>, category: Option<Category>) -> Self {
        TimedEvent {
            title: title.into(),
            hebrew: None,
            when,
            category,
        }
    }

    /// Parse a Hebcal item. Date-only items are placed at midnight in `tz`.
    /// Returns `None` when the date cannot be parsed.
    pub fn from_item(item: &HebcalItem, tz: Tz) -> Option<Self> {
        let when = parse_hebcal_date(&item.date, tz)?;
        Some(TimedEvent {
            title: item.title.clone(),
            hebrew: item.hebrew.clone(),
            when,
            category: item.category.as_deref().map(Category::from),
        })
    }

    /// Text used for both display and fast begin/end matching.
    pub fn text(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.title,
            Locale::Hebrew => self.hebrew.as_deref().unwrap_or(&self.title),
        }
    }
}

/// Parse every item, silently dropping the ones with unusable dates.
pub fn timed_events(items: &[HebcalItem], tz: Tz) -> Vec<TimedEvent> {
    items
        .iter()
        .filter_map(|item| {
            let event = TimedEvent::from_item(item, tz);
            if event.is_none() {
                tracing::debug!(title = %item.title, date = %item.date, "skipping item with unparseable date");
            }
            event
        })
        .collect()
}

/// Hebcal sends either an RFC 3339 timestamp with offset or a bare
/// `YYYY-MM-DD` for all-day entries.
pub fn parse_hebcal_date(s: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
