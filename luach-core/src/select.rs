//! Picking the "start" and "end" instants for the status card.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::event::{Category, TimedEvent};
use crate::locale::Locale;
use crate::patterns::fast_patterns;

/// The chosen start (candle lighting / fast begins) and end (Havdalah /
/// fast ends). Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRole {
    Start,
    End,
    Neither,
}

pub fn is_start(event: &TimedEvent, locale: Locale) -> bool {
    match event.category {
        Some(Category::Candles) => true,
        Some(Category::Fast) => fast_patterns(locale).begins.is_match(event.text(locale)),
        _ => false,
    }
}

pub fn is_end(event: &TimedEvent, locale: Locale) -> bool {
    match event.category {
        Some(Category::Havdalah) => true,
        Some(Category::Fast) => fast_patterns(locale).ends.is_match(event.text(locale)),
        _ => false,
    }
}

/// Role of a single event. Start is checked first.
pub fn classify(event: &TimedEvent, locale: Locale) -> EventRole {
    if is_start(event, locale) {
        EventRole::Start
    } else if is_end(event, locale) {
        EventRole::End
    } else {
        EventRole::Neither
    }
}

/// Pick the earliest upcoming start and end.
///
/// When nothing upcoming qualifies, the earliest qualifying event in the
/// whole list is used instead, so a fast that already began still shows
/// its start time.
pub fn select_start_end(events: &[TimedEvent], now: DateTime<Utc>, locale: Locale) -> Selection {
    let mut all: Vec<&TimedEvent> = events.iter().collect();
    // sort_by_key is stable
    all.sort_by_key(|e| e.when);

    let upcoming: Vec<&TimedEvent> = all.iter().copied().filter(|e| e.when > now).collect();

    let pick = |pred: fn(&TimedEvent, Locale) -> bool| {
        upcoming
            .iter()
            .find(|e| pred(e, locale))
            .or_else(|| all.iter().find(|e| pred(e, locale)))
            .map(|e| e.when)
    };

    Selection {
        start: pick(is_start),
        end: pick(is_end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn event(category: &str, title: &str, date: &str) -> TimedEvent {
        TimedEvent::new(title, at(date), Some(Category::from(category)))
    }

    #[test]
    fn fast_day_scenario() {
        let events = vec![
            event("fast", "Fast begins", "2025-07-01T03:30:00Z"),
            event("fast", "Fast ends", "2025-07-01T19:45:00Z"),
        ];

        let selection = select_start_end(&events, at("2025-07-01T10:00:00Z"), Locale::English);

        assert_eq!(selection.start, Some(at("2025-07-01T03:30:00Z")));
        assert_eq!(selection.end, Some(at("2025-07-01T19:45:00Z")));
    }

    #[test]
    fn earliest_upcoming_candle_lighting_wins() {
        let events = vec![
            event("candles", "Candle lighting: 19:30", "2025-07-11T16:30:00Z"),
            event("parashat", "Parashat Balak", "2025-07-05T00:00:00Z"),
            event("candles", "Candle lighting: 19:31", "2025-07-04T16:31:00Z"),
            event("havdalah", "Havdalah: 20:40", "2025-07-05T17:40:00Z"),
        ];

        let selection = select_start_end(&events, at("2025-07-01T12:00:00Z"), Locale::English);

        assert_eq!(selection.start, Some(at("2025-07-04T16:31:00Z")));
        assert_eq!(selection.end, Some(at("2025-07-05T17:40:00Z")));
    }

    #[test]
    fn past_start_is_surfaced_when_nothing_upcoming() {
        let events = vec![
            event("candles", "Candle lighting", "2025-07-04T16:31:00Z"),
            event("candles", "Candle lighting", "2025-07-03T16:31:00Z"),
            event("havdalah", "Havdalah", "2025-07-05T17:40:00Z"),
        ];

        let selection = select_start_end(&events, at("2025-07-05T12:00:00Z"), Locale::English);

        // Earliest in the sorted list, not the most recent
        assert_eq!(selection.start, Some(at("2025-07-03T16:31:00Z")));
        assert_eq!(selection.end, Some(at("2025-07-05T17:40:00Z")));
    }

    #[test]
    fn no_matching_events_yields_nothing() {
        let events = vec![
            event("parashat", "Parashat Pinchas", "2025-07-12T00:00:00Z"),
            event("fast", "Tzom Tammuz", "2025-07-13T03:30:00Z"),
            TimedEvent::new("No category", at("2025-07-12T10:00:00Z"), None),
        ];

        let selection = select_start_end(&events, at("2025-07-01T00:00:00Z"), Locale::English);
        assert_eq!(selection, Selection::default());

        let empty = select_start_end(&[], Utc::now(), Locale::Hebrew);
        assert_eq!(empty, Selection::default());
    }

    #[test]
    fn event_exactly_at_now_is_not_upcoming() {
        let now = Utc.with_ymd_and_hms(2025, 7, 4, 16, 31, 0).unwrap();
        let events = vec![
            TimedEvent::new("Candle lighting", now, Some(Category::Candles)),
            event("candles", "Candle lighting", "2025-07-11T16:30:00Z"),
        ];

        let selection = select_start_end(&events, now, Locale::English);
        assert_eq!(selection.start, Some(at("2025-07-11T16:30:00Z")));
    }

    #[test]
    fn fast_rows_classified_by_text() {
        let begins = event("fast", "Fast begins", "2025-07-13T01:10:00Z");
        let ends = event("fast", "Fast ends", "2025-07-13T17:10:00Z");
        let neither = event("fast", "Tzom Tammuz", "2025-07-13T00:00:00Z");

        assert_eq!(classify(&begins, Locale::English), EventRole::Start);
        assert_eq!(classify(&ends, Locale::English), EventRole::End);
        assert_eq!(classify(&neither, Locale::English), EventRole::Neither);
    }

    #[test]
    fn text_patterns_only_apply_to_fast_category() {
        let mislabeled = event("holiday", "Fast begins", "2025-07-13T01:10:00Z");
        assert_eq!(classify(&mislabeled, Locale::English), EventRole::Neither);
    }

    #[test]
    fn hebrew_locale_matches_localized_title() {
        let mut begins = event("fast", "Fast begins", "2025-08-02T16:40:00Z");
        begins.hebrew = Some("תחילת צום".into());
        let mut ends = event("fast", "Fast ends", "2025-08-03T16:50:00Z");
        ends.hebrew = Some("צום מסתיים".into());

        let selection = select_start_end(
            &[ends.clone(), begins.clone()],
            at("2025-08-01T00:00:00Z"),
            Locale::Hebrew,
        );
        assert_eq!(selection.start, Some(begins.when));
        assert_eq!(selection.end, Some(ends.when));

        // A Hebrew UI with only English titles cannot classify fast rows
        begins.hebrew = None;
        assert_eq!(classify(&begins, Locale::Hebrew), EventRole::Neither);
    }

    #[test]
    fn hebcal_hebrew_wording_with_article() {
        let mut begins = event("fast", "Fast begins", "2025-07-13T01:20:00Z");
        begins.hebrew = Some("תחילת הצום".into());
        let mut ends = event("fast", "Fast ends", "2025-07-13T17:10:00Z");
        ends.hebrew = Some("סיום הצום".into());

        assert_eq!(classify(&begins, Locale::Hebrew), EventRole::Start);
        assert_eq!(classify(&ends, Locale::Hebrew), EventRole::End);
    }
}
