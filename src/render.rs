//! Terminal rendering for luach-core types.
//!
//! Everything is rendered for a `ViewState`: its language picks the
//! strings and titles, its time zone formats the instants, and its theme
//! picks the accent color.

use chrono::{DateTime, Utc};
use luach_core::City;
use luach_core::countdown::{NO_TARGET, countdown};
use luach_core::dashboard::Snapshot;
use luach_core::event::{HebcalItem, TimedEvent, parse_hebcal_date};
use luach_core::hebcal::ZmanimResponse;
use luach_core::preferences::Theme;
use luach_core::select::{EventRole, classify};
use luach_core::timefmt::{CLOCK, LONG_DATE, MEDIUM_DATE, MEDIUM_DATE_TIME, format_in_tz};
use luach_core::view::ViewState;
use owo_colors::OwoColorize;

use crate::strings::strings;

pub trait Render {
    fn render(&self, view: &ViewState) -> String;
}

fn accent(text: &str, theme: Theme) -> String {
    match theme {
        Theme::Light => text.blue().bold().to_string(),
        Theme::Dark => text.cyan().bold().to_string(),
    }
}

/// Clock time of an optional instant, or the no-target dash.
fn clock(instant: Option<DateTime<Utc>>, view: &ViewState) -> String {
    match instant {
        Some(instant) => format_in_tz(instant, view.timezone, CLOCK),
        None => NO_TARGET.to_string(),
    }
}

/// Today's status: date, place, holiday, and start/end with countdowns.
pub struct StatusCard<'a> {
    pub snapshot: &'a Snapshot,
    pub now: DateTime<Utc>,
}

impl Render for StatusCard<'_> {
    fn render(&self, view: &ViewState) -> String {
        let s = strings(view.locale);
        let selection = self.snapshot.selection;

        let holiday = match self.snapshot.today_holiday(view, self.now) {
            Some(item) => accent(item.display_title(view.locale), view.theme),
            None => s.no_holiday.dimmed().to_string(),
        };

        let row = |label: &str, target: Option<DateTime<Utc>>| {
            format!(
                "  {:<8} {}  {} {}",
                label,
                clock(target, view).bold(),
                countdown(target, self.now),
                s.remaining.dimmed()
            )
        };

        [
            format!(
                "{} · {}",
                s.today.bold(),
                format_in_tz(self.now, view.timezone, LONG_DATE)
            ),
            format!("{} ({})", view.city.name, view.timezone.name()).dimmed().to_string(),
            format!("  {}", holiday),
            String::new(),
            row(s.start, selection.start),
            row(s.end, selection.end),
        ]
        .join("\n")
    }
}

/// Every timed event, with the start/end role marked.
impl Render for [TimedEvent] {
    fn render(&self, view: &ViewState) -> String {
        let s = strings(view.locale);
        let mut lines = vec![s.detailed_times.bold().to_string()];

        if self.is_empty() {
            lines.push(format!("  {}", s.no_times.dimmed()));
            return lines.join("\n");
        }

        for event in self {
            let when = format_in_tz(event.when, view.timezone, MEDIUM_DATE_TIME);
            let role = match classify(event, view.locale) {
                EventRole::Start => format!(" [{}]", s.start).green().to_string(),
                EventRole::End => format!(" [{}]", s.end).red().to_string(),
                EventRole::Neither => String::new(),
            };
            lines.push(format!("  {:<26} {}{}", when.dimmed(), event.text(view.locale), role));
        }

        lines.join("\n")
    }
}

impl Render for ZmanimResponse {
    fn render(&self, view: &ViewState) -> String {
        let s = strings(view.locale);
        let mut lines = vec![s.zmanim.bold().to_string()];

        for (name, when) in self.chronological() {
            lines.push(format!("  {:<22} {}", name, format_in_tz(when, view.timezone, CLOCK)));
        }

        lines.join("\n")
    }
}

/// The month's holidays, numbered for `export` and `share`.
impl Render for [HebcalItem] {
    fn render(&self, view: &ViewState) -> String {
        let s = strings(view.locale);
        let mut lines = vec![s.this_month.bold().to_string()];

        if self.is_empty() {
            lines.push(format!("  {}", s.no_holidays_this_month.dimmed()));
            return lines.join("\n");
        }

        for (i, item) in self.iter().enumerate() {
            let date = parse_hebcal_date(&item.date, view.timezone)
                .map(|d| format_in_tz(d, view.timezone, MEDIUM_DATE))
                .unwrap_or_else(|| item.date.clone());

            let hdate = match item.hebrew_date_label() {
                Some(label) if view.locale.is_hebrew() => format!(" ({label})"),
                _ => String::new(),
            };

            lines.push(format!(
                "  {:>2}. {}  {}{}",
                i + 1,
                item.display_title(view.locale),
                date.dimmed(),
                hdate.dimmed()
            ));
        }

        lines.join("\n")
    }
}

impl Render for City {
    fn render(&self, view: &ViewState) -> String {
        let line = format!("{:<10} {:>7}  {:.3}, {:.3}", self.name, self.geonameid, self.lat, self.lon);
        if self.geonameid == view.city.geonameid {
            format!("{} {}", "*".bold(), accent(&line, view.theme))
        } else {
            format!("  {}", line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use luach_core::Locale;
    use luach_core::event::Category;
    use luach_core::select::Selection;

    fn snapshot(holidays: Vec<HebcalItem>, selection: Selection) -> Snapshot {
        Snapshot {
            holidays,
            times: Vec::new(),
            zmanim: None,
            events: Vec::new(),
            selection,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn status_card_without_holiday_or_times() {
        let view = ViewState::default();
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
        let snapshot = snapshot(Vec::new(), Selection::default());

        let card = StatusCard { snapshot: &snapshot, now }.render(&view);

        assert!(card.contains("July 1, 2025"), "{}", card);
        assert!(card.contains("Jerusalem (Asia/Jerusalem)"), "{}", card);
        assert!(card.contains("No major holiday today"), "{}", card);
        assert!(card.contains("—"), "{}", card);
    }

    #[test]
    fn status_card_shows_holiday_and_countdown() {
        let mut view = ViewState::default();
        view.set_locale(Locale::Hebrew);
        let now = Utc.with_ymd_and_hms(2025, 9, 23, 12, 0, 0).unwrap();

        let holiday = HebcalItem {
            title: "Rosh Hashana 5786".into(),
            hebrew: Some("ראש השנה 5786".into()),
            date: "2025-09-23".into(),
            category: Some("holiday".into()),
            ..Default::default()
        };
        let selection = Selection {
            start: Some(Utc.with_ymd_and_hms(2025, 9, 23, 15, 30, 15).unwrap()),
            end: None,
        };
        let snapshot = snapshot(vec![holiday], selection);

        let card = StatusCard { snapshot: &snapshot, now }.render(&view);

        assert!(card.contains("ראש השנה 5786"), "{}", card);
        assert!(card.contains("18:30:15"), "{}", card);
        assert!(card.contains("03:30:15"), "{}", card);
    }

    #[test]
    fn details_mark_roles() {
        let view = ViewState::default();
        let events = vec![
            TimedEvent::new(
                "Candle lighting",
                Utc.with_ymd_and_hms(2025, 7, 4, 16, 27, 0).unwrap(),
                Some(Category::Candles),
            ),
            TimedEvent::new("Parashat Balak", Utc.with_ymd_and_hms(2025, 7, 4, 21, 0, 0).unwrap(), None),
        ];

        let text = events.render(&view);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Jul 4, 2025, 7:27:00 PM"), "{}", lines[1]);
        assert!(lines[1].contains("[Start]"), "{}", lines[1]);
        assert!(!lines[2].contains("[Start]") && !lines[2].contains("[End]"), "{}", lines[2]);
    }

    #[test]
    fn month_list_shows_hebrew_date_in_hebrew_only() {
        let items = vec![HebcalItem {
            title: "Purim".into(),
            hebrew: Some("פורים".into()),
            date: "2025-03-14".into(),
            hdate: Some("14 Adar 5785".into()),
            ..Default::default()
        }];

        let mut view = ViewState::default();
        let english = items.render(&view);
        assert!(english.contains("1. Purim"), "{}", english);
        assert!(english.contains("Mar 14, 2025"), "{}", english);
        assert!(!english.contains("14 Adar 5785"), "{}", english);

        view.set_locale(Locale::Hebrew);
        let hebrew = items.render(&view);
        assert!(hebrew.contains("פורים"), "{}", hebrew);
        assert!(hebrew.contains("(14 Adar 5785)"), "{}", hebrew);
    }

    #[test]
    fn month_list_uses_lettered_hebrew_date() {
        let items: Vec<HebcalItem> = serde_json::from_value(serde_json::json!([{
            "title": "Purim",
            "hebrew": "פורים",
            "date": "2025-03-14",
            "hdate": "14 Adar 5785",
            "heDateParts": { "y": "תשפ״ה", "m": "אדר", "d": "י״ד" }
        }]))
        .unwrap();

        let mut view = ViewState::default();
        let english = items.render(&view);
        assert!(!english.contains("אדר"), "{}", english);

        view.set_locale(Locale::Hebrew);
        let hebrew = items.render(&view);
        assert!(hebrew.contains("(י״ד אדר תשפ״ה)"), "{}", hebrew);
        assert!(!hebrew.contains("14 Adar 5785"), "{}", hebrew);
    }

    #[test]
    fn zmanim_in_chronological_order() {
        let view = ViewState::default();
        let zmanim = ZmanimResponse {
            times: [
                ("sunset".to_string(), "2025-07-01T19:48:00+03:00".to_string()),
                ("sunrise".to_string(), "2025-07-01T05:35:00+03:00".to_string()),
            ]
            .into_iter()
            .collect(),
        };

        let text = zmanim.render(&view);
        let sunrise = text.find("sunrise").unwrap();
        let sunset = text.find("sunset").unwrap();

        assert!(sunrise < sunset);
        assert!(text.contains("05:35:00"), "{}", text);
    }
}
