//! ICS file generation.

use chrono::{DateTime, Duration, Utc};
use icalendar::{Calendar, Component, EventLike};

use crate::error::{LuachError, LuachResult};

const PRODID: &str = "-//Luach//Jewish Holidays//EN";

/// Length assumed for a holiday exported without an end time.
const DEFAULT_DURATION_HOURS: i64 = 1;

/// A holiday to export as a calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayExport {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl HolidayExport {
    pub fn new(title: impl Into<String>, start: DateTime<Utc>) -> Self {
        HolidayExport {
            title: title.into(),
            start,
            end: None,
            description: None,
            location: None,
        }
    }

    /// Explicit end, or one hour after start.
    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end
            .unwrap_or(self.start + Duration::hours(DEFAULT_DURATION_HOURS))
    }
}

/// Generate .ics content for a single holiday.
pub fn generate_ics(holiday: &HolidayExport) -> LuachResult<String> {
    let end = holiday.effective_end();
    if end < holiday.start {
        return Err(LuachError::IcsGenerate(format!(
            "'{}' ends before it starts",
            holiday.title
        )));
    }

    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@luach", uuid::Uuid::new_v4()));
    ics_event.summary(&holiday.title);

    ics_event.add_property("DTSTAMP", format_utc(Utc::now()));
    ics_event.add_property("DTSTART", format_utc(holiday.start));
    ics_event.add_property("DTEND", format_utc(end));

    if let Some(ref desc) = holiday.description {
        ics_event.description(desc);
    }

    if let Some(ref loc) = holiday.location {
        ics_event.location(loc);
    }

    ics_event.add_property("STATUS", "CONFIRMED");

    cal.push(ics_event.done());
    let cal = cal.done();

    Ok(replace_prodid(&cal.to_string()))
}

/// Download filename for a holiday, e.g. `rosh-hashanah.ics`.
///
/// Titles without any sluggable characters fall back to `holiday.ics`.
pub fn ics_filename(title: &str) -> String {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        "holiday.ics".to_string()
    } else {
        format!("{}.ics", slug)
    }
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Swap the icalendar crate's PRODID for ours.
fn replace_prodid(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Undo RFC 5545 line folding so long values can be compared whole.
    fn unfold(ics: &str) -> String {
        ics.replace("\r\n ", "").replace("\r\n\t", "")
    }

    fn property<'a>(ics: &'a str, name: &str) -> Option<&'a str> {
        ics.lines()
            .find(|l| l.starts_with(&format!("{name}:")))
            .map(|l| &l[name.len() + 1..])
    }

    #[test]
    fn missing_end_defaults_to_one_hour() {
        let start = Utc.with_ymd_and_hms(2025, 9, 23, 18, 0, 0).unwrap();
        let ics = generate_ics(&HolidayExport::new("Rosh Hashanah", start)).unwrap();
        let ics = unfold(&ics);

        assert_eq!(property(&ics, "DTSTART"), Some("20250923T180000Z"));
        assert_eq!(property(&ics, "DTEND"), Some("20250923T190000Z"));
        assert_eq!(property(&ics, "SUMMARY"), Some("Rosh Hashanah"));
    }

    #[test]
    fn envelope_and_optional_fields() {
        let start = Utc.with_ymd_and_hms(2025, 10, 6, 15, 0, 0).unwrap();
        let mut holiday = HolidayExport::new("Sukkot I", start);
        holiday.end = Some(start + Duration::days(1));
        holiday.description = Some("Feast of Booths".into());
        holiday.location = Some("Jerusalem".into());

        let ics = unfold(&generate_ics(&holiday).unwrap());

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"), "ICS:\n{}", ics);
        assert_eq!(property(&ics, "VERSION"), Some("2.0"));
        assert_eq!(property(&ics, "PRODID"), Some(PRODID));
        assert_eq!(property(&ics, "DTEND"), Some("20251007T150000Z"));
        assert_eq!(property(&ics, "DESCRIPTION"), Some("Feast of Booths"));
        assert_eq!(property(&ics, "LOCATION"), Some("Jerusalem"));
        assert_eq!(property(&ics, "STATUS"), Some("CONFIRMED"));
        assert!(property(&ics, "UID").is_some_and(|uid| uid.ends_with("@luach")));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let start = Utc.with_ymd_and_hms(2025, 9, 23, 18, 0, 0).unwrap();
        let ics = generate_ics(&HolidayExport::new("Rosh Hashanah", start)).unwrap();

        assert!(property(&ics, "DESCRIPTION").is_none());
        assert!(property(&ics, "LOCATION").is_none());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let start = Utc.with_ymd_and_hms(2025, 9, 23, 18, 0, 0).unwrap();
        let mut holiday = HolidayExport::new("Backwards", start);
        holiday.end = Some(start - Duration::hours(2));

        assert!(matches!(generate_ics(&holiday), Err(LuachError::IcsGenerate(_))));
    }

    #[test]
    fn filenames() {
        assert_eq!(ics_filename("Rosh Hashanah 5786"), "rosh-hashanah-5786.ics");
        assert_eq!(ics_filename("!!!"), "holiday.ics");
    }
}
