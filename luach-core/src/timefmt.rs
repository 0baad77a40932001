//! Formatting instants in the viewer's time zone.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{LuachError, LuachResult};

/// Long date, e.g. "September 23, 2025".
pub const LONG_DATE: &str = "%B %-d, %Y";
/// Medium date, e.g. "Sep 23, 2025".
pub const MEDIUM_DATE: &str = "%b %-d, %Y";
/// Medium date and time, e.g. "Sep 23, 2025, 6:00:00 PM".
pub const MEDIUM_DATE_TIME: &str = "%b %-d, %Y, %-I:%M:%S %p";
pub const CLOCK: &str = "%H:%M:%S";

pub fn parse_tz(name: &str) -> LuachResult<Tz> {
    Tz::from_str(name.trim()).map_err(|_| LuachError::UnknownTimeZone(name.to_string()))
}

pub fn format_in_tz(instant: DateTime<Utc>, tz: Tz, pattern: &str) -> String {
    instant.with_timezone(&tz).format(pattern).to_string()
}

/// Calendar date of `instant` in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}
