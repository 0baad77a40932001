//! ICS export of holidays.
//!
//! Produces a single-event VCALENDAR per RFC 5545 that calendar apps can import.

mod generate;

pub use generate::{HolidayExport, generate_ics, ics_filename};
