//! Core types for luach.
//!
//! This crate is shared by the `luach` CLI and `luach-server`:
//! - `city` and `locale` for where and in which language to ask Hebcal
//! - `hebcal` for the three upstream endpoints
//! - `select` for choosing the start/end instants of the status card
//! - `dashboard` for a full refresh cycle
//! - `ics` for exporting a holiday as a calendar file

pub mod city;
pub mod countdown;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod hebcal;
pub mod ics;
pub mod locale;
pub mod patterns;
pub mod preferences;
pub mod select;
pub mod timefmt;
pub mod view;

pub use city::City;
pub use error::{LuachError, LuachResult};
pub use event::{Category, HebcalItem, TimedEvent};
pub use locale::Locale;
pub use select::{Selection, select_start_end};
