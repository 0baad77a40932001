//! ICS download for a single holiday.

use axum::{
    Router,
    extract::Query,
    http::header,
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, Utc};
use luach_core::LuachError;
use luach_core::ics::{HolidayExport, generate_ics, ics_filename};
use serde::Deserialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/export.ics", get(export))
}

#[derive(Deserialize)]
pub struct ExportParams {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

fn parse_instant(name: &str, value: &str) -> Result<DateTime<Utc>, LuachError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| LuachError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        })
}

/// GET /api/export.ics - Calendar file for one holiday
async fn export(Query(params): Query<ExportParams>) -> Result<impl IntoResponse, AppError> {
    let title = params.title.unwrap_or_default();
    let start = params.start.as_deref().ok_or_else(|| LuachError::InvalidParameter {
        name: "start".into(),
        value: String::new(),
    })?;

    let holiday = HolidayExport {
        start: parse_instant("start", start)?,
        end: params.end.as_deref().map(|end| parse_instant("end", end)).transpose()?,
        description: params.description.filter(|d| !d.is_empty()),
        location: params.location.filter(|l| !l.is_empty()),
        title,
    };

    let ics = generate_ics(&holiday)?;
    let disposition = format!("attachment; filename=\"{}\"", ics_filename(&holiday.title));

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        ics,
    ))
}
