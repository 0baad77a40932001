pub mod cities;
pub mod export;
pub mod hebcal;
pub mod status;

use std::str::FromStr;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use luach_core::{Locale, LuachError};
use serde::Serialize;

use crate::state::AppState;

/// All API routes with state attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(hebcal::router())
        .merge(cities::router())
        .merge(status::router())
        .merge(export::router())
        .with_state(state)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Convert errors to HTTP responses.
///
/// `LuachError`s carry their own status (upstream failures keep Hebcal's
/// status code); anything else is a 500.
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        self.0
            .downcast_ref::<LuachError>()
            .and_then(|e| StatusCode::from_u16(e.status_code()).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match self.0.downcast_ref::<LuachError>() {
            Some(LuachError::Upstream { body, .. }) if !body.is_empty() => Some(body.clone()),
            _ => None,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "request failed: {:#}", self.0);
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
            details,
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Parse an optional query parameter, rejecting malformed values with a 400.
pub fn parse_param<T: FromStr>(name: &str, value: Option<&str>) -> Result<Option<T>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            LuachError::InvalidParameter {
                name: name.to_string(),
                value: raw.to_string(),
            }
            .into()
        }),
    }
}

/// `lg` parameter; English when absent.
pub fn parse_locale(value: Option<&str>) -> Result<Locale, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(Locale::English),
        Some(raw) => Ok(raw.parse::<Locale>()?),
    }
}
