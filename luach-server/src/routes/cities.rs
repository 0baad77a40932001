//! City directory endpoints

use axum::{Json, Router, extract::Query, routing::get};
use luach_core::City;
use luach_core::city::ISRAEL_CITIES;
use serde::Deserialize;

use crate::routes::{AppError, parse_param};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cities", get(list_cities))
        .route("/api/cities/nearest", get(nearest_city))
}

/// GET /api/cities - All supported cities
async fn list_cities() -> Json<&'static [City]> {
    Json(ISRAEL_CITIES)
}

#[derive(Deserialize)]
pub struct NearestParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// GET /api/cities/nearest - Closest city to a position; Jerusalem without one
async fn nearest_city(Query(params): Query<NearestParams>) -> Result<Json<City>, AppError> {
    let lat: Option<f64> = parse_param("lat", params.lat.as_deref())?;
    let lon: Option<f64> = parse_param("lon", params.lon.as_deref())?;

    let city = match (lat, lon) {
        (Some(lat), Some(lon)) => City::nearest(lat, lon),
        _ => City::default_city(),
    };

    Ok(Json(*city))
}
