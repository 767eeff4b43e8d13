use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::handlers::{require_forecaster, require_series, AppState};
use crate::models::{round2, ForecastPoint, ForecastRequest, ForecastResponse, PredictionResponse};

const DEFAULT_HORIZON: i64 = 7;

/// Single next-day prediction from the trailing sales window.
pub async fn predict(State(state): State<AppState>) -> Result<Json<PredictionResponse>, AppError> {
    let series = require_series(&state.artifacts)?;
    let forecaster = require_forecaster(&state.artifacts)?;

    let point = forecaster.predict_next(series)?;
    let last = series
        .last()
        .ok_or_else(|| AppError::service_unavailable("Sales dataset"))?;

    Ok(Json(PredictionResponse {
        success: true,
        prediction: round2(point.sales),
        date: point.date,
        last_actual: round2(last.sales),
        last_date: last.date,
    }))
}

/// Multi-day forecast; the horizon defaults to a week and is capped by the
/// forecaster. The response reports the effective horizon.
pub async fn forecast(
    State(state): State<AppState>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, AppError> {
    let days = req.days.unwrap_or(DEFAULT_HORIZON);

    let series = require_series(&state.artifacts)?;
    let forecaster = require_forecaster(&state.artifacts)?;

    let points = forecaster.forecast(series, days)?;
    let forecasts: Vec<ForecastPoint> = points
        .into_iter()
        .map(|p| ForecastPoint {
            date: p.date,
            sales: round2(p.sales),
        })
        .collect();

    Ok(Json(ForecastResponse {
        days: forecasts.len() as i64,
        success: true,
        forecasts,
    }))
}
