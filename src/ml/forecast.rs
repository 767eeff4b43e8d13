//! Recursive multi-step forecasting over a fixed trailing window.
//! The model itself is trained offline; only inference runs here.

use std::collections::VecDeque;

use chrono::Duration;
use thiserror::Error;

use crate::data::SalesSeries;
use crate::ml::model::{ModelError, SalesModel};
use crate::ml::scaler::MinMaxScaler;
use crate::models::ForecastPoint;

/// Observations fed to the model per prediction.
pub const WINDOW_SIZE: usize = 60;
/// Hard cap on the forecast horizon; larger requests are clamped.
pub const MAX_HORIZON: usize = 30;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("insufficient history: need {required} daily observations, have {available}")]
    InsufficientHistory { required: usize, available: usize },
    #[error("forecast horizon must be at least 1 day")]
    InvalidHorizon,
    #[error(transparent)]
    Compute(#[from] ModelError),
}

/// Composes the single-step model with the value scaler to roll predictions
/// forward past the end of the observed series.
pub struct Forecaster<'a> {
    model: &'a dyn SalesModel,
    scaler: &'a MinMaxScaler,
}

impl<'a> Forecaster<'a> {
    pub fn new(model: &'a dyn SalesModel, scaler: &'a MinMaxScaler) -> Self {
        Self { model, scaler }
    }

    /// Roll the model forward `horizon` days past the end of `series`.
    ///
    /// The window is seeded with the last `WINDOW_SIZE` observed values and
    /// slides forward on the model's own scaled output, so every step past
    /// the first is conditioned on predicted rather than observed history.
    /// Prediction error therefore compounds with the horizon; no correction
    /// is applied. Horizons above `MAX_HORIZON` are clamped; zero or
    /// negative horizons are rejected.
    pub fn forecast(
        &self,
        series: &SalesSeries,
        horizon: i64,
    ) -> Result<Vec<ForecastPoint>, ForecastError> {
        if horizon < 1 {
            return Err(ForecastError::InvalidHorizon);
        }
        let horizon = (horizon as usize).min(MAX_HORIZON);

        let seed = series
            .trailing(WINDOW_SIZE)
            .ok_or(ForecastError::InsufficientHistory {
                required: WINDOW_SIZE,
                available: series.len(),
            })?;
        let last_date = seed[seed.len() - 1].date;

        let mut window: VecDeque<f64> =
            seed.iter().map(|p| self.scaler.transform(p.sales)).collect();

        let mut points = Vec::with_capacity(horizon);
        for step in 1..=horizon {
            let scaled = self.model.predict(window.make_contiguous())?;
            points.push(ForecastPoint {
                date: last_date + Duration::days(step as i64),
                sales: self.scaler.inverse(scaled),
            });
            // Slide forward, feeding the prediction back in.
            window.pop_front();
            window.push_back(scaled);
        }
        Ok(points)
    }

    /// Next-day prediction; equals the first element of a one-day forecast.
    pub fn predict_next(&self, series: &SalesSeries) -> Result<ForecastPoint, ForecastError> {
        let mut points = self.forecast(series, 1)?;
        Ok(points.remove(0))
    }
}
