pub mod health;
pub mod predictions;
pub mod sales;

use std::sync::Arc;

use crate::artifacts::ArtifactStore;
use crate::data::SalesSeries;
use crate::errors::AppError;
use crate::ml::forecast::Forecaster;

/// Shared application state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<ArtifactStore>,
}

pub(crate) fn require_series(store: &ArtifactStore) -> Result<&SalesSeries, AppError> {
    store
        .series
        .as_ref()
        .ok_or_else(|| AppError::service_unavailable("Sales dataset"))
}

pub(crate) fn require_forecaster(store: &ArtifactStore) -> Result<Forecaster<'_>, AppError> {
    let model = store
        .model
        .as_deref()
        .ok_or_else(|| AppError::service_unavailable("Forecast model"))?;
    let scaler = store
        .scaler
        .as_ref()
        .ok_or_else(|| AppError::service_unavailable("Value scaler"))?;
    Ok(Forecaster::new(model, scaler))
}
