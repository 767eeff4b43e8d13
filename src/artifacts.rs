use std::path::Path;

use crate::config::ArtifactConfig;
use crate::data::{self, SalesSeries};
use crate::ml::model::{self, SalesModel};
use crate::ml::scaler::{self, MinMaxScaler};

/// Inference artifacts loaded once at startup and shared read-only across
/// requests. An empty slot marks that component unavailable; the endpoints
/// that need it answer 503 instead of crashing.
pub struct ArtifactStore {
    pub series: Option<SalesSeries>,
    pub model: Option<Box<dyn SalesModel>>,
    pub scaler: Option<MinMaxScaler>,
}

impl ArtifactStore {
    /// Load every artifact, logging failures individually. A failure only
    /// degrades the component it belongs to.
    pub fn load(config: &ArtifactConfig) -> Self {
        let model = match model::load_model(Path::new(&config.model_path)) {
            Ok(m) => {
                tracing::info!(path = %config.model_path, "Model loaded");
                Some(m)
            }
            Err(e) => {
                tracing::error!(path = %config.model_path, "Failed to load model: {e:#}");
                None
            }
        };

        let scaler = match scaler::load_scaler(Path::new(&config.scaler_path)) {
            Ok(s) => {
                tracing::info!(path = %config.scaler_path, "Scaler loaded");
                Some(s)
            }
            Err(e) => {
                tracing::error!(path = %config.scaler_path, "Failed to load scaler: {e:#}");
                None
            }
        };

        let series = match data::load_dataset(Path::new(&config.dataset_path)) {
            Ok(s) => {
                tracing::info!(path = %config.dataset_path, days = s.len(), "Dataset loaded");
                Some(s)
            }
            Err(e) => {
                tracing::error!(path = %config.dataset_path, "Failed to load dataset: {e:#}");
                None
            }
        };

        Self {
            series,
            model,
            scaler,
        }
    }

    pub fn degraded(&self) -> bool {
        self.series.is_none() || self.model.is_none() || self.scaler.is_none()
    }
}
