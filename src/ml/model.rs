use std::path::Path;

use anyhow::{ensure, Context};
use serde::Deserialize;
use thiserror::Error;

use crate::ml::forecast::WINDOW_SIZE;

#[derive(Debug, Error)]
#[error("model evaluation failed: {0}")]
pub struct ModelError(pub String);

/// Externally trained single-step predictor. Implementations take the scaled
/// trailing window (oldest value first) and return one scaled value.
///
/// `Send + Sync` so the loaded model can be invoked concurrently from the
/// runtime's worker threads; inference takes `&self` and never mutates.
pub trait SalesModel: Send + Sync {
    fn predict(&self, window: &[f64]) -> Result<f64, ModelError>;
}

/// Linear readout over the window, the exported form of the trained
/// sequence model. Weights are ordered oldest-observation first.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowRegressor {
    weights: Vec<f64>,
    bias: f64,
}

impl WindowRegressor {
    pub fn new(weights: Vec<f64>, bias: f64) -> anyhow::Result<Self> {
        ensure!(!weights.is_empty(), "model artifact has no weights");
        ensure!(
            bias.is_finite() && weights.iter().all(|w| w.is_finite()),
            "model weights must be finite"
        );
        Ok(Self { weights, bias })
    }
}

impl SalesModel for WindowRegressor {
    fn predict(&self, window: &[f64]) -> Result<f64, ModelError> {
        if window.len() != self.weights.len() {
            return Err(ModelError(format!(
                "expected a window of {} values, got {}",
                self.weights.len(),
                window.len()
            )));
        }

        let out: f64 = self
            .weights
            .iter()
            .zip(window)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;

        if !out.is_finite() {
            return Err(ModelError("prediction is not finite".into()));
        }
        Ok(out)
    }
}

/// Load the model artifact and check it against the window width the
/// service feeds it.
pub fn load_model(path: &Path) -> anyhow::Result<Box<dyn SalesModel>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading model artifact {}", path.display()))?;
    let parsed: WindowRegressor = serde_json::from_str(&raw)
        .with_context(|| format!("parsing model artifact {}", path.display()))?;

    let model = WindowRegressor::new(parsed.weights, parsed.bias)?;
    ensure!(
        model.weights.len() == WINDOW_SIZE,
        "model expects {} inputs, the service feeds windows of {}",
        model.weights.len(),
        WINDOW_SIZE
    );
    Ok(Box::new(model))
}
