use axum::{extract::State, Json};

use crate::handlers::AppState;

/// Component-availability report. The service starts even when artifacts
/// fail to load, so readiness is per component rather than all-or-nothing.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let artifacts = &state.artifacts;
    Json(serde_json::json!({
        "status": if artifacts.degraded() { "degraded" } else { "ok" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "dataset": artifacts.series.is_some(),
            "model": artifacts.model.is_some(),
            "scaler": artifacts.scaler.is_some(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::artifacts::ArtifactStore;

    #[tokio::test]
    async fn test_degraded_when_artifacts_missing() {
        let state = AppState {
            artifacts: Arc::new(ArtifactStore {
                series: None,
                model: None,
                scaler: None,
            }),
        };

        let body = health_check(State(state)).await.0;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["components"]["dataset"], false);
        assert_eq!(body["components"]["model"], false);
        assert_eq!(body["components"]["scaler"], false);
    }
}
