use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::handlers::{require_series, AppState};
use crate::ml::forecast::WINDOW_SIZE;
use crate::models::{ChartResponse, SummaryResponse};

/// Dashboard payload: dataset statistics plus the recent sales window.
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let series = require_series(&state.artifacts)?;
    let stats = series
        .summary()
        .ok_or_else(|| AppError::service_unavailable("Sales dataset"))?;

    Ok(Json(SummaryResponse {
        stats,
        chart: series.chart_data(WINDOW_SIZE),
    }))
}

/// Recent-window data for the interactive chart.
pub async fn chart_data(State(state): State<AppState>) -> Result<Json<ChartResponse>, AppError> {
    let series = require_series(&state.artifacts)?;
    let chart = series.chart_data(WINDOW_SIZE);

    Ok(Json(ChartResponse {
        success: true,
        labels: chart.labels,
        sales: chart.sales,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use chrono::{Duration, NaiveDate};

    use crate::artifacts::ArtifactStore;
    use crate::data::SalesSeries;
    use crate::models::DailySales;

    fn state_with_series(days: usize) -> AppState {
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let start = end - Duration::days(days as i64 - 1);
        let points = (0..days)
            .map(|i| DailySales {
                date: start + Duration::days(i as i64),
                sales: 400.0 + i as f64,
            })
            .collect();

        AppState {
            artifacts: Arc::new(ArtifactStore {
                series: Some(SalesSeries::new(points)),
                model: None,
                scaler: None,
            }),
        }
    }

    fn degraded_state() -> AppState {
        AppState {
            artifacts: Arc::new(ArtifactStore {
                series: None,
                model: None,
                scaler: None,
            }),
        }
    }

    #[tokio::test]
    async fn test_summary_reports_stats_and_recent_window() {
        let resp = get_summary(State(state_with_series(90))).await.unwrap().0;

        assert_eq!(resp.stats.total_days, 90);
        assert_eq!(resp.stats.min_sales, 400.0);
        assert_eq!(resp.stats.max_sales, 489.0);
        assert_eq!(resp.stats.end_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        // Chart shows at most the model window, 60 days.
        assert_eq!(resp.chart.labels.len(), 60);
        assert_eq!(resp.chart.labels.last().unwrap(), "2024-01-01");
    }

    #[tokio::test]
    async fn test_chart_covers_short_history() {
        let resp = chart_data(State(state_with_series(10))).await.unwrap().0;

        assert!(resp.success);
        assert_eq!(resp.labels.len(), 10);
        assert_eq!(resp.sales.len(), 10);
    }

    #[tokio::test]
    async fn test_missing_dataset_is_service_unavailable() {
        let err = get_summary(State(degraded_state())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);

        let err = chart_data(State(degraded_state())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.body.code, "SERVICE_UNAVAILABLE");
    }
}
