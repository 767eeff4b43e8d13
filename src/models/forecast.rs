use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sales::{ChartData, SalesSummary};

/// One predicted day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub sales: f64,
}

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    pub days: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub success: bool,
    pub forecasts: Vec<ForecastPoint>,
    /// Effective horizon after clamping, which may be lower than requested.
    pub days: i64,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub success: bool,
    pub prediction: f64,
    pub date: NaiveDate,
    pub last_actual: f64,
    pub last_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub stats: SalesSummary,
    pub chart: ChartData,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub success: bool,
    pub labels: Vec<String>,
    pub sales: Vec<f64>,
}
