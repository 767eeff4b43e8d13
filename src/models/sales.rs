use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of aggregated sales. Dates are unique within a series;
/// raw records sharing a day are summed by the dataset loader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub sales: f64,
}

/// Dataset statistics shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct SalesSummary {
    pub total_days: usize,
    pub avg_sales: f64,
    pub max_sales: f64,
    pub min_sales: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Recent-window data for the dashboard chart: parallel label/value arrays.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub sales: Vec<f64>,
}
