pub mod forecast;
pub mod sales;

pub use forecast::{
    ChartResponse, ForecastPoint, ForecastRequest, ForecastResponse, PredictionResponse,
    SummaryResponse,
};
pub use sales::{ChartData, DailySales, SalesSummary};

/// Two-decimal rounding applied to currency-like values at the API boundary.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
