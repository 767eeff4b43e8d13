use crate::models::{round2, ChartData, DailySales, SalesSummary};

/// Daily-aggregated sales history, sorted ascending by date.
/// Built once at startup and read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct SalesSeries {
    points: Vec<DailySales>,
}

impl SalesSeries {
    /// `points` must be sorted ascending with unique dates; the dataset
    /// loader guarantees this by aggregating through an ordered map.
    pub fn new(points: Vec<DailySales>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<&DailySales> {
        self.points.last()
    }

    /// Strict trailing window of exactly `w` points in ascending date order.
    /// `None` when the series holds fewer than `w` observations.
    pub fn trailing(&self, w: usize) -> Option<&[DailySales]> {
        if self.points.len() < w {
            return None;
        }
        Some(&self.points[self.points.len() - w..])
    }

    /// Lenient tail for display: up to `n` most recent points.
    pub fn tail(&self, n: usize) -> &[DailySales] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Dataset statistics for the dashboard. `None` on an empty series.
    pub fn summary(&self) -> Option<SalesSummary> {
        let first = self.points.first()?;
        let last = self.points.last()?;

        let total: f64 = self.points.iter().map(|p| p.sales).sum();
        let max = self.points.iter().map(|p| p.sales).fold(f64::MIN, f64::max);
        let min = self.points.iter().map(|p| p.sales).fold(f64::MAX, f64::min);

        Some(SalesSummary {
            total_days: self.points.len(),
            avg_sales: round2(total / self.points.len() as f64),
            max_sales: round2(max),
            min_sales: round2(min),
            start_date: first.date,
            end_date: last.date,
        })
    }

    /// Chart payload for the `n` most recent days: ISO date labels plus values.
    pub fn chart_data(&self, n: usize) -> ChartData {
        let recent = self.tail(n);
        ChartData {
            labels: recent.iter().map(|p| p.date.to_string()).collect(),
            sales: recent.iter().map(|p| p.sales).collect(),
        }
    }
}
