use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::data::SalesSeries;
use crate::models::DailySales;

/// Raw CSV row; only the order date and sale amount are read, any other
/// columns in the export are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Sales")]
    sales: f64,
}

// ISO first, then day-first variants as they appear in the sales export.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y"];

fn parse_order_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Ok(date);
        }
    }
    bail!("unrecognized order date '{raw}'")
}

/// Load the sales CSV and aggregate it to one summed value per calendar day,
/// sorted ascending by date.
pub fn load_dataset(path: &Path) -> anyhow::Result<SalesSeries> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening sales dataset {}", path.display()))?;

    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in reader.deserialize::<RawRecord>() {
        let record = record.context("reading sales dataset row")?;
        let date = parse_order_date(&record.order_date)?;
        *daily.entry(date).or_insert(0.0) += record.sales;
    }

    if daily.is_empty() {
        bail!("sales dataset {} contains no rows", path.display());
    }

    let points = daily
        .into_iter()
        .map(|(date, sales)| DailySales { date, sales })
        .collect();
    Ok(SalesSeries::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_aggregates_and_sorts() {
        let file = write_csv(
            "Order Date,Sales\n\
             2024-01-03,30.0\n\
             2024-01-01,10.0\n\
             2024-01-03,5.0\n\
             2024-01-02,20.0\n",
        );

        let series = load_dataset(file.path()).unwrap();
        assert_eq!(series.len(), 3);

        let points = series.tail(3);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(points[0].sales, 10.0);
        assert_eq!(points[1].sales, 20.0);
        // Duplicate dates are summed.
        assert_eq!(points[2].sales, 35.0);
    }

    #[test]
    fn test_mixed_date_formats() {
        let file = write_csv(
            "Order Date,Sales\n\
             2024-01-01,1.0\n\
             02/01/2024,2.0\n\
             03-01-2024,3.0\n",
        );

        let series = load_dataset(file.path()).unwrap();
        let points = series.tail(3);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(points[2].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let file = write_csv(
            "Row ID,Order Date,Customer,Sales\n\
             1,2024-01-01,Alice,10.5\n\
             2,2024-01-02,Bob,20.25\n",
        );

        let series = load_dataset(file.path()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().sales, 20.25);
    }

    #[test]
    fn test_rejects_empty_dataset() {
        let file = write_csv("Order Date,Sales\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("no rows"));
    }

    #[test]
    fn test_rejects_unrecognized_date() {
        let file = write_csv("Order Date,Sales\nJanuary 1st,10.0\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("unrecognized order date"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_dataset(Path::new("/nonexistent/sales.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sales.csv"));
    }
}
