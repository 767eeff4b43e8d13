use std::path::Path;

use anyhow::{ensure, Context};
use serde::Deserialize;

/// Min-max scaler parameters exported by the training pipeline.
///
/// Maps raw sales onto [0, 1] over the range seen during fitting. Values
/// outside that range extrapolate linearly and are not corrected here.
#[derive(Debug, Clone, Deserialize)]
pub struct MinMaxScaler {
    data_min: f64,
    data_max: f64,
}

impl MinMaxScaler {
    pub fn new(data_min: f64, data_max: f64) -> anyhow::Result<Self> {
        ensure!(
            data_min.is_finite() && data_max.is_finite(),
            "scaler bounds must be finite"
        );
        ensure!(
            data_max > data_min,
            "scaler range is degenerate: min {data_min}, max {data_max}"
        );
        Ok(Self { data_min, data_max })
    }

    pub fn transform(&self, raw: f64) -> f64 {
        (raw - self.data_min) / (self.data_max - self.data_min)
    }

    pub fn inverse(&self, scaled: f64) -> f64 {
        scaled * (self.data_max - self.data_min) + self.data_min
    }
}

/// Load scaler parameters from their JSON artifact and validate them.
pub fn load_scaler(path: &Path) -> anyhow::Result<MinMaxScaler> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading scaler artifact {}", path.display()))?;
    let parsed: MinMaxScaler = serde_json::from_str(&raw)
        .with_context(|| format!("parsing scaler artifact {}", path.display()))?;
    MinMaxScaler::new(parsed.data_min, parsed.data_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_roundtrip_within_tolerance() {
        let scaler = MinMaxScaler::new(120.5, 9876.25).unwrap();
        for raw in [120.5, 500.0, 1234.56, 4321.0, 9876.25] {
            let back = scaler.inverse(scaler.transform(raw));
            assert!((back - raw).abs() < 1e-6, "roundtrip drifted: {raw} -> {back}");
        }
    }

    #[test]
    fn test_maps_fitted_range_to_unit_interval() {
        let scaler = MinMaxScaler::new(100.0, 300.0).unwrap();
        assert_eq!(scaler.transform(100.0), 0.0);
        assert_eq!(scaler.transform(300.0), 1.0);
        assert_eq!(scaler.transform(200.0), 0.5);
        assert_eq!(scaler.inverse(0.5), 200.0);
    }

    #[test]
    fn test_rejects_degenerate_range() {
        assert!(MinMaxScaler::new(100.0, 100.0).is_err());
        assert!(MinMaxScaler::new(300.0, 100.0).is_err());
        assert!(MinMaxScaler::new(f64::NAN, 100.0).is_err());
    }

    #[test]
    fn test_load_from_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"data_min": 10.0, "data_max": 1000.0}"#).unwrap();

        let scaler = load_scaler(file.path()).unwrap();
        assert_eq!(scaler.transform(10.0), 0.0);
        assert_eq!(scaler.inverse(1.0), 1000.0);
    }

    #[test]
    fn test_load_rejects_malformed_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(load_scaler(file.path()).is_err());
    }
}
