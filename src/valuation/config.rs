use crate::valuation::error::ValuationError;

/// Default number of points on a sensitivity curve.
pub const DEFAULT_SAMPLE_COUNT: usize = 150;

/// Sampling window for sensitivity curves.
///
/// The curve spans `[max(floor, spot - half_width), spot + half_width]`. The
/// window is an absolute distance in price units, not a fraction of spot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveConfig {
    /// Number of evenly spaced underlying prices to evaluate
    #[cfg_attr(feature = "serde", serde(default = "default_sample_count"))]
    pub sample_count: usize,

    /// Distance either side of spot covered by the curve
    #[cfg_attr(feature = "serde", serde(default = "default_half_width"))]
    pub half_width: f64,

    /// Lowest underlying price ever sampled; keeps the engine off zero
    #[cfg_attr(feature = "serde", serde(default = "default_floor"))]
    pub floor: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            half_width: default_half_width(),
            floor: default_floor(),
        }
    }
}

impl CurveConfig {
    /// 150 samples over ±25 around spot, floored at 0.05.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Fewer points for quick previews and tests
    pub fn coarse() -> Self {
        Self {
            sample_count: 50,
            ..Self::default()
        }
    }

    /// Dense sampling for high-resolution charts
    pub fn fine() -> Self {
        Self {
            sample_count: 500,
            ..Self::default()
        }
    }

    pub fn with_sample_count(self, sample_count: usize) -> Self {
        Self {
            sample_count,
            ..self
        }
    }

    /// Checks the settings that do not depend on a particular spot.
    pub fn validate(&self) -> Result<(), ValuationError> {
        if self.sample_count == 0 {
            return Err(ValuationError::invalid_curve(
                "sample_count must be at least 1",
            ));
        }
        if !self.half_width.is_finite() || self.half_width <= 0.0 {
            return Err(ValuationError::invalid_curve(format!(
                "half_width (half_width={}) must be > 0 and finite",
                self.half_width
            )));
        }
        if !self.floor.is_finite() || self.floor <= 0.0 {
            return Err(ValuationError::invalid_curve(format!(
                "floor (floor={}) must be > 0 and finite",
                self.floor
            )));
        }
        Ok(())
    }

    /// Sampling range `(lower, upper)` around `spot`.
    pub fn range_for(&self, spot: f64) -> Result<(f64, f64), ValuationError> {
        self.validate()?;
        let lower = self.floor.max(spot - self.half_width);
        let upper = spot + self.half_width;
        if lower >= upper {
            return Err(ValuationError::invalid_curve(format!(
                "empty range: floor {} is not below spot + half_width = {}",
                self.floor, upper
            )));
        }
        Ok((lower, upper))
    }
}

#[cfg(feature = "serde")]
impl CurveConfig {
    /// Parse a config from TOML text; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let config: Self = toml::from_str(text).context("failed to parse curve config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read curve config {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_half_width() -> f64 {
    25.0
}

fn default_floor() -> f64 {
    0.05
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(CurveConfig::standard(), CurveConfig::default());
        assert_eq!(CurveConfig::default().sample_count, 150);
        assert_eq!(CurveConfig::coarse().sample_count, 50);
        assert_eq!(CurveConfig::fine().sample_count, 500);
        assert_eq!(CurveConfig::fine().half_width, 25.0);
    }

    #[test]
    fn test_range_clamps_to_floor() {
        let config = CurveConfig::default();
        assert_eq!(config.range_for(50.0).unwrap(), (25.0, 75.0));
        assert_eq!(config.range_for(10.0).unwrap(), (0.05, 35.0));
    }

    #[test]
    fn test_invalid_settings() {
        assert!(CurveConfig::default().with_sample_count(0).validate().is_err());

        let negative_width = CurveConfig {
            half_width: -1.0,
            ..CurveConfig::default()
        };
        assert!(negative_width.validate().is_err());

        let nan_floor = CurveConfig {
            floor: f64::NAN,
            ..CurveConfig::default()
        };
        assert!(nan_floor.validate().is_err());

        // floor above the whole window
        let narrow = CurveConfig {
            half_width: 0.01,
            floor: 1.0,
            ..CurveConfig::default()
        };
        assert!(matches!(
            narrow.range_for(0.5),
            Err(ValuationError::InvalidCurve(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_defaults_fill_missing_keys() {
        let config = CurveConfig::from_toml_str("sample_count = 300\n").unwrap();
        assert_eq!(config.sample_count, 300);
        assert_eq!(config.half_width, 25.0);
        assert_eq!(config.floor, 0.05);

        let empty = CurveConfig::from_toml_str("").unwrap();
        assert_eq!(empty, CurveConfig::default());

        assert!(CurveConfig::from_toml_str("sample_count = 0").is_err());
        assert!(CurveConfig::from_toml_str("half_width = \"wide\"").is_err());
    }
}
