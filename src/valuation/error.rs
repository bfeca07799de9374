use thiserror::Error;

/// Why a valuation request was rejected.
///
/// Every variant is produced before the pricing engine runs, so an error never
/// travels together with a partial result. The same input always fails the
/// same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// A field is not a finite real number.
    #[error("Invalid {field}: {value:?} is not a finite number")]
    Parse { field: &'static str, value: String },

    /// Spot, strike, time or volatility is zero or negative.
    #[error("All inputs except rate must be positive")]
    NonPositiveInput { field: &'static str, value: f64 },

    #[error("Rate cannot be negative")]
    NegativeRate { value: f64 },

    /// The curve settings cannot produce a strictly increasing sample range.
    #[error("Invalid sensitivity curve: {0}")]
    InvalidCurve(String),
}

impl ValuationError {
    pub fn invalid_curve(msg: impl Into<String>) -> Self {
        Self::InvalidCurve(msg.into())
    }

    /// True for the three input-validation failures, false for curve settings.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::NonPositiveInput { .. } | Self::NegativeRate { .. }
        )
    }

    /// Name of the offending input field, when the error is about one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Parse { field, .. } | Self::NonPositiveInput { field, .. } => Some(*field),
            Self::NegativeRate { .. } => Some("rate"),
            Self::InvalidCurve(_) => None,
        }
    }
}
