pub mod config;
pub mod error;
pub mod handler;
pub mod types;

pub use config::{CurveConfig, DEFAULT_SAMPLE_COUNT};
pub use error::ValuationError;
pub use handler::{
    build_sensitivity_curve, build_sensitivity_curve_with_config, evaluate, evaluate_input,
    evaluate_values,
};
pub use types::{RawValuationInput, SensitivityCurve, ValuationInput, ValuationResult};
