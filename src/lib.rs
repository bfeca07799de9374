//! # Option-Calc: Black-Scholes Valuation of European Options
//!
//! `option-calc` prices European calls and puts with the closed-form
//! Black-Scholes model and samples how those prices move with the underlying,
//! ready for plotting.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: call and put premiums plus the intermediate `d1`/`d2` terms
//! - **Input Validation**: text or numeric fields checked before any pricing happens
//! - **Sensitivity Curves**: call/put value against underlying price over a configurable window
//! - **Presentation**: display labels and an SVG chart renderer (feature `plot`)
//!
//! ## Quick Start
//!
//! ```rust
//! use option_calc::{build_sensitivity_curve, evaluate, RawValuationInput, ValuationInput};
//!
//! let raw = RawValuationInput::new("50", "45", "1.5", "0.05", "0.15");
//! let result = evaluate(&raw)?;
//! println!("{}", result); // df: 1.0736  dd: 0.8899  Call: $8.97  Put: $0.72
//!
//! let input = ValuationInput::parse(&raw)?;
//! let curve = build_sensitivity_curve(&input, 150)?;
//! assert_eq!(curve.len(), 150);
//! # Ok::<(), option_calc::ValuationError>(())
//! ```
//!
//! ## Validation Rules
//!
//! Checked in order, the first failure wins:
//! 1. Every field must parse as a finite number ([`ValuationError::Parse`])
//! 2. Spot, strike, time and volatility must be positive ([`ValuationError::NonPositiveInput`])
//! 3. Rate must not be negative ([`ValuationError::NegativeRate`])
//!
//! ## Curve Presets
//!
//! - `standard()`: 150 samples over `[max(0.05, spot - 25), spot + 25]`
//! - `coarse()`: 50 samples, same window
//! - `fine()`: 500 samples, same window

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod presentation;
pub mod valuation;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Request handling
pub use valuation::{
    build_sensitivity_curve, build_sensitivity_curve_with_config, evaluate, evaluate_input,
    evaluate_values,
};

// Value types and configuration
pub use valuation::{
    CurveConfig, RawValuationInput, SensitivityCurve, ValuationError, ValuationInput,
    ValuationResult, DEFAULT_SAMPLE_COUNT,
};

// Pricing engine
pub use models::bs::{
    intermediate_terms, norm_cdf, price_call, price_pair, price_put, IntermediateTerms,
};

pub use presentation::ResultLabels;

#[cfg(feature = "plot")]
pub use presentation::{render_svg, ChartStyle};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sensitivity curve settings.
///
/// All presets share the same ±25 window around spot and the 0.05 floor; they
/// differ only in how densely the window is sampled.
pub mod default_configs {
    use crate::valuation::config::CurveConfig;

    /// 150 samples, the resolution of the interactive chart.
    ///
    /// # Example
    ///
    /// ```rust
    /// use option_calc::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.sample_count, 150);
    /// ```
    pub fn standard() -> CurveConfig {
        CurveConfig::standard()
    }

    /// 50 samples for quick previews and tests.
    pub fn coarse() -> CurveConfig {
        CurveConfig::coarse()
    }

    /// 500 samples for publication-quality charts.
    pub fn fine() -> CurveConfig {
        CurveConfig::fine()
    }
}
