//! Validation and orchestration between raw inputs and the pricing engine.
//!
//! Everything here is a pure function of its arguments: the same request
//! always yields the same result or the same error, and nothing is cached
//! between calls.

use tracing::{debug, trace};

use crate::models::bs::{price_call, price_pair, price_put};
use crate::valuation::config::CurveConfig;
use crate::valuation::error::ValuationError;
use crate::valuation::types::{
    RawValuationInput, SensitivityCurve, ValuationInput, ValuationResult,
};

/// Parse and validate text fields, then price both options.
pub fn evaluate(raw: &RawValuationInput) -> Result<ValuationResult, ValuationError> {
    let input = ValuationInput::parse(raw).inspect_err(log_rejection)?;
    Ok(evaluate_input(&input))
}

/// Validate numeric fields, then price both options.
pub fn evaluate_values(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> Result<ValuationResult, ValuationError> {
    let input =
        ValuationInput::new(spot, strike, time, rate, volatility).inspect_err(log_rejection)?;
    Ok(evaluate_input(&input))
}

/// Price an input that has already passed validation.
pub fn evaluate_input(input: &ValuationInput) -> ValuationResult {
    let (terms, call_price, put_price) = price_pair(
        input.spot(),
        input.strike(),
        input.time(),
        input.rate(),
        input.volatility(),
    );

    trace!(
        spot = input.spot(),
        strike = input.strike(),
        d1 = terms.d1,
        d2 = terms.d2,
        call_price,
        put_price,
        "valuation complete"
    );

    ValuationResult {
        call_price,
        put_price,
        d1: terms.d1,
        d2: terms.d2,
    }
}

/// Sample call and put values over the default window around spot.
///
/// Uses `sample_count` points spanning `[max(0.05, spot - 25), spot + 25]`.
pub fn build_sensitivity_curve(
    input: &ValuationInput,
    sample_count: usize,
) -> Result<SensitivityCurve, ValuationError> {
    build_sensitivity_curve_with_config(
        input,
        &CurveConfig::default().with_sample_count(sample_count),
    )
}

/// Sample call and put values over the window described by `config`.
///
/// Strike, time, rate and volatility stay fixed at the input's values; only
/// the spot is replaced by each sample. Every point is priced independently.
pub fn build_sensitivity_curve_with_config(
    input: &ValuationInput,
    config: &CurveConfig,
) -> Result<SensitivityCurve, ValuationError> {
    let (lower, upper) = config
        .range_for(input.spot())
        .inspect_err(log_rejection)?;
    let underlying_samples = linspace(lower, upper, config.sample_count);
    if underlying_samples.windows(2).any(|w| w[0] >= w[1]) {
        let err = ValuationError::invalid_curve(format!(
            "{} samples over [{}, {}] are not distinct at f64 precision",
            config.sample_count, lower, upper
        ));
        log_rejection(&err);
        return Err(err);
    }

    let (strike, time, rate, vol) = (
        input.strike(),
        input.time(),
        input.rate(),
        input.volatility(),
    );
    let call_values = underlying_samples
        .iter()
        .map(|&x| price_call(x, strike, time, rate, vol))
        .collect();
    let put_values = underlying_samples
        .iter()
        .map(|&x| price_put(x, strike, time, rate, vol))
        .collect();

    trace!(
        samples = config.sample_count,
        lower,
        upper,
        "sensitivity curve built"
    );

    Ok(SensitivityCurve {
        underlying_samples,
        call_values,
        put_values,
        strike,
        spot: input.spot(),
    })
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
///
/// The last value is exactly `stop`; `n == 1` yields `[start]`.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

fn log_rejection(err: &ValuationError) {
    debug!(field = err.field(), error = %err, "valuation request rejected");
}
