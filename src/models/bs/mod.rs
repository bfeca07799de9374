// Closed-form Black-Scholes valuation of European calls and puts.
//
// The functions here assume a valid domain (spot, strike, time and volatility
// strictly positive). Nothing is clamped: outside that domain they return NaN
// or infinities, and the request handler in `crate::valuation` is what keeps
// callers inside it.

/// Standardized intermediate terms shared by the call and put formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntermediateTerms {
    pub d1: f64,
    pub d2: f64,
}

/// Standard normal cumulative distribution function.
///
/// Evaluated as `0.5 * erfc(-x / sqrt(2))` so that the lower tail keeps full
/// relative precision instead of cancelling against 1.0.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Compute `d1` and `d2` for the given market parameters.
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 − σ·√T
/// ```
pub fn intermediate_terms(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> IntermediateTerms {
    let sigma_sqrt_t = volatility * time.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * time) / sigma_sqrt_t;
    IntermediateTerms {
        d1,
        d2: d1 - sigma_sqrt_t,
    }
}

#[inline]
fn discounted_strike(strike: f64, time: f64, rate: f64) -> f64 {
    strike * (-rate * time).exp()
}

#[inline]
fn call_from_terms(spot: f64, strike_pv: f64, terms: &IntermediateTerms) -> f64 {
    spot * norm_cdf(terms.d1) - strike_pv * norm_cdf(terms.d2)
}

#[inline]
fn put_from_terms(spot: f64, strike_pv: f64, terms: &IntermediateTerms) -> f64 {
    strike_pv * norm_cdf(-terms.d2) - spot * norm_cdf(-terms.d1)
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn price_call(spot: f64, strike: f64, time: f64, rate: f64, volatility: f64) -> f64 {
    let terms = intermediate_terms(spot, strike, time, rate, volatility);
    call_from_terms(spot, discounted_strike(strike, time, rate), &terms)
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn price_put(spot: f64, strike: f64, time: f64, rate: f64, volatility: f64) -> f64 {
    let terms = intermediate_terms(spot, strike, time, rate, volatility);
    put_from_terms(spot, discounted_strike(strike, time, rate), &terms)
}

/// Price both legs from a single evaluation of `d1`/`d2` and the discount factor.
///
/// Returns `(terms, call, put)`. The prices are bit-identical to calling
/// [`price_call`] and [`price_put`] separately.
pub fn price_pair(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> (IntermediateTerms, f64, f64) {
    let terms = intermediate_terms(spot, strike, time, rate, volatility);
    let strike_pv = discounted_strike(strike, time, rate);
    let call = call_from_terms(spot, strike_pv, &terms);
    let put = put_from_terms(spot, strike_pv, &terms);
    (terms, call, put)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf_symmetry_and_center() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        for &x in &[0.1, 0.5, 1.0, 2.5, 4.0] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-14);
        }
        // Lower tail stays strictly positive and accurate far out
        let tail = norm_cdf(-10.0);
        assert!(tail > 0.0 && (tail / 7.619853024160593e-24 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_textbook_atm_values() {
        let call = price_call(100.0, 100.0, 1.0, 0.05, 0.2);
        let put = price_put(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!((call - 10.450583572185565).abs() < 1e-8, "call = {}", call);
        assert!((put - 5.573526022256971).abs() < 1e-8, "put = {}", put);
    }

    #[test]
    fn test_intermediate_terms() {
        let terms = intermediate_terms(50.0, 45.0, 1.5, 0.05, 0.15);
        assert!((terms.d1 - 1.073614161147548).abs() < 1e-10);
        assert!((terms.d2 - 0.8899024304388097).abs() < 1e-10);
        assert!((terms.d1 - terms.d2 - 0.15 * 1.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_price_pair_matches_single_functions() {
        let (terms, call, put) = price_pair(50.0, 45.0, 1.5, 0.05, 0.15);
        assert_eq!(terms, intermediate_terms(50.0, 45.0, 1.5, 0.05, 0.15));
        assert_eq!(call.to_bits(), price_call(50.0, 45.0, 1.5, 0.05, 0.15).to_bits());
        assert_eq!(put.to_bits(), price_put(50.0, 45.0, 1.5, 0.05, 0.15).to_bits());
    }

    #[test]
    fn test_zero_rate_parity() {
        // With r = 0 parity reduces to C - P = S - K
        let call = price_call(80.0, 90.0, 0.5, 0.0, 0.3);
        let put = price_put(80.0, 90.0, 0.5, 0.0, 0.3);
        assert!((call - put - (80.0 - 90.0)).abs() < 1e-10);
    }

    #[test]
    fn test_outside_domain_is_not_finite() {
        assert!(price_call(45.0, 45.0, 0.0, 0.05, 0.15).is_nan());
        assert!(price_put(-1.0, 45.0, 1.0, 0.05, 0.15).is_nan());
    }
}
