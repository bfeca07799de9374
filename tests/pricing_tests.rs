
use option_calc::{intermediate_terms, norm_cdf, price_call, price_pair, price_put};
use test_utils::{
    assert_close, random_valid_params, reference_cdf, DEFAULT_PARAMS, TEXTBOOK_PARAMS,
    UNDERFLOW_TOL,
};

/// The normal CDF must agree with the statrs reference to 1e-8 across the
/// whole range where it is not saturated.
#[test]
fn test_norm_cdf_matches_reference() {
    let mut x = -8.0;
    while x <= 8.0 {
        assert_close(norm_cdf(x), reference_cdf(x), 1e-8, &format!("Φ({})", x));
        x += 0.01;
    }
}

/// Known-value scenario for the calculator's default inputs.
#[test]
fn test_default_inputs_known_values() {
    let (s, k, t, r, v) = DEFAULT_PARAMS;
    let terms = intermediate_terms(s, k, t, r, v);
    assert_close(terms.d1, 1.0736, 0.01, "d1");
    assert_close(terms.d2, 0.8899, 0.01, "d2");
    assert_close(price_call(s, k, t, r, v), 8.9736, 0.05, "call");
    assert_close(price_put(s, k, t, r, v), 0.7220, 0.05, "put");
}

#[test]
fn test_textbook_known_values() {
    let (s, k, t, r, v) = TEXTBOOK_PARAMS;
    assert_close(price_call(s, k, t, r, v), 10.4506, 1e-4, "call");
    assert_close(price_put(s, k, t, r, v), 5.5735, 1e-4, "put");
}

/// Prices are never negative for valid inputs.
#[test]
fn test_prices_non_negative() {
    for (s, k, t, r, v) in random_valid_params(7, 5_000) {
        let call = price_call(s, k, t, r, v);
        let put = price_put(s, k, t, r, v);
        assert!(call >= -UNDERFLOW_TOL, "negative call {} for {:?}", call, (s, k, t, r, v));
        assert!(put >= -UNDERFLOW_TOL, "negative put {} for {:?}", put, (s, k, t, r, v));
    }
}

/// C - P = S - K·e^(-rT) for every valid input.
#[test]
fn test_put_call_parity() {
    for (s, k, t, r, v) in random_valid_params(11, 5_000) {
        let lhs = price_call(s, k, t, r, v) - price_put(s, k, t, r, v);
        let rhs = s - k * (-r * t).exp();
        assert!(
            (lhs - rhs).abs() < 1e-6,
            "parity violated for {:?}: {} vs {}",
            (s, k, t, r, v),
            lhs,
            rhs
        );
    }
}

/// Call rises and put falls as spot increases, everything else fixed.
#[test]
fn test_monotonic_in_spot() {
    for (_, k, t, r, v) in random_valid_params(23, 200) {
        let mut prev_call = price_call(0.5, k, t, r, v);
        let mut prev_put = price_put(0.5, k, t, r, v);
        for i in 1..400 {
            let s = 0.5 + i as f64 * 1.5;
            let call = price_call(s, k, t, r, v);
            let put = price_put(s, k, t, r, v);
            assert!(call >= prev_call - UNDERFLOW_TOL, "call decreased at spot {} (K={})", s, k);
            assert!(put <= prev_put + UNDERFLOW_TOL, "put increased at spot {} (K={})", s, k);
            prev_call = call;
            prev_put = put;
        }
    }
}

#[test]
fn test_price_pair_consistent_with_single_prices() {
    for (s, k, t, r, v) in random_valid_params(31, 500) {
        let (terms, call, put) = price_pair(s, k, t, r, v);
        assert_eq!(terms, intermediate_terms(s, k, t, r, v));
        assert_eq!(call.to_bits(), price_call(s, k, t, r, v).to_bits());
        assert_eq!(put.to_bits(), price_put(s, k, t, r, v).to_bits());
    }
}

/// Very short expiries converge to intrinsic value.
#[test]
fn test_near_expiry_approaches_intrinsic() {
    let t = 1e-8;
    assert_close(price_call(110.0, 100.0, t, 0.05, 0.2), 10.0, 1e-4, "ITM call");
    assert_close(price_put(110.0, 100.0, t, 0.05, 0.2), 0.0, 1e-4, "OTM put");
    assert_close(price_put(90.0, 100.0, t, 0.05, 0.2), 10.0, 1e-4, "ITM put");
}
