use crate::valuation::error::ValuationError;

/// Market parameters as typed by a user, before any parsing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawValuationInput {
    /// Spot price of the underlying
    pub spot: String,
    /// Strike price
    pub strike: String,
    /// Time to expiry in years
    pub time: String,
    /// Continuously compounded risk-free rate (as decimal)
    pub rate: String,
    /// Annualized volatility (as decimal, e.g., 0.15 for 15%)
    pub volatility: String,
}

impl RawValuationInput {
    pub fn new(
        spot: impl Into<String>,
        strike: impl Into<String>,
        time: impl Into<String>,
        rate: impl Into<String>,
        volatility: impl Into<String>,
    ) -> Self {
        Self {
            spot: spot.into(),
            strike: strike.into(),
            time: time.into(),
            rate: rate.into(),
            volatility: volatility.into(),
        }
    }
}

impl Default for RawValuationInput {
    fn default() -> Self {
        Self::new("50", "45", "1.5", "0.05", "0.15")
    }
}

/// A validated set of market parameters.
///
/// Only obtainable through [`ValuationInput::new`] or [`ValuationInput::parse`],
/// so every value of this type lies inside the pricing engine's domain:
/// spot, strike, time and volatility strictly positive, rate non-negative,
/// everything finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValuationInput {
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
}

const FIELD_NAMES: [&str; 5] = ["spot", "strike", "time", "rate", "volatility"];

fn parse_field(field: &'static str, text: &str) -> Result<f64, ValuationError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValuationError::Parse {
            field,
            value: text.to_string(),
        }),
    }
}

/// Checks the numeric rules in order: finiteness, positivity, then the rate sign.
fn validate_valuation_input(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> Result<(), ValuationError> {
    let values = [spot, strike, time, rate, volatility];
    for (field, value) in FIELD_NAMES.into_iter().zip(values) {
        if !value.is_finite() {
            return Err(ValuationError::Parse {
                field,
                value: value.to_string(),
            });
        }
    }

    for (field, value) in [
        ("spot", spot),
        ("strike", strike),
        ("time", time),
        ("volatility", volatility),
    ] {
        if value <= 0.0 {
            return Err(ValuationError::NonPositiveInput { field, value });
        }
    }

    if rate < 0.0 {
        return Err(ValuationError::NegativeRate { value: rate });
    }

    Ok(())
}

impl ValuationInput {
    /// Creates a validated input from numeric fields.
    pub fn new(
        spot: f64,
        strike: f64,
        time: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, ValuationError> {
        validate_valuation_input(spot, strike, time, rate, volatility)?;

        Ok(Self {
            spot,
            strike,
            time,
            rate,
            volatility,
        })
    }

    /// Parses all five text fields, then validates the numbers.
    ///
    /// Parsing finishes for every field before any range rule is applied, so a
    /// malformed volatility is reported even when the spot is negative.
    pub fn parse(raw: &RawValuationInput) -> Result<Self, ValuationError> {
        let spot = parse_field("spot", &raw.spot)?;
        let strike = parse_field("strike", &raw.strike)?;
        let time = parse_field("time", &raw.time)?;
        let rate = parse_field("rate", &raw.rate)?;
        let volatility = parse_field("volatility", &raw.volatility)?;
        Self::new(spot, strike, time, rate, volatility)
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Same parameters with a different spot; the new spot is validated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, ValuationError> {
        Self::new(spot, self.strike, self.time, self.rate, self.volatility)
    }
}

impl TryFrom<&RawValuationInput> for ValuationInput {
    type Error = ValuationError;

    fn try_from(raw: &RawValuationInput) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

/// Scalar outcome of a single valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationResult {
    /// Black-Scholes call premium
    pub call_price: f64,
    /// Black-Scholes put premium
    pub put_price: f64,
    pub d1: f64,
    pub d2: f64,
}

/// Call and put value sampled across a range of underlying prices.
///
/// The three sequences have equal length and `underlying_samples` is strictly
/// increasing. `strike` and `spot` are carried along for reference lines.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityCurve {
    pub underlying_samples: Vec<f64>,
    pub call_values: Vec<f64>,
    pub put_values: Vec<f64>,
    /// Strike held fixed while sampling
    pub strike: f64,
    /// Spot of the input the curve was built around
    pub spot: f64,
}

impl SensitivityCurve {
    pub fn len(&self) -> usize {
        self.underlying_samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.underlying_samples.is_empty()
    }

    /// First and last sampled underlying price.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((
            *self.underlying_samples.first()?,
            *self.underlying_samples.last()?,
        ))
    }

    /// Iterate `(underlying, call, put)` rows in ascending underlying order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.underlying_samples
            .iter()
            .zip(&self.call_values)
            .zip(&self.put_values)
            .map(|((&x, &call), &put)| (x, call, put))
    }
}
