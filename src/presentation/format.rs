use std::fmt;

use crate::valuation::types::ValuationResult;

/// Display labels for a valuation, one per field.
///
/// `d1`/`d2` are shown to four decimals under the short names `df`/`dd`;
/// prices are shown as currency with two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLabels {
    pub d1: String,
    pub d2: String,
    pub call: String,
    pub put: String,
}

impl From<&ValuationResult> for ResultLabels {
    fn from(result: &ValuationResult) -> Self {
        Self {
            d1: format!("df: {:.4}", result.d1),
            d2: format!("dd: {:.4}", result.d2),
            call: format!("Call: ${:.2}", result.call_price),
            put: format!("Put: ${:.2}", result.put_price),
        }
    }
}

impl ResultLabels {
    /// Labels in display order.
    pub fn as_array(&self) -> [&str; 4] {
        [
            self.d1.as_str(),
            self.d2.as_str(),
            self.call.as_str(),
            self.put.as_str(),
        ]
    }
}

impl fmt::Display for ResultLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_array().join("  "))
    }
}

impl fmt::Display for ValuationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ResultLabels::from(self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_to_display_precision() {
        let result = ValuationResult {
            call_price: 8.973557794229613,
            put_price: 0.7220146790144986,
            d1: 1.073614161147548,
            d2: 0.8899024304388097,
        };
        let labels = ResultLabels::from(&result);
        assert_eq!(labels.d1, "df: 1.0736");
        assert_eq!(labels.d2, "dd: 0.8899");
        assert_eq!(labels.call, "Call: $8.97");
        assert_eq!(labels.put, "Put: $0.72");
        assert_eq!(
            result.to_string(),
            "df: 1.0736  dd: 0.8899  Call: $8.97  Put: $0.72"
        );
    }
}
