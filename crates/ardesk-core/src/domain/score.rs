use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_RISK_SCORE: u8 = 100;

/// Likelihood of late or non-payment, 0 (safe) to 100 (certain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    pub fn new(value: i64) -> Result<Self, CoreError> {
        if !(0..=i64::from(MAX_RISK_SCORE)).contains(&value) {
            return Err(CoreError::InvalidRiskScore(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RiskScore {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskScore> for u8 {
    fn from(value: RiskScore) -> Self {
        value.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::RiskScore;
    use crate::error::CoreError;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(RiskScore::new(0).unwrap().value(), 0);
        assert_eq!(RiskScore::new(100).unwrap().value(), 100);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(RiskScore::new(101).unwrap_err(), CoreError::InvalidRiskScore(101));
        assert_eq!(RiskScore::new(-1).unwrap_err(), CoreError::InvalidRiskScore(-1));
        assert!(serde_json::from_str::<RiskScore>("140").is_err());
    }
}
