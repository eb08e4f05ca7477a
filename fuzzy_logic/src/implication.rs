use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;

/// Pointwise formula used to evaluate `a -> b`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImplicationType {
    #[serde(rename = "algebraic_product")]
    AlgebraicProduct,
    #[default]
    #[serde(rename = "minimum")]
    Minimum,
    #[serde(rename = "zadeh_arithmetic")]
    ZadehArithmetic,
    #[serde(rename = "zadeh_max_min")]
    ZadehMaxMin,
}

impl ImplicationType {
    pub const ALL: [ImplicationType; 4] = [
        ImplicationType::AlgebraicProduct,
        ImplicationType::Minimum,
        ImplicationType::ZadehArithmetic,
        ImplicationType::ZadehMaxMin,
    ];

    /// Evaluate the implication for an antecedent degree `a` and a consequent degree `b`.
    /// The result never exceeds 1.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::AlgebraicProduct => a * b,
            Self::Minimum => a.min(b),
            Self::ZadehArithmetic => 1f64.min(1.0 - a + b),
            Self::ZadehMaxMin => (1.0 - a).max(b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AlgebraicProduct => "algebraic_product",
            Self::Minimum => "minimum",
            Self::ZadehArithmetic => "zadeh_arithmetic",
            Self::ZadehMaxMin => "zadeh_max_min",
        }
    }
}

impl fmt::Display for ImplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImplicationType {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| FuzzyError::UnknownImplication(s.to_string()))
    }
}
