// Semantic evaluation: NumberTree to Number

use numwords_core::value::{Decimal, Number};

use super::ParseFailure;
use super::parser::{NumberTree, Section};

/// Error type for region evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseFailure),

    /// The value does not fit in 64 bits.
    #[error("number too large")]
    Overflow,
}

impl Section {
    /// Value of the section: sums inside, products with a magnitude.
    pub fn value(&self) -> Result<u64, EvalError> {
        let value = match *self {
            Self::Ten(v) | Self::Unit(v) | Self::Magnitude(v) => Some(v),
            Self::TenAndUnit(ten, unit) => ten.checked_add(unit),
            Self::TenAndMagnitude(ten, magnitude) => ten.checked_mul(magnitude),
            Self::UnitAndMagnitude(unit, magnitude) => unit.checked_mul(magnitude),
            Self::TenUnitAndMagnitude(ten, unit, magnitude) => ten
                .checked_add(unit)
                .and_then(|v| v.checked_mul(magnitude)),
        };
        value.ok_or(EvalError::Overflow)
    }
}

impl NumberTree {
    /// Sum the sections and attach the decimal tail.
    pub fn evaluate(&self) -> Result<Number, EvalError> {
        let mut integer: u64 = 0;
        for section in &self.sections {
            integer = integer
                .checked_add(section.value()?)
                .ok_or(EvalError::Overflow)?;
        }

        // digits concatenate in spoken order: "un quatre" is ".14"
        let fraction: String = self.decimals.iter().map(u64::to_string).collect();
        if !self.point || fraction.is_empty() {
            return Ok(Number::Integer(integer));
        }
        Ok(Number::Decimal(Decimal::new(integer, fraction)))
    }
}
