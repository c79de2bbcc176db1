// Conversion results: Number, Decimal, Conversion

use std::fmt;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Decimal
// ---------------------------------------------------------------------------

/// A decimal number whose fractional digits are kept as text.
///
/// Spoken decimals are digit sequences ("point zero five"), so the fraction
/// is stored verbatim and leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    integer: u64,
    fraction: String,
}

impl Decimal {
    /// Create a decimal from its integer part and fractional digits.
    pub fn new(integer: u64, fraction: impl Into<String>) -> Self {
        Self {
            integer,
            fraction: fraction.into(),
        }
    }

    /// The integer part.
    pub fn integer(&self) -> u64 {
        self.integer
    }

    /// The fractional digits, without the separator.
    pub fn fraction(&self) -> &str {
        &self.fraction
    }

    /// Floating-point view of the value (may round).
    pub fn as_f64(&self) -> f64 {
        self.to_string()
            .parse()
            .unwrap_or(self.integer as f64)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction.is_empty() {
            write!(f, "{}", self.integer)
        } else {
            write!(f, "{}.{}", self.integer, self.fraction)
        }
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

// ---------------------------------------------------------------------------
// Number
// ---------------------------------------------------------------------------

/// The value of one number phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(u64),
    Decimal(Decimal),
}

impl Number {
    /// Floating-point view of the value.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Decimal(d) => d.as_f64(),
        }
    }

    /// The integer value, if this is an integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Decimal(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self::Integer(n)
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Result of converting a text.
///
/// When the whole input is one number phrase the result is that number;
/// otherwise it is the input with every number phrase replaced by digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Conversion {
    Number(Number),
    Text(String),
}

impl Conversion {
    /// Returns `true` if the whole input was a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// The number, if the whole input was one.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            Self::Text(_) => None,
        }
    }

    /// The rewritten text, if the input was not a single number.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(t) => Some(t),
        }
    }

    /// Integer value of a whole-input number.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    /// Floating-point value of a whole-input number.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<u64> for Conversion {
    fn from(n: u64) -> Self {
        Self::Number(Number::Integer(n))
    }
}

impl From<Number> for Conversion {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Conversion {
    fn from(t: &str) -> Self {
        Self::Text(t.to_string())
    }
}

impl From<String> for Conversion {
    fn from(t: String) -> Self {
        Self::Text(t)
    }
}
