// Shared enums: WordClass

use serde::Serialize;

/// Lexical class of a recognized number word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WordClass {
    /// Digits, teens and their ordinals ("deux", "onze", "third").
    Unit,
    /// Tens and their ordinals ("vingt", "twenty", "fortieth").
    Ten,
    /// Scale words ("cent", "thousand", "milliard", "hundredth").
    Magnitude,
    /// Decimal separator ("point", "dot", "virgule").
    Point,
    /// Structural connector carrying no value ("and", "et").
    Connector,
}

impl WordClass {
    /// Returns `true` for the classes that carry a numeric value.
    pub fn has_value(self) -> bool {
        matches!(self, Self::Unit | Self::Ten | Self::Magnitude)
    }

    /// Lowercase label used in diagnostics and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Ten => "ten",
            Self::Magnitude => "magnitude",
            Self::Point => "point",
            Self::Connector => "connector",
        }
    }
}

impl std::fmt::Display for WordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
