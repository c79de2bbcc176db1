// Rewriter: splice evaluated regions back into the input text

use numwords_core::character::{is_key_noise, is_whitespace};
use numwords_core::token::Region;
use numwords_core::value::{Conversion, Number};

/// What becomes of a region in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Replace the region with this number.
    Value(Number),
    /// Keep the region's original text (parse failure, overflow, helper word).
    Unchanged,
}

/// A region with its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedRegion {
    pub region: Region,
    pub resolution: Resolution,
}

/// Returns `true` if `region` covers all of `text` but surrounding
/// whitespace and punctuation ("cent.", "(cent)").
pub fn spans_whole_input(text: &str, region: &Region) -> bool {
    let edge = |c: char| is_whitespace(c) || is_key_noise(c);
    let leading = text.len() - text.trim_start_matches(edge).len();
    region.start == leading && region.end == text.trim_end_matches(edge).len()
}

/// Build the conversion result of `text`.
///
/// A single region covering the whole input yields its number directly.
/// Otherwise every resolved region is replaced by its numeral, last region
/// first, so the offsets of earlier regions stay valid.
pub fn rewrite(text: &str, regions: &[EvaluatedRegion]) -> Conversion {
    if let [only] = regions {
        if spans_whole_input(text, &only.region) {
            return match &only.resolution {
                Resolution::Value(number) => Conversion::Number(number.clone()),
                Resolution::Unchanged => Conversion::Text(text.to_string()),
            };
        }
    }

    let mut output = text.to_string();
    for evaluated in regions.iter().rev() {
        let Resolution::Value(number) = &evaluated.resolution else {
            continue;
        };
        let range = evaluated.region.start..evaluated.region.end;
        if text.get(range.clone()).is_none() {
            tracing::warn!(?range, "region outside input, left unchanged");
            continue;
        }
        output.replace_range(range, &number.to_string());
    }
    Conversion::Text(output)
}
