// WASM bindings for numwords.
//
// Provides a `WasmConverter` class exported via wasm-bindgen that wraps
// `numwords::Converter`. Structured results (regions, tokens) are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const conv = new WasmConverter("all");
//   conv.convert("cent cinq");                      // => 105
//   conv.convert("il y a cent ans");                // => "il y a 100 ans"
//   conv.convert("deu malle conq", { fuzzy: true }); // => 2005
//   conv.regions("un deux");   // => [{ text: "un", start: 0, end: 2, value: "1" }, ...]
//   conv.tokens("vingt-cinq"); // => [{ index: 0, text: "vingt", key: "vingt", ... }, ...]
//   conv.correct("malle");     // => "mille"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use numwords::rewrite::Resolution;
use numwords::{ConvertOptions, Conversion, Converter, Lexicon, LexiconError};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a region with its evaluated value.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRegion {
    text: String,
    start: usize,
    end: usize,
    point_reached: bool,
    /// Decimal rendering of the value, `null` when left unchanged.
    value: Option<String>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn lexicon_error_to_js(e: LexiconError) -> JsError {
    JsError::new(&e.to_string())
}

/// Read conversion options from a JS object; `undefined` and `null` give
/// the defaults.
fn options_from_js(options: JsValue) -> Result<ConvertOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ConvertOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))
}

/// A whole-input number becomes a JS number, anything else a string.
fn conversion_to_js(conversion: Conversion) -> JsValue {
    match conversion {
        Conversion::Number(n) => JsValue::from_f64(n.as_f64()),
        Conversion::Text(t) => JsValue::from_str(&t),
    }
}

// ============================================================================
// WasmConverter
// ============================================================================

/// Number-word converter for WebAssembly.
#[wasm_bindgen]
pub struct WasmConverter {
    converter: Converter,
}

#[wasm_bindgen]
impl WasmConverter {
    /// Create a converter for a built-in language ("en", "fr" or "all",
    /// the default).
    #[wasm_bindgen(constructor)]
    pub fn new(language: Option<String>) -> Result<WasmConverter, JsError> {
        let converter = Converter::for_language(language.as_deref().unwrap_or("all"))
            .map_err(lexicon_error_to_js)?;
        Ok(WasmConverter { converter })
    }

    /// Create a converter from a JSON lexicon.
    #[wasm_bindgen(js_name = "fromLexicon")]
    pub fn from_lexicon(json: &str) -> Result<WasmConverter, JsError> {
        let lexicon = Lexicon::from_json(json).map_err(lexicon_error_to_js)?;
        let converter = Converter::from_lexicon(&lexicon).map_err(lexicon_error_to_js)?;
        Ok(WasmConverter { converter })
    }

    /// Convert number words in `text`.
    ///
    /// Returns a number when the whole text is one number phrase, otherwise
    /// the text with every number phrase replaced by digits.
    pub fn convert(&self, text: &str, options: JsValue) -> Result<JsValue, JsError> {
        let options = options_from_js(options)?;
        Ok(conversion_to_js(self.converter.convert(text, &options)))
    }

    /// Find the number regions of `text`, each with its evaluated value.
    ///
    /// Offsets are UTF-8 byte offsets.
    pub fn regions(&self, text: &str, options: JsValue) -> Result<JsValue, JsError> {
        let options = options_from_js(options)?;
        let js_regions: Vec<JsRegion> = self
            .converter
            .regions(text, &options)
            .into_iter()
            .map(|region| {
                let value = match self.converter.evaluate(&region) {
                    Resolution::Value(n) => Some(n.to_string()),
                    Resolution::Unchanged => None,
                };
                JsRegion {
                    text: region.text,
                    start: region.start,
                    end: region.end,
                    point_reached: region.point_reached,
                    value,
                }
            })
            .collect();
        serde_wasm_bindgen::to_value(&js_regions).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Tokenize `text`, with fuzzy-corrected keys when requested.
    pub fn tokens(&self, text: &str, options: JsValue) -> Result<JsValue, JsError> {
        let options = options_from_js(options)?;
        let tokens = self.converter.tokens(text, &options);
        serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Nearest number word to `word`, or null for an empty vocabulary.
    pub fn correct(&self, word: &str) -> Option<String> {
        self.converter.correct(word).map(str::to_string)
    }

    /// Every word the converter recognizes.
    pub fn vocabulary(&self) -> Vec<String> {
        self.converter.grammar().vocabulary().to_vec()
    }
}
