// numwords-core: shared types and text utilities.
//
// - `character`: character classes, accent folding, lookup keys
// - `enums`: lexical word classes
// - `token`: tokens and number regions with byte offsets
// - `value`: numbers and conversion results

pub mod character;
pub mod enums;
pub mod token;
pub mod value;

pub use enums::WordClass;
pub use token::{Region, Token};
pub use value::{Conversion, Decimal, Number};
