#![warn(rust_2018_idioms)]

//! Conversion of Unicode Malayalam text to the legacy 8-bit visual encodings used by the ML-TT
//! (Font-A) and FML (Font-B) font families.
//!
//! Conversion runs in three stages: [`normalize`](normalize::normalize) canonicalises the input,
//! [`reorder`](reorder::reorder) moves pre-base vowel signs in front of their consonant
//! cluster, and [`map_to_legacy`](mapper::map_to_legacy) substitutes glyph sequences from a
//! [`MappingTable`] using greedy longest match.
//!
//! ```
//! use malayalam_legacy::convert_to_font_a;
//!
//! // KA, SIGN E
//! assert_eq!(convert_to_font_a("\u{0D15}\u{0D46}"), "sI");
//! ```

/// Single-byte serialisation of converted text.
pub mod codepage;
pub mod convert;
pub mod error;
/// Greedy longest-match glyph substitution.
pub mod mapper;
pub mod normalize;
pub mod reorder;
pub mod tables;
pub mod unicode;

pub use crate::convert::{
    convert, convert_to_font_a, convert_to_font_b, stats, Converter, Encoding, Stats,
};
pub use crate::reorder::ReorderFlags;
pub use crate::tables::MappingTable;
