//! Public conversion entry points.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::codepage::to_legacy_bytes;
use crate::error::{EncodeError, ParseEncodingError};
use crate::mapper::map_to_legacy;
use crate::normalize::normalize;
use crate::reorder::{reorder, ReorderFlags};
use crate::tables::{MappingTable, FONT_A, FONT_B};
use crate::unicode::is_malayalam;

/// Target legacy font encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// ML-TT series fonts, e.g. ML-TTKarthika.
    FontA,
    /// FML series fonts, e.g. FML-Revathi.
    FontB,
}

impl Encoding {
    /// The built-in substitution table for this encoding.
    pub fn table(self) -> &'static MappingTable {
        match self {
            Encoding::FontA => &*FONT_A,
            Encoding::FontB => &*FONT_B,
        }
    }

    /// Both font families draw the pre-base vowel signs and the subjoined Ra on the left.
    pub fn default_reorder_flags(self) -> ReorderFlags {
        ReorderFlags::default()
    }
}

impl FromStr for Encoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ml" | "font-a" | "a" => Ok(Encoding::FontA),
            "fml" | "font-b" | "b" => Ok(Encoding::FontB),
            _ => Err(ParseEncodingError(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::FontA => f.write_str("ml"),
            Encoding::FontB => f.write_str("fml"),
        }
    }
}

/// Converts Unicode Malayalam to a legacy encoding with a given table and reordering rules.
#[derive(Copy, Clone, Debug)]
pub struct Converter<'a> {
    table: &'a MappingTable,
    flags: ReorderFlags,
}

impl Converter<'static> {
    /// A converter using the built-in table and default rules of `encoding`.
    pub fn new(encoding: Encoding) -> Self {
        Converter {
            table: encoding.table(),
            flags: encoding.default_reorder_flags(),
        }
    }
}

impl<'a> Converter<'a> {
    /// A converter using a caller supplied table.
    pub fn with_table(table: &'a MappingTable, flags: ReorderFlags) -> Self {
        Converter { table, flags }
    }

    pub fn with_reorder_flags(self, flags: ReorderFlags) -> Self {
        Converter { flags, ..self }
    }

    pub fn reorder_flags(&self) -> ReorderFlags {
        self.flags
    }

    /// Run normalisation, reordering and mapping over `text`.
    ///
    /// Empty and whitespace-only text converts to the empty string.
    pub fn convert(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let normalized = normalize(text);
        let reordered = reorder(&normalized, self.flags);
        map_to_legacy(&reordered, self.table)
    }

    /// Convert `text` and encode the result as single-byte legacy text.
    pub fn convert_to_bytes(&self, text: &str) -> Result<Vec<u8>, EncodeError> {
        to_legacy_bytes(&self.convert(text))
    }
}

/// Convert Unicode Malayalam to Font-A (ML-TT series) text.
pub fn convert_to_font_a(text: &str) -> String {
    convert(text, Encoding::FontA)
}

/// Convert Unicode Malayalam to Font-B (FML series) text.
pub fn convert_to_font_b(text: &str) -> String {
    convert(text, Encoding::FontB)
}

/// Convert Unicode Malayalam to `encoding` with its built-in table and rules.
pub fn convert(text: &str, encoding: Encoding) -> String {
    let output = Converter::new(encoding).convert(text);
    debug!(
        "convert {}: {} chars in, {} chars out",
        encoding,
        text.chars().count(),
        output.chars().count()
    );
    output
}

/// Diagnostic information about a conversion.
///
/// Lengths are counted in Unicode scalar values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    pub input_length: usize,
    pub output_length: usize,
    pub output_text: String,
    /// Number of input characters in the Malayalam block (U+0D00 to U+0D7F).
    pub malayalam_char_count: usize,
}

/// Convert `text` and report statistics about the conversion.
pub fn stats(text: &str, encoding: Encoding) -> Stats {
    let output_text = convert(text, encoding);
    Stats {
        input_length: text.chars().count(),
        output_length: output_text.chars().count(),
        malayalam_char_count: text.chars().filter(|&ch| is_malayalam(ch)).count(),
        output_text,
    }
}
