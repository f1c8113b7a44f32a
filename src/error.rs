//! Error types

use std::fmt;

/// Error returned when building a `MappingTable` from user supplied entries
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TableError {
    EmptyKey,
    DuplicateKey(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::EmptyKey => write!(f, "mapping table key is empty"),
            TableError::DuplicateKey(key) => {
                write!(f, "duplicate mapping table key {}", DisplayCodePoints(key))
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Error returned when converted text cannot be written as single-byte legacy text
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum EncodeError {
    Unmappable(char),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Unmappable(ch) => write!(
                f,
                "character {} has no single-byte representation",
                DisplayCodePoints(&ch.to_string())
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Error returned when parsing an `Encoding` name
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEncodingError(pub String);

impl fmt::Display for ParseEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown legacy encoding '{}'", self.0)
    }
}

impl std::error::Error for ParseEncodingError {}

/// Wrapper type for displaying text as a sequence of `U+XXXX` code points.
pub struct DisplayCodePoints<'a>(pub &'a str);

impl fmt::Display for DisplayCodePoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ch) in self.0.chars().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "U+{:04X}", u32::from(ch))?;
        }
        Ok(())
    }
}
