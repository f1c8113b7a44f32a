//! Single-byte serialisation of legacy font text.
//!
//! The ML-TT and FML fonts are 8-bit Windows fonts: their glyphs sit at Windows-1252 code
//! positions, so converted text is written out with that code page.

use encoding_rs::{EncoderResult, WINDOWS_1252};

use crate::error::EncodeError;

/// Encode converted text as Windows-1252 bytes.
///
/// Fails with `EncodeError::Unmappable` on the first character that has no byte in the code
/// page, e.g. a Malayalam code point that no table entry covered.
pub fn to_legacy_bytes(text: &str) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = WINDOWS_1252.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 1024];
    let mut src = text;

    loop {
        let (res, read, written) =
            encoder.encode_from_utf8_without_replacement(src, &mut buf, true);
        out.extend_from_slice(&buf[..written]);
        src = &src[read..];
        match res {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(ch) => return Err(EncodeError::Unmappable(ch)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{FONT_A, FONT_B};

    #[test]
    fn test_ascii() {
        assert_eq!(to_legacy_bytes("sI").unwrap(), b"sI".to_vec());
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_legacy_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_upper_half() {
        assert_eq!(to_legacy_bytes("s\u{00A1}").unwrap(), vec![0x73, 0xA1]);
        // Windows-1252 specific positions
        assert_eq!(to_legacy_bytes("\u{20AC}").unwrap(), vec![0x80]);
        assert_eq!(
            to_legacy_bytes("\u{0160}\u{0161}").unwrap(),
            vec![0x8A, 0x9A]
        );
        assert_eq!(
            to_legacy_bytes("\u{0152}\u{0153}\u{0178}").unwrap(),
            vec![0x8C, 0x9C, 0x9F]
        );
    }

    #[test]
    fn test_unmappable() {
        assert_eq!(
            to_legacy_bytes("I\u{0D15}"),
            Err(EncodeError::Unmappable('\u{0D15}'))
        );
    }

    #[test]
    fn test_long_input() {
        let text = "\u{00E6}".repeat(5000);
        let bytes = to_legacy_bytes(&text).unwrap();
        assert_eq!(bytes.len(), 5000);
        assert!(bytes.iter().all(|&b| b == 0xE6));
    }

    #[test]
    fn test_table_values_are_encodable() {
        for table in [&*FONT_A, &*FONT_B].iter() {
            for (key, value) in table.iter() {
                assert!(to_legacy_bytes(value).is_ok(), "{:?} -> {:?}", key, value);
            }
        }
    }
}
