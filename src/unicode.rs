//! Malayalam code points and character classes used by the conversion pipeline.

use std::ops::RangeInclusive;

/// The Malayalam Unicode block.
pub const MALAYALAM_BLOCK: RangeInclusive<char> = '\u{0D00}'..='\u{0D7F}';

/// MALAYALAM SIGN VIRAMA (chandrakkala).
pub const VIRAMA: char = '\u{0D4D}';

/// MALAYALAM LETTER RA.
pub const RA: char = '\u{0D30}';

/// Returns `true` if `ch` lies in the Malayalam Unicode block.
pub fn is_malayalam(ch: char) -> bool {
    MALAYALAM_BLOCK.contains(&ch)
}

/// Returns `true` for the vowel signs that are drawn to the left of the consonant cluster they
/// follow in logical order.
pub fn is_pre_base_vowel_sign(ch: char) -> bool {
    match ch {
        '\u{0D46}' => true, // SIGN E
        '\u{0D47}' => true, // SIGN EE
        '\u{0D48}' => true, // SIGN AI
        _ => false,
    }
}
