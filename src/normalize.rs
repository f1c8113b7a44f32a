//! Canonicalisation of Unicode Malayalam text prior to reordering.
//!
//! Malayalam text found in the wild encodes the same visual syllable in several ways: old
//! chillu sequences using ZERO WIDTH JOINER, vowel signs typed in visual order, doubled signs
//! and so on. The legacy fonts only have one glyph sequence for each syllable, so all of these
//! are folded into a single form here.

/// Literal rewrites, applied in order over the whole string. Where two rules overlap the earlier
/// one wins.
#[rustfmt::skip]
const REWRITE_RULES: &[(&str, &str)] = &[
    // Orthographic corrections
    ("\u{0D7B}\u{0D31}", "\u{0D28}\u{0D4D}\u{0D31}"),          // chillu N, RRA -> NTA conjunct
    ("\u{0D28}\u{0D4D}\u{200D}\u{0D2A}", "\u{0D2E}\u{0D4D}\u{0D2A}"), // NA, VIRAMA, ZWJ, PA -> MPA
    ("\u{0D31}\u{0D31}", "\u{0D31}\u{0D4D}\u{0D31}"),          // RRA, RRA -> TTA conjunct
    // Chillu letters written with VIRAMA, ZWJ
    ("\u{0D31}\u{0D4D}\u{200D}", "\u{0D7C}"),                  // chillu RR
    ("\u{0D23}\u{0D4D}\u{200D}", "\u{0D7A}"),                  // chillu NN
    ("\u{0D28}\u{0D4D}\u{200D}", "\u{0D7B}"),                  // chillu N
    ("\u{0D30}\u{0D4D}\u{200D}", "\u{0D7C}"),                  // chillu RR
    ("\u{0D32}\u{0D4D}\u{200D}", "\u{0D7D}"),                  // chillu L
    ("\u{0D33}\u{0D4D}\u{200D}", "\u{0D7E}"),                  // chillu LL
    ("\u{0D15}\u{0D4D}\u{200D}", "\u{0D7F}"),                  // chillu K
    // Doubled and visually ordered vowel signs
    ("\u{0D46}\u{0D46}", "\u{0D48}"),                          // E, E -> AI
    ("\u{0D46}\u{0D3E}", "\u{0D4A}"),                          // E, AA -> O
    ("\u{0D3E}\u{0D46}", "\u{0D4A}"),                          // AA, E -> O
    ("\u{0D47}\u{0D3E}", "\u{0D4B}"),                          // EE, AA -> OO
    ("\u{0D3E}\u{0D47}", "\u{0D4B}"),                          // AA, EE -> OO
    ("\u{0D46}\u{0D57}", "\u{0D4C}"),                          // E, AU length mark -> AU
    ("\u{0D57}\u{0D46}", "\u{0D4C}"),                          // AU length mark, E -> AU
    // Independent vowels built from two code points
    ("\u{0D0E}\u{0D46}", "\u{0D10}"),                          // E, sign E -> AI
    ("\u{0D07}\u{0D57}", "\u{0D08}"),                          // I, AU length mark -> II
    ("\u{0D09}\u{0D57}", "\u{0D0A}"),                          // U, AU length mark -> UU
    ("\u{0D12}\u{0D57}", "\u{0D14}"),                          // O, AU length mark -> AU
];

/// Canonicalise `text` for conversion to a legacy encoding.
///
/// Applies the rewrite rules in order and then splits the two-part vowel signs O, OO and AU
/// into their components, since the legacy fonts draw the parts on either side of the base.
/// A rule can create the input of an earlier one (the ZWJ chillu N before RRA, or a doubled E
/// sign exposed by a split) so the passes repeat until the text stops changing.
pub fn normalize(text: &str) -> String {
    let mut text = normalize_pass(text);
    loop {
        let next = normalize_pass(&text);
        if next == text {
            return text;
        }
        text = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let mut text = text.to_owned();
    for &(from, to) in REWRITE_RULES {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }
    decompose_vowel_signs(&text)
}

fn decompose_vowel_signs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match split_vowel_sign(ch) {
            Some((c1, c2)) => {
                out.push(c1);
                out.push(c2);
            }
            None => out.push(ch),
        }
    }
    out
}

fn split_vowel_sign(ch: char) -> Option<(char, char)> {
    match ch {
        '\u{0D4A}' => Some(('\u{0D46}', '\u{0D3E}')),
        '\u{0D4B}' => Some(('\u{0D47}', '\u{0D3E}')),
        '\u{0D4C}' => Some(('\u{0D46}', '\u{0D57}')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalize {
        use super::*;

        #[test]
        fn test_empty() {
            assert_eq!(normalize(""), "");
        }

        #[test]
        fn test_non_malayalam_unchanged() {
            let text = "Hello, world! 123";
            assert_eq!(normalize(text), text);
        }

        #[test]
        fn test_split_o() {
            assert_eq!(normalize("\u{0D15}\u{0D4A}"), "\u{0D15}\u{0D46}\u{0D3E}");
        }

        #[test]
        fn test_split_oo() {
            assert_eq!(normalize("\u{0D15}\u{0D4B}"), "\u{0D15}\u{0D47}\u{0D3E}");
        }

        #[test]
        fn test_split_au() {
            assert_eq!(normalize("\u{0D15}\u{0D4C}"), "\u{0D15}\u{0D46}\u{0D57}");
        }

        #[test]
        fn test_visual_order_o() {
            // AA typed before E
            assert_eq!(
                normalize("\u{0D15}\u{0D3E}\u{0D46}"),
                "\u{0D15}\u{0D46}\u{0D3E}"
            );
        }

        #[test]
        fn test_visual_order_au() {
            assert_eq!(
                normalize("\u{0D15}\u{0D57}\u{0D46}"),
                "\u{0D15}\u{0D46}\u{0D57}"
            );
        }

        #[test]
        fn test_doubled_e_sign() {
            assert_eq!(normalize("\u{0D15}\u{0D46}\u{0D46}"), "\u{0D15}\u{0D48}");
        }

        #[test]
        fn test_joiner_chillu() {
            assert_eq!(normalize("\u{0D28}\u{0D4D}\u{200D}"), "\u{0D7B}");
            assert_eq!(normalize("\u{0D23}\u{0D4D}\u{200D}"), "\u{0D7A}");
            assert_eq!(normalize("\u{0D30}\u{0D4D}\u{200D}"), "\u{0D7C}");
            assert_eq!(normalize("\u{0D31}\u{0D4D}\u{200D}"), "\u{0D7C}");
            assert_eq!(normalize("\u{0D32}\u{0D4D}\u{200D}"), "\u{0D7D}");
            assert_eq!(normalize("\u{0D33}\u{0D4D}\u{200D}"), "\u{0D7E}");
            assert_eq!(normalize("\u{0D15}\u{0D4D}\u{200D}"), "\u{0D7F}");
        }

        #[test]
        fn test_joiner_chillu_before_pa() {
            // The old NA chillu followed by PA is the MPA conjunct.
            assert_eq!(
                normalize("\u{0D28}\u{0D4D}\u{200D}\u{0D2A}"),
                "\u{0D2E}\u{0D4D}\u{0D2A}"
            );
        }

        #[test]
        fn test_chillu_n_rra() {
            assert_eq!(normalize("\u{0D7B}\u{0D31}"), "\u{0D28}\u{0D4D}\u{0D31}");
        }

        #[test]
        fn test_double_rra() {
            assert_eq!(normalize("\u{0D31}\u{0D31}"), "\u{0D31}\u{0D4D}\u{0D31}");
        }

        #[test]
        fn test_independent_vowels() {
            assert_eq!(normalize("\u{0D0E}\u{0D46}"), "\u{0D10}");
            assert_eq!(normalize("\u{0D07}\u{0D57}"), "\u{0D08}");
            assert_eq!(normalize("\u{0D09}\u{0D57}"), "\u{0D0A}");
            assert_eq!(normalize("\u{0D12}\u{0D57}"), "\u{0D14}");
        }

        #[test]
        fn test_joiner_chillu_n_before_rra() {
            // NA, VIRAMA, ZWJ, RRA, SIGN E
            assert_eq!(
                normalize("\u{0D28}\u{0D4D}\u{200D}\u{0D31}\u{0D46}"),
                "\u{0D28}\u{0D4D}\u{0D31}\u{0D46}"
            );
        }

        #[test]
        fn test_e_sign_before_o() {
            // The split exposes a doubled E sign.
            assert_eq!(
                normalize("\u{0D15}\u{0D46}\u{0D4A}"),
                "\u{0D15}\u{0D48}\u{0D3E}"
            );
        }

        #[test]
        fn test_idempotent() {
            let words = [
                "\u{0D2E}\u{0D32}\u{0D2F}\u{0D3E}\u{0D33}\u{0D02}", // മലയാളം
                "\u{0D15}\u{0D4A}\u{0D1F}\u{0D41}\u{0D15}\u{0D4D}\u{0D15}\u{0D41}\u{0D15}",
                "\u{0D2A}\u{0D4C}\u{0D30}\u{0D7B}",                 // പൌരൻ
                "\u{0D35}\u{0D47}\u{0D23}\u{0D4D}\u{0D1F}\u{0D3F}", // വേണ്ടി
                "\u{0D28}\u{0D4D}\u{0D31}\u{0D46}",                 // ന്റെ
                "\u{0D06}\u{0D28}\u{0D4B}\u{0D1F}\u{0D4D}\u{0D1F}", // ആനോട്ട
                "\u{0D28}\u{0D4D}\u{200D}\u{0D31}",
                "\u{0D15}\u{0D46}\u{0D4A}",
                "\u{0D31}\u{0D31}\u{0D31}",
                "\u{0D3E}\u{0D46}\u{0D47}\u{0D48}",
            ];
            for word in words.iter() {
                let once = normalize(word);
                assert_eq!(normalize(&once), once, "{:?}", word);
            }
        }
    }
}
