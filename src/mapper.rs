//! Greedy longest-match substitution of reordered text into legacy glyph sequences.

use log::trace;

use crate::tables::MappingTable;
use crate::unicode::is_malayalam;

/// Map `text` to legacy output using `table`.
///
/// At each position the longest key that is a prefix of the remaining text wins. Characters not
/// covered by any key are copied through unchanged.
pub fn map_to_legacy(text: &str, table: &MappingTable) -> String {
    // Byte offset of each char, plus the end of the text, so that any run of chars can be
    // sliced out of `text` without allocating.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let num_chars = offsets.len() - 1;

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < num_chars {
        match longest_match(text, &offsets, i, table) {
            Some((len, value)) => {
                out.push_str(value);
                i += len;
            }
            None => {
                let ch = &text[offsets[i]..offsets[i + 1]];
                if ch.chars().any(is_malayalam) {
                    trace!("map: no table entry for {:?} at {}", ch, i);
                }
                out.push_str(ch);
                i += 1;
            }
        }
    }
    out
}

/// Find the longest key starting at char index `start`. Returns its length in chars and the
/// mapped value.
fn longest_match<'t>(
    text: &str,
    offsets: &[usize],
    start: usize,
    table: &'t MappingTable,
) -> Option<(usize, &'t str)> {
    let remaining = offsets.len() - 1 - start;
    let max_len = table.max_key_len().min(remaining);
    (1..=max_len).rev().find_map(|len| {
        table
            .get(&text[offsets[start]..offsets[start + len]])
            .map(|value| (len, value))
    })
}
