//! Conversion of logical order to the visual order used by the legacy fonts.
//!
//! Unicode stores the pre-base vowel signs E, EE and AI after the consonant cluster they modify.
//! The legacy fonts have no reordering logic of their own, so these signs have to be emitted in
//! front of the cluster. The subjoined Ra (virama, Ra) is drawn on the left in the same way.

use bitflags::bitflags;
use log::trace;

use crate::unicode::{is_pre_base_vowel_sign, RA, VIRAMA};

bitflags! {
    /// Selects the elements that are moved in front of their consonant cluster.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ReorderFlags: u8 {
        /// Move the vowel signs E, EE and AI.
        const PRE_BASE_VOWELS = 0x01;
        /// Move the subjoined Ra conjunct, virama followed by Ra.
        const RA_SUBJOIN = 0x02;
    }
}

impl Default for ReorderFlags {
    fn default() -> Self {
        ReorderFlags::PRE_BASE_VOWELS | ReorderFlags::RA_SUBJOIN
    }
}

/// A reorderable element. The subjoined Ra spans two code points but moves as one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Unit {
    Char(char),
    RaSubjoin,
}

impl Unit {
    fn is_virama(self) -> bool {
        self == Unit::Char(VIRAMA)
    }

    fn is_vowel_sign(self) -> bool {
        matches!(self, Unit::Char(ch) if is_pre_base_vowel_sign(ch))
    }

    fn is_pre_base(self, flags: ReorderFlags) -> bool {
        match self {
            Unit::Char(ch) => {
                flags.contains(ReorderFlags::PRE_BASE_VOWELS) && is_pre_base_vowel_sign(ch)
            }
            Unit::RaSubjoin => flags.contains(ReorderFlags::RA_SUBJOIN),
        }
    }
}

/// Move pre-base elements in front of the consonant cluster that precedes them.
///
/// The text is processed in a single forward pass. Each pre-base element is spliced into the
/// already emitted output at the start of the trailing cluster `(C, virama)*, C`. An element
/// at the very start of the text has nothing to attach to and is left where it is. No element
/// is moved in front of a pre-base vowel sign that came before it.
pub fn reorder(text: &str, flags: ReorderFlags) -> String {
    let mut units: Vec<Unit> = Vec::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    // Index just after the last pre-base vowel sign placed.
    let mut floor = 0;

    while let Some(ch) = chars.next() {
        let unit = if ch == VIRAMA
            && flags.contains(ReorderFlags::RA_SUBJOIN)
            && chars.peek() == Some(&RA)
        {
            chars.next();
            Unit::RaSubjoin
        } else {
            Unit::Char(ch)
        };

        if unit.is_pre_base(flags) {
            if let Some(start) = cluster_start(&units) {
                let dest = start.max(floor);
                trace!("reorder: moving {:?} from {} to {}", unit, units.len(), dest);
                units.insert(dest, unit);
                if unit.is_vowel_sign() {
                    floor = dest + 1;
                }
                continue;
            }
        }
        units.push(unit);
        if unit.is_pre_base(flags) && unit.is_vowel_sign() {
            floor = units.len();
        }
    }

    let mut out = String::with_capacity(text.len());
    for unit in units {
        match unit {
            Unit::Char(ch) => out.push(ch),
            Unit::RaSubjoin => {
                out.push(VIRAMA);
                out.push(RA);
            }
        }
    }
    out
}

/// Returns the index of the first consonant of the cluster that ends `units`.
///
/// Starting at the last unit, steps back over each (consonant, virama) pair. Returns `None` when
/// `units` is empty.
fn cluster_start(units: &[Unit]) -> Option<usize> {
    let mut start = units.len().checked_sub(1)?;
    while start > 0 && units[start - 1].is_virama() {
        start = start.saturating_sub(2);
    }
    Some(start)
}
