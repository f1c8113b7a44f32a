//! Substitution tables from Unicode Malayalam to legacy font glyph sequences.
//!
//! The built-in tables are generated by `build.rs` from `data/font_a.txt` and
//! `data/font_b.txt`. The build rejects duplicate keys, so no run-time validation is needed for
//! them. Tables assembled at run time go through [`MappingTable::new`], which does the same
//! check.

use std::borrow::Cow;

use lazy_static::lazy_static;
use log::warn;
use rustc_hash::FxHashMap;

use crate::error::{DisplayCodePoints, TableError};

static FONT_A_ENTRIES: &[(&str, &str)] = include!(concat!(env!("OUT_DIR"), "/font_a.rs"));
static FONT_B_ENTRIES: &[(&str, &str)] = include!(concat!(env!("OUT_DIR"), "/font_b.rs"));

lazy_static! {
    /// The Font-A (ML-TT series) table.
    pub static ref FONT_A: MappingTable = MappingTable::from_validated(FONT_A_ENTRIES);
    /// The Font-B (FML series) table.
    pub static ref FONT_B: MappingTable = MappingTable::from_validated(FONT_B_ENTRIES);
}

/// An immutable map from Unicode substrings to legacy output.
///
/// Keys are between one code point and `max_key_len` code points long. Lookups are exact; the
/// longest-match discipline is implemented by the mapper on top of `get`.
#[derive(Clone, Debug)]
pub struct MappingTable {
    map: FxHashMap<Cow<'static, str>, Cow<'static, str>>,
    max_key_len: usize,
}

impl MappingTable {
    /// Build a table, failing on empty or duplicate keys.
    pub fn new<I, K, V>(entries: I) -> Result<MappingTable, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        let mut table = MappingTable::empty();
        for (key, value) in entries {
            let key = key.into();
            if key.is_empty() {
                return Err(TableError::EmptyKey);
            }
            if table.map.contains_key(&key) {
                return Err(TableError::DuplicateKey(key.into_owned()));
            }
            table.insert(key, value.into());
        }
        Ok(table)
    }

    /// Build a table where a later entry replaces an earlier one with the same key.
    ///
    /// Each replacement is logged. Empty keys are skipped.
    pub fn from_entries_last_wins<I, K, V>(entries: I) -> MappingTable
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        let mut table = MappingTable::empty();
        for (key, value) in entries {
            let key = key.into();
            if key.is_empty() {
                warn!("mapping table: skipping empty key");
                continue;
            }
            let value = value.into();
            if let Some(prev) = table.map.get(&key) {
                warn!(
                    "mapping table: key {} remapped from {:?} to {:?}",
                    DisplayCodePoints(&key),
                    prev,
                    value
                );
            }
            table.insert(key, value);
        }
        table
    }

    fn from_validated(entries: &'static [(&'static str, &'static str)]) -> MappingTable {
        let mut table = MappingTable::empty();
        for &(key, value) in entries {
            table.insert(Cow::Borrowed(key), Cow::Borrowed(value));
        }
        table
    }

    fn empty() -> MappingTable {
        MappingTable {
            map: FxHashMap::default(),
            max_key_len: 0,
        }
    }

    fn insert(&mut self, key: Cow<'static, str>, value: Cow<'static, str>) {
        self.max_key_len = self.max_key_len.max(key.chars().count());
        self.map.insert(key, value);
    }

    /// Look up the legacy output for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|value| value.as_ref())
    }

    /// Length in code points of the longest key.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Iterate over the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.map
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
