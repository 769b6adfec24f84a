//! Numbered sequences of signature values.

use crate::sign::SignValue;

/// One numbered entry of a `SignMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapEntry {
    /// Position of the entry, assigned at construction.
    pub number: usize,
    /// Signature value stored at this position.
    pub sign: SignValue,
}

/// Ordered, numbered sequence of signature values.
///
/// Entries are numbered `0..len` when the map is built and never change
/// afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignMap {
    entries: Vec<MapEntry>,
}

impl SignMap {
    /// Builds a map, numbering the signs in iteration order.
    pub fn from_signs<I>(signs: I) -> Self
    where
        I: IntoIterator<Item = SignValue>,
    {
        let entries = signs
            .into_iter()
            .enumerate()
            .map(|(number, sign)| MapEntry { number, sign })
            .collect();
        Self { entries }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry with the given number.
    pub fn get(&self, number: usize) -> Option<&MapEntry> {
        self.entries.get(number)
    }

    /// Returns all entries in numbering order.
    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    /// Iterates over the stored signs in numbering order.
    pub fn signs(&self) -> impl Iterator<Item = SignValue> + '_ {
        self.entries.iter().map(|entry| entry.sign)
    }
}
