// src/models/frequency_table.rs
use super::FrequencyEntry;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Frequency entries keyed by canonical key, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: BTreeMap<String, FrequencyEntry>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Counts one occurrence of `phrase` under `key`.
    pub fn record(&mut self, key: String, phrase: String) {
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(FrequencyEntry::new(phrase));
            }
            Entry::Occupied(mut slot) => slot.get_mut().record(phrase),
        }
    }

    /// Folds another table into this one: counts add up and variant sets merge.
    pub fn merge(&mut self, other: Self) {
        for (key, entry) in other.entries {
            match self.entries.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(mut slot) => slot.get_mut().absorb(entry),
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FrequencyEntry> {
        self.entries.get(key)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences across all entries.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.entries
            .values()
            .fold(0_u64, |total, entry| total.saturating_add(entry.count))
    }
}
