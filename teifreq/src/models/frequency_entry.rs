// src/models/frequency_entry.rs
use std::collections::BTreeSet;

/// Occurrences of one canonical key and the distinct spellings seen for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub variants: BTreeSet<String>,
    pub count: u64,
}

impl FrequencyEntry {
    #[inline]
    #[must_use]
    pub fn new(phrase: String) -> Self {
        Self {
            variants: BTreeSet::from([phrase]),
            count: 1,
        }
    }

    #[inline]
    pub fn record(&mut self, phrase: String) {
        self.count = self.count.saturating_add(1);
        self.variants.insert(phrase);
    }

    /// Adds the occurrences and spellings of another entry for the same key.
    #[inline]
    pub fn absorb(&mut self, other: Self) {
        self.count = self.count.saturating_add(other.count);
        self.variants.extend(other.variants);
    }

    /// The lexicographically smallest variant.
    #[inline]
    #[must_use]
    pub fn representative(&self) -> &str {
        self.variants.first().map_or("", String::as_str)
    }
}
