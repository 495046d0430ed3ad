// src/core/aggregate.rs
use crate::core::normalize::canonical_key;
use crate::models::FrequencyTable;

/// Per-document accumulator folding normalized phrases into a [`FrequencyTable`].
#[derive(Debug, Default)]
pub struct Aggregator {
    table: FrequencyTable,
}

impl Aggregator {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: FrequencyTable::new(),
        }
    }

    /// Counts one phrase under its canonical key, keeping its spelling as a variant.
    #[inline]
    pub fn add(&mut self, phrase: String) {
        let key = canonical_key(&phrase);
        self.table.record(key, phrase);
    }

    #[inline]
    #[must_use]
    pub fn finish(self) -> FrequencyTable {
        self.table
    }
}

impl Extend<String> for Aggregator {
    fn extend<I: IntoIterator<Item = String>>(&mut self, phrases: I) {
        for phrase in phrases {
            self.add(phrase);
        }
    }
}

#[must_use]
pub fn aggregate<I>(phrases: I) -> FrequencyTable
where
    I: IntoIterator<Item = String>,
{
    let mut aggregator = Aggregator::new();
    aggregator.extend(phrases);
    aggregator.finish()
}
