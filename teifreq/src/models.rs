// src/models.rs
pub mod frequency_entry;
pub mod frequency_table;
pub mod metadata;

pub use frequency_entry::FrequencyEntry;
pub use frequency_table::FrequencyTable;
pub use metadata::Metadata;
