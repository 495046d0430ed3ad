// src/models/metadata.rs

/// Document-level fields prefixed to every exported row of that document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub author: String,
    pub work: String,
    pub date: String,
}

impl Metadata {
    #[inline]
    #[must_use]
    pub fn fields(&self) -> [&str; 3] {
        [&self.author, &self.work, &self.date]
    }
}
