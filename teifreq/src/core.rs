// src/core.rs
pub mod aggregate;
pub mod markup;
pub mod metadata;
pub mod normalize;
pub mod scanner;
