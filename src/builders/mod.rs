//! Builders turning fixture configurations into workspace documents.

pub mod document;

// Re-export the document builders for convenient access
pub use document::{build, to_document};
