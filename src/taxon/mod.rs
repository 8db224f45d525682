//! Taxon name classification and display formatting.
pub mod formatter;

pub use formatter::{OutputMode, format_name};
