//! Cache filtering.
//!
//! The filter menu offers two vocabularies: cache types and features.
//! Selections within a vocabulary widen the match (OR); the two
//! vocabularies compose as AND.

mod state;
mod tag;

pub use state::FilterState;
pub use tag::{FilterTag, UnknownTag};
