//! The cache table component.
//!
//! ## Architecture
//!
//! - `CacheTable` - per-container table state with named transition
//!   operations (toggle filter, change page, change page size)
//! - `TableRegistry` - mounted tables keyed by cache manager name
//!
//! The table re-derives its filtered list inside every mutation, so the
//! visible window always composes filter-then-page against the current
//! selection.

mod registry;
mod state;

pub use registry::TableRegistry;
pub use state::CacheTable;
