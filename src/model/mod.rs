//! Cache data model.
//!
//! Records arrive from the hosting application in the grid's camelCase
//! wire form and are read-only for the lifetime of a mounted table.

mod cache;

pub use cache::{CacheRecord, CacheType, Feature};
