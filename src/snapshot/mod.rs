//! Host-supplied cache list input.
//!
//! The hosting application hands the console the full cache list for a
//! cache manager at mount time. The headless binary reads that list from
//! a JSON snapshot file; embedded hosts call [`parse`] with whatever their
//! data layer fetched.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::CacheRecord;

/// Parse a JSON array of cache records in the grid's camelCase wire form.
pub fn parse(json: &str) -> Result<Vec<CacheRecord>> {
    serde_json::from_str(json).context("malformed cache snapshot")
}

/// Load and parse a snapshot file.
pub fn load(path: &Path) -> Result<Vec<CacheRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    parse(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CacheType;

    #[test]
    fn test_parse_snapshot_array() {
        let json = r#"[
            {"name": "users", "type": "Distributed", "health": "HEALTHY", "indexed": true},
            {"name": "scratch", "type": "Local", "health": "DEGRADED"}
        ]"#;

        let caches = parse(json).unwrap();
        assert_eq!(caches.len(), 2);
        assert_eq!(caches[0].name, "users");
        assert!(caches[0].indexed);
        assert_eq!(caches[1].cache_type, CacheType::Local);
    }

    #[test]
    fn test_parse_preserves_order() {
        let json = r#"[
            {"name": "c", "type": "Local", "health": "HEALTHY"},
            {"name": "a", "type": "Local", "health": "HEALTHY"},
            {"name": "b", "type": "Local", "health": "HEALTHY"}
        ]"#;

        let names: Vec<String> = parse(json).unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        assert!(parse("{\"not\": \"an array\"}").is_err());
        assert!(parse("[{\"name\": \"x\"}]").is_err());
    }
}
