//! Cache record as reported by the grid for one cache manager.

use serde::{Deserialize, Serialize};

/// Replication mode of a cache instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CacheType {
    Local,
    Replicated,
    Distributed,
    Invalidated,
    Scattered,
}

impl CacheType {
    /// All cache types, in filter-menu order.
    pub const ALL: [CacheType; 5] = [
        CacheType::Local,
        CacheType::Replicated,
        CacheType::Distributed,
        CacheType::Invalidated,
        CacheType::Scattered,
    ];

    /// Display label. Matches the wire name.
    pub fn label(&self) -> &'static str {
        match self {
            CacheType::Local => "Local",
            CacheType::Replicated => "Replicated",
            CacheType::Distributed => "Distributed",
            CacheType::Invalidated => "Invalidated",
            CacheType::Scattered => "Scattered",
        }
    }
}

impl std::fmt::Display for CacheType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Capability a cache may carry, shown as a feature badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Bounded,
    Indexed,
    Persistent,
    Transactional,
    Secured,
    /// Remote site backups.
    Backups,
}

impl Feature {
    /// All features, in badge order.
    pub const ALL: [Feature; 6] = [
        Feature::Bounded,
        Feature::Indexed,
        Feature::Persistent,
        Feature::Transactional,
        Feature::Secured,
        Feature::Backups,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Bounded => "Bounded",
            Feature::Indexed => "Indexed",
            Feature::Persistent => "Persistent",
            Feature::Transactional => "Transactional",
            Feature::Secured => "Secured",
            Feature::Backups => "Backups",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A cache instance within one cache manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CacheRecord {
    /// Cache name, unique within its cache manager.
    pub name: String,

    /// Replication mode.
    #[serde(rename = "type")]
    pub cache_type: CacheType,

    /// Health status label as reported by the grid (e.g. `HEALTHY`).
    pub health: String,

    /// Bounded in size (eviction configured).
    #[serde(default)]
    pub bounded: bool,

    /// Search indexing enabled.
    #[serde(default)]
    pub indexed: bool,

    /// Backed by a persistent store.
    #[serde(default)]
    pub persistent: bool,

    /// Transactions enabled.
    #[serde(default)]
    pub transactional: bool,

    /// Authorization configured.
    #[serde(default)]
    pub secured: bool,

    /// Backed up to a remote site.
    #[serde(default)]
    pub has_remote_backup: bool,
}

impl CacheRecord {
    /// Whether the given feature flag is set on this cache.
    pub fn has_feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::Bounded => self.bounded,
            Feature::Indexed => self.indexed,
            Feature::Persistent => self.persistent,
            Feature::Transactional => self.transactional,
            Feature::Secured => self.secured,
            Feature::Backups => self.has_remote_backup,
        }
    }

    /// Enabled features, in badge order.
    pub fn features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.has_feature(*f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_form() {
        let json = r#"{
            "name": "users",
            "type": "Distributed",
            "health": "HEALTHY",
            "bounded": true,
            "hasRemoteBackup": true
        }"#;

        let cache: CacheRecord = serde_json::from_str(json).unwrap();
        assert_eq!(cache.name, "users");
        assert_eq!(cache.cache_type, CacheType::Distributed);
        assert_eq!(cache.health, "HEALTHY");
        assert!(cache.bounded);
        assert!(cache.has_remote_backup);
        // Omitted flags default to false
        assert!(!cache.indexed);
        assert!(!cache.transactional);
    }

    #[test]
    fn test_features_in_badge_order() {
        let cache = CacheRecord {
            name: "sessions".to_string(),
            cache_type: CacheType::Replicated,
            health: "HEALTHY".to_string(),
            bounded: false,
            indexed: true,
            persistent: true,
            transactional: false,
            secured: false,
            has_remote_backup: true,
        };

        assert_eq!(
            cache.features(),
            vec![Feature::Indexed, Feature::Persistent, Feature::Backups]
        );
    }

    #[test]
    fn test_has_feature_backups_reads_remote_backup_flag() {
        let mut cache = CacheRecord {
            name: "c".to_string(),
            cache_type: CacheType::Local,
            health: "HEALTHY".to_string(),
            bounded: false,
            indexed: false,
            persistent: false,
            transactional: false,
            secured: false,
            has_remote_backup: false,
        };
        assert!(!cache.has_feature(Feature::Backups));

        cache.has_remote_backup = true;
        assert!(cache.has_feature(Feature::Backups));
    }
}
