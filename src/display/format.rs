//! Display mapping for type badges, health labels, and feature lines.

use crate::model::{CacheRecord, CacheType};

/// Badge color for a cache type.
pub fn type_color(cache_type: CacheType) -> &'static str {
    match cache_type {
        CacheType::Local => "#4CB140",
        CacheType::Replicated => "#519DE9",
        CacheType::Distributed => "#0066CC",
        CacheType::Invalidated => "#F0AB00",
        CacheType::Scattered => "#8481DD",
    }
}

/// Human label for a grid health status.
///
/// Unrecognized statuses pass through unchanged.
pub fn health_label(health: &str) -> String {
    match health {
        "HEALTHY" => "Healthy".to_string(),
        "HEALTHY_REBALANCING" => "Rebalancing".to_string(),
        "DEGRADED" => "Degraded".to_string(),
        "FAILED" => "Failed".to_string(),
        other => other.to_string(),
    }
}

/// Text color for a grid health status.
pub fn health_color(health: &str) -> &'static str {
    match health {
        "HEALTHY" => "#3E8635",
        "HEALTHY_REBALANCING" => "#F0AB00",
        "DEGRADED" | "FAILED" => "#C9190B",
        _ => "#6A6E73",
    }
}

/// Enabled feature labels joined with `" / "`, in badge order.
pub fn features_line(cache: &CacheRecord) -> String {
    cache
        .features()
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(" / ")
}
