//! Configuration module for the Atrium console binary.
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the cache snapshot JSON supplied by the host tooling.
    pub snapshot_path: PathBuf,

    /// Cache manager (container) name the table is mounted for.
    pub container: String,

    /// Filter tags selected at startup (comma-separated).
    /// Tags outside the filter vocabulary are logged and ignored.
    pub filter_tags: Vec<String>,

    /// Initial page (1-based).
    pub page: usize,

    /// Initial page size.
    pub per_page: usize,

    /// Cache to open after rendering (emits a detail navigation request).
    pub open_cache: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if required environment variables are not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let filter_tags = env::var("ATRIUM_FILTERS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let page = env::var("ATRIUM_PAGE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);

        let per_page = env::var("ATRIUM_PER_PAGE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let open_cache = env::var("ATRIUM_OPEN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            snapshot_path: PathBuf::from(
                env::var("ATRIUM_SNAPSHOT").expect("ATRIUM_SNAPSHOT must be set"),
            ),
            container: env::var("ATRIUM_CONTAINER").unwrap_or_else(|_| "default".to_string()),
            filter_tags,
            page,
            per_page,
            open_cache,
        }
    }
}
