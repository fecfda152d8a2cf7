//! Atrium - Cache Manager Console
//!
//! A console view over the caches of a distributed data grid. The binary
//! runs the view headless: it mounts the cache table for one cache manager
//! from a JSON snapshot and renders it as text.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `model` - Cache records in the grid's wire form
//! - `filter` - Filter vocabulary and the filter engine
//! - `pager` - Client-side pagination
//! - `table` - Mounted table state and the table registry
//! - `display` - Render descriptions for the hosting UI
//! - `nav` - Outward navigation requests
//! - `snapshot` - Host-supplied cache list input

mod config;
mod display;
mod filter;
mod model;
mod nav;
mod pager;
mod snapshot;
mod table;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use filter::FilterTag;
use nav::{LogNavigator, NavigationRequest, Navigator};
use table::TableRegistry;

fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Initialize logging with sensible defaults
    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("atrium=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting Atrium console...");

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded successfully");

    // Load the cache list the host tooling exported for this container
    let caches = snapshot::load(&config.snapshot_path)?;
    info!(
        container = %config.container,
        caches = caches.len(),
        "Snapshot loaded"
    );

    // Mount the table
    let registry = TableRegistry::new();
    registry.mount(&config.container, caches);

    // Apply the configured view state. Unknown tags never restrict the
    // selection; they are dropped at the parse boundary.
    let matched = registry
        .with_table_mut(&config.container, |t| {
            for raw in &config.filter_tags {
                match raw.parse::<FilterTag>() {
                    Ok(tag) => t.toggle_filter(tag),
                    Err(err) => warn!(%err, "ignoring filter tag"),
                }
            }
            t.set_per_page(config.per_page);
            t.set_page(config.page);
            t.item_count()
        })
        .context("cache table disappeared before view state was applied")?;
    info!(matched, "View state applied");

    // Render
    let rendered = registry
        .with_table(&config.container, |t| {
            info!(
                total = t.total(),
                pages = t.page_count(),
                "Rendering cache table"
            );
            format!(
                "{}\n{}",
                display::render_toolbar(&display::toolbar(t)),
                display::render_table(&display::table_view(t))
            )
        })
        .context("cache table disappeared before rendering")?;
    print!("{rendered}");

    // Hand an opened cache to the router seam
    if let Some(cache_name) = &config.open_cache {
        let navigator = LogNavigator;
        navigator.navigate(NavigationRequest::cache_detail(cache_name));
    }

    registry.unmount(&config.container);
    info!("Console session finished");

    Ok(())
}
