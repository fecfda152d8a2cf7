//! Outward navigation.
//!
//! The console emits fire-and-forget navigation requests toward the hosting
//! application's router. No response comes back to this component.

use tracing::info;

/// Context state attached to a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavContext {
    /// Navigating to a single cache.
    Cache { cache_name: String },
    /// Navigating within a cache manager.
    Container { container: String },
}

/// A route path plus context state for the routing collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    pub context: NavContext,
}

impl NavigationRequest {
    /// Detail page of one cache.
    pub fn cache_detail(cache_name: &str) -> Self {
        Self {
            path: format!("/cache/{cache_name}"),
            context: NavContext::Cache {
                cache_name: cache_name.to_string(),
            },
        }
    }

    /// Cache creation page of a cache manager.
    pub fn create_cache(container: &str) -> Self {
        Self {
            path: format!("/container/{container}/caches/create"),
            context: NavContext::Container {
                container: container.to_string(),
            },
        }
    }

    /// Configuration templates page of a cache manager.
    pub fn configuration_templates(container: &str) -> Self {
        Self {
            path: format!("/container/{container}/configurations/"),
            context: NavContext::Container {
                container: container.to_string(),
            },
        }
    }
}

/// Seam to the hosting application's router.
pub trait Navigator {
    /// Hand off a request. Fire-and-forget; implementations must not block.
    fn navigate(&self, request: NavigationRequest);
}

/// Navigator that records requests in the log. Used by the headless binary,
/// where there is no router to hand the request to.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, request: NavigationRequest) {
        match &request.context {
            NavContext::Cache { cache_name } => {
                info!(path = %request.path, cache = %cache_name, "navigation requested");
            }
            NavContext::Container { container } => {
                info!(path = %request.path, container = %container, "navigation requested");
            }
        }
    }
}
