//! Filter selection state and the filter engine.

use tracing::debug;

use crate::model::CacheRecord;

use super::FilterTag;

/// Ordered set of currently-selected filter tags.
///
/// Insertion order is toggle order. Toggling a selected tag removes it,
/// so duplicates cannot occur.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    tags: Vec<FilterTag>,
}

impl FilterState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a tag. Returns whether the tag is selected afterwards.
    pub fn toggle(&mut self, tag: FilterTag) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
            debug!(%tag, "filter tag deselected");
            false
        } else {
            self.tags.push(tag);
            debug!(%tag, "filter tag selected");
            true
        }
    }

    /// Deselect every tag.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Whether a tag is currently selected.
    #[allow(dead_code)]
    pub fn contains(&self, tag: FilterTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Whether no tag is selected.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Selected tags in toggle order.
    pub fn tags(&self) -> &[FilterTag] {
        &self.tags
    }

    /// Compute the visible subset of `all` under the current selection.
    ///
    /// An empty selection is the identity. Otherwise a record survives if
    /// its type is one of the selected types (when any type is selected)
    /// and at least one selected feature flag is true on it (when any
    /// feature is selected). Relative order is preserved.
    pub fn apply(&self, all: &[CacheRecord]) -> Vec<CacheRecord> {
        if self.tags.is_empty() {
            return all.to_vec();
        }

        let mut types = Vec::new();
        let mut features = Vec::new();
        for tag in &self.tags {
            match tag {
                FilterTag::Type(cache_type) => types.push(*cache_type),
                FilterTag::Feature(feature) => features.push(*feature),
            }
        }

        all.iter()
            .filter(|cache| types.is_empty() || types.contains(&cache.cache_type))
            .filter(|cache| {
                features.is_empty() || features.iter().any(|f| cache.has_feature(*f))
            })
            .cloned()
            .collect()
    }
}
