//! Filter vocabulary.

use std::str::FromStr;

use thiserror::Error;

use crate::model::{CacheType, Feature};

/// A user-selectable filter criterion.
///
/// The cache-type and feature vocabularies are disjoint by construction,
/// so partitioning a selection is a `match` rather than a lookup against
/// hardcoded string lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTag {
    /// Keep caches of this replication mode.
    Type(CacheType),
    /// Keep caches with this feature enabled.
    Feature(Feature),
}

impl FilterTag {
    /// The full vocabulary in filter-menu order: cache types, then features.
    pub fn vocabulary() -> impl Iterator<Item = FilterTag> {
        CacheType::ALL
            .into_iter()
            .map(FilterTag::Type)
            .chain(Feature::ALL.into_iter().map(FilterTag::Feature))
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            FilterTag::Type(cache_type) => cache_type.label(),
            FilterTag::Feature(feature) => feature.label(),
        }
    }
}

impl std::fmt::Display for FilterTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A string outside the filter vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter tag: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for FilterTag {
    type Err = UnknownTag;

    /// Parse a tag from user input, case-insensitively.
    ///
    /// Strings outside the vocabulary are an error here; callers drop them
    /// without restricting the selection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FilterTag::vocabulary()
            .find(|tag| tag.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTag(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_covers_both_groups() {
        let tags: Vec<FilterTag> = FilterTag::vocabulary().collect();
        assert_eq!(tags.len(), 11);
        assert_eq!(tags[0], FilterTag::Type(CacheType::Local));
        assert_eq!(tags[10], FilterTag::Feature(Feature::Backups));
    }

    #[test]
    fn test_parse_type_and_feature_tags() {
        assert_eq!(
            "Local".parse::<FilterTag>(),
            Ok(FilterTag::Type(CacheType::Local))
        );
        assert_eq!(
            "transactional".parse::<FilterTag>(),
            Ok(FilterTag::Feature(Feature::Transactional))
        );
        assert_eq!(
            " Backups ".parse::<FilterTag>(),
            Ok(FilterTag::Feature(Feature::Backups))
        );
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "Sharded".parse::<FilterTag>().unwrap_err();
        assert_eq!(err, UnknownTag("Sharded".to_string()));
    }
}
