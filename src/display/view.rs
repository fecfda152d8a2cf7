//! Render description for the cache table and its toolbar.

use crate::filter::FilterTag;
use crate::model::{CacheRecord, CacheType, Feature};
use crate::nav::NavigationRequest;
use crate::table::CacheTable;

use super::format;

/// Placeholder title shown when the table body is empty.
pub const EMPTY_TITLE: &str = "No caches found";

/// A column in the table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    /// Width hint as a percentage of the table, when fixed.
    /// Consumed by widget-based hosts; the text renderer sizes to content.
    #[allow(dead_code)]
    pub width_pct: Option<u8>,
}

/// Column schema: Name, Type, Health, Features.
pub const COLUMNS: [Column; 4] = [
    Column {
        title: "Name",
        width_pct: Some(20),
    },
    Column {
        title: "Type",
        width_pct: Some(20),
    },
    Column {
        title: "Health",
        width_pct: Some(20),
    },
    Column {
        title: "Features",
        width_pct: None,
    },
];

/// One rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Cache name linking to its detail page.
    Link {
        text: String,
        target: NavigationRequest,
    },
    /// Cache type badge with its display color.
    Badge {
        text: String,
        #[allow(dead_code)]
        color: &'static str,
    },
    /// Health status with its label color.
    Status {
        text: String,
        #[allow(dead_code)]
        color: &'static str,
    },
    /// Plain text (the feature line).
    Text(String),
}

impl Cell {
    /// Textual content of the cell, presentation aside.
    pub fn text(&self) -> &str {
        match self {
            Cell::Link { text, .. } => text,
            Cell::Badge { text, .. } => text,
            Cell::Status { text, .. } => text,
            Cell::Text(text) => text,
        }
    }
}

/// One table row: one cache record.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// Why the table body is a placeholder instead of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// No cache matches the current filter selection.
    NoMatch,
    /// Caches match, but the current page is past the end of the list.
    PageOutOfRange,
}

/// Body of the table: rows, or a single placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<Row>),
    Empty(EmptyKind),
}

/// Render description handed to the hosting UI.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub columns: &'static [Column],
    pub body: TableBody,
}

/// Toolbar description: grouped filter menu, actions, pagination facts.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    /// Filter menu groups in display order: (group label, vocabulary).
    pub filter_groups: [(&'static str, Vec<FilterTag>); 2],
    /// Currently-selected tags in toggle order.
    pub selected: Vec<FilterTag>,
    /// Create Cache action.
    pub create_cache: NavigationRequest,
    /// Configuration templates action.
    pub configuration_templates: NavigationRequest,
    /// Filtered item count for the pagination widget.
    pub item_count: usize,
    pub page: usize,
    pub per_page: usize,
}

/// Build the table render description for the current page window.
pub fn table_view(table: &CacheTable) -> TableView {
    let window = table.window();
    let body = if window.is_empty() {
        let kind = if table.item_count() == 0 {
            EmptyKind::NoMatch
        } else {
            EmptyKind::PageOutOfRange
        };
        TableBody::Empty(kind)
    } else {
        TableBody::Rows(window.iter().map(row).collect())
    };
    TableView {
        columns: &COLUMNS,
        body,
    }
}

/// Build the toolbar description.
pub fn toolbar(table: &CacheTable) -> Toolbar {
    Toolbar {
        filter_groups: [
            (
                "Cache type",
                CacheType::ALL.into_iter().map(FilterTag::Type).collect(),
            ),
            (
                "Feature",
                Feature::ALL.into_iter().map(FilterTag::Feature).collect(),
            ),
        ],
        selected: table.selected_tags().to_vec(),
        create_cache: NavigationRequest::create_cache(table.container()),
        configuration_templates: NavigationRequest::configuration_templates(table.container()),
        item_count: table.item_count(),
        page: table.page(),
        per_page: table.per_page(),
    }
}

fn row(cache: &CacheRecord) -> Row {
    Row {
        cells: vec![
            Cell::Link {
                text: cache.name.clone(),
                target: NavigationRequest::cache_detail(&cache.name),
            },
            Cell::Badge {
                text: cache.cache_type.to_string(),
                color: format::type_color(cache.cache_type),
            },
            Cell::Status {
                text: format::health_label(&cache.health),
                color: format::health_color(&cache.health),
            },
            Cell::Text(format::features_line(cache)),
        ],
    }
}
