//! Presentation adapter.
//!
//! Maps the mounted table to a render description the hosting UI consumes:
//! a column schema, one row per visible record (or a placeholder when the
//! page window is empty), and a toolbar description. The `text` submodule
//! renders the description for the headless binary.

mod format;
mod text;
mod view;

pub use format::{features_line, health_color, health_label, type_color};
pub use text::{render_table, render_toolbar};
pub use view::{
    COLUMNS, Cell, Column, EMPTY_TITLE, EmptyKind, Row, TableBody, TableView, Toolbar, table_view,
    toolbar,
};
