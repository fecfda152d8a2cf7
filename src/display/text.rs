//! Plain-text rendering for the headless console binary.

use super::view::{EMPTY_TITLE, TableBody, TableView, Toolbar};

/// Render a table view as an aligned text table.
pub fn render_table(view: &TableView) -> String {
    let rows = match &view.body {
        TableBody::Rows(rows) => rows,
        TableBody::Empty(_) => return format!("  {EMPTY_TITLE}\n"),
    };

    // Each column is as wide as its widest content, header included.
    let mut widths: Vec<usize> = view.columns.iter().map(|c| c.title.len()).collect();
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.text().len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = view
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, &w)| format!("{:<w$}", c.title))
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell.text()))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Render the toolbar as a short status block.
pub fn render_toolbar(bar: &Toolbar) -> String {
    let selected = if bar.selected.is_empty() {
        "none".to_string()
    } else {
        bar.selected
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} caches | page {} ({} per page)\n",
        bar.item_count, bar.page, bar.per_page
    ));
    for (label, tags) in &bar.filter_groups {
        let options = tags.iter().map(|t| t.label()).collect::<Vec<_>>().join(", ");
        out.push_str(&format!("{label}: {options}\n"));
    }
    out.push_str(&format!("Filters: {selected}\n"));
    out.push_str(&format!("Create Cache -> {}\n", bar.create_cache.path));
    out.push_str(&format!(
        "Configuration templates -> {}\n",
        bar.configuration_templates.path
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::view::{table_view, toolbar};
    use crate::model::{CacheRecord, CacheType};
    use crate::table::CacheTable;

    fn cache(name: &str) -> CacheRecord {
        CacheRecord {
            name: name.to_string(),
            cache_type: CacheType::Local,
            health: "HEALTHY".to_string(),
            bounded: false,
            indexed: true,
            persistent: false,
            transactional: false,
            secured: false,
            has_remote_backup: false,
        }
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = CacheTable::mount("default", vec![cache("a-rather-long-name"), cache("b")]);
        let text = render_table(&table_view(&table));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].contains("a-rather-long-name"));
        assert!(lines[2].contains("Indexed"));
        // Short names are padded so the Type column lines up.
        let type_col = lines[2].find("Local").unwrap();
        assert_eq!(lines[3].find("Local").unwrap(), type_col);
    }

    #[test]
    fn test_render_table_placeholder() {
        let mut table = CacheTable::mount("default", vec![cache("a")]);
        table.set_page(9);
        let text = render_table(&table_view(&table));
        assert!(text.contains("No caches found"));
    }

    #[test]
    fn test_render_toolbar() {
        let table = CacheTable::mount("default", vec![cache("a")]);
        let text = render_toolbar(&toolbar(&table));
        assert!(text.contains("1 caches | page 1 (10 per page)"));
        assert!(text.contains("Cache type: Local, Replicated, Distributed, Invalidated, Scattered"));
        assert!(text.contains("Filters: none"));
        assert!(text.contains("/container/default/caches/create"));
    }
}
