//! HTML escaping and full-table projection.

use std::fmt::Write as _;

use crate::item::ItemRecord;

/// Replaces markup-significant characters so stored text always renders as
/// text, never as structure.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn cell_or_na(text: &str) -> String {
    if text.is_empty() {
        "N/A".to_string()
    } else {
        escape_html(text)
    }
}

/// Projection of the full record list into table markup plus summary state.
///
/// Pure function of the record slice: projecting the same records twice
/// yields the same view. Rows carry a `data-id` attribute so the host page
/// can wire per-row edit and delete controls; the cells themselves are
/// data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// `<tr>` rows in store order, empty when there is no record.
    pub rows_html: String,
    /// Live summary line, e.g. `Total items: 3`.
    pub count_label: String,
    /// True when the no-records indicator should show instead of the table.
    pub is_empty: bool,
}

impl TableView {
    /// Builds the view from the current record list.
    pub fn project(items: &[ItemRecord]) -> Self {
        if items.is_empty() {
            return Self {
                rows_html: String::new(),
                count_label: "No items found.".to_string(),
                is_empty: true,
            };
        }

        let mut rows_html = String::new();
        for item in items {
            let _ = writeln!(
                rows_html,
                "<tr data-id=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                item.id,
                item.id,
                escape_html(&item.name),
                cell_or_na(&item.emp_code),
                cell_or_na(&item.taluk_name),
                cell_or_na(&item.description),
                item.created_at_label(),
            );
        }

        Self {
            rows_html,
            count_label: format!("Total items: {}", items.len()),
            is_empty: false,
        }
    }
}
