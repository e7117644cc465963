//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{
        Alignment, Modify, Style, Width,
        object::{Rows, Segment},
    },
};

/// Column width beyond which cell text wraps
const MAX_COLUMN_WIDTH: usize = 60;

/// Format data as a table, or "No results found." when empty
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    format_table_or(data, "No results found.")
}

/// Format data as a table, or `empty` when there are no rows
pub fn format_table_or<T: Tabled>(data: &[T], empty: &str) -> String {
    if data.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Segment::all()).with(Width::wrap(MAX_COLUMN_WIDTH)))
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
