use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};

use redacao_core::{FrequencyGrid, FrequencyTable, Summary};
use redacao_model::{CategoryKind, EssayStatus, SchoolAdminType, label_of, parse_code};

/// Sentinel shown when a statistic has no value (empty filter result).
pub const NOT_APPLICABLE: &str = "n/a";

/// Resolve a raw dimension value for display. Coded dimensions go
/// through the registry (with its numeral fallback); free-text
/// dimensions pass through unchanged.
pub fn display_value(kind: Option<CategoryKind>, raw: &str) -> String {
    match (kind, parse_code(raw)) {
        (Some(kind), Some(code)) => label_of(kind, code),
        _ => raw.to_string(),
    }
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn share(count: u64, total: u64) -> String {
    if total == 0 {
        "-".to_string()
    } else {
        format!("{:.1}", count as f64 * 100.0 / total as f64)
    }
}

/// One-dimensional frequency table with counts, shares, and a TOTAL
/// row. Entries arrive already sorted by descending count.
pub fn render_frequency(
    frequency: &FrequencyTable,
    title: &str,
    kind: Option<CategoryKind>,
) -> Table {
    let mut table = styled_table();
    table.set_header(vec![title, "Records", "Share %"]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let total = frequency.total();
    for (value, count) in frequency.entries() {
        table.add_row(vec![
            Cell::new(display_value(kind, value)),
            Cell::new(count),
            Cell::new(share(*count, total)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL"),
        Cell::new(total),
        Cell::new(share(total, total)),
    ]);
    table
}

/// Two-dimensional grid as a matrix: one row per row-domain value,
/// one column per column-domain value, zero-filled cells included.
pub fn render_grid(
    grid: &FrequencyGrid,
    row_title: &str,
    row_kind: Option<CategoryKind>,
    column_kind: Option<CategoryKind>,
) -> Table {
    let mut table = styled_table();
    let mut header = vec![row_title.to_string()];
    header.extend(
        grid.column_domain()
            .iter()
            .map(|value| display_value(column_kind, value)),
    );
    table.set_header(header);
    for index in 1..=grid.column_domain().len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for value in grid.row_domain() {
        let mut cells = vec![Cell::new(display_value(row_kind, value))];
        if let Some(counts) = grid.row(value) {
            cells.extend(counts.iter().map(Cell::new));
        }
        table.add_row(cells);
    }
    table
}

/// Summary block for one dimension: total plus both extremes, with a
/// sentinel when the filtered table is empty.
pub fn render_summary(summary: &Summary, title: &str, kind: Option<CategoryKind>) -> Table {
    let mut table = styled_table();
    table.set_header(vec![title, "Category", "Records"]);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new("-"),
        Cell::new(summary.total),
    ]);
    for (label, extreme) in [
        ("Most frequent", summary.most_frequent.as_ref()),
        ("Least frequent", summary.least_frequent.as_ref()),
    ] {
        match extreme {
            Some(entry) => table.add_row(vec![
                Cell::new(label),
                Cell::new(display_value(kind, &entry.value)),
                Cell::new(entry.count),
            ]),
            None => table.add_row(vec![
                Cell::new(label),
                Cell::new(NOT_APPLICABLE),
                Cell::new("-"),
            ]),
        };
    }
    table
}

/// The status-code registry as a reference table.
pub fn render_status_codes() -> Table {
    let mut table = styled_table();
    table.set_header(vec!["Code", "Essay status"]);
    align_column(&mut table, 0, CellAlignment::Right);
    for status in EssayStatus::ALL {
        table.add_row(vec![Cell::new(status.code()), Cell::new(status.label())]);
    }
    table
}

/// The administration-type registry as a reference table.
pub fn render_admin_types() -> Table {
    let mut table = styled_table();
    table.set_header(vec!["Code", "School administration"]);
    align_column(&mut table, 0, CellAlignment::Right);
    for admin in SchoolAdminType::ALL {
        table.add_row(vec![Cell::new(admin.code()), Cell::new(admin.label())]);
    }
    table
}
