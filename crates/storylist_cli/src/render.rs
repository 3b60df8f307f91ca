//! Plain-text rendering of a `ViewModel`.

use std::fmt::Write as _;
use storylist_core::{Record, ViewModel};

const GREETING: &str = "Demo";
const TITLE: &str = "Update Item in a Complex Object with Enable/Disable. Toggle switches Done and Undo";
const TABLE_CAPTION: &str = "Stories currently in the catalog";
const HEADERS: [&str; 8] = [
    "Title",
    "Url",
    "Author",
    "Num-Comments",
    "Points",
    "ObjectID",
    "Complete",
    "",
];

/// Renders the whole screen for one frame.
pub fn render_view(view: &ViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{GREETING} {TITLE}");
    let _ = writeln!(out, "Search: [{}]", view.search_term);
    let _ = writeln!(
        out,
        "New: [{}] (Add {})",
        view.draft_title,
        if view.is_add_disabled {
            "disabled"
        } else {
            "enabled"
        }
    );

    if view.is_list_visible {
        out.push('\n');
        out.push_str(&render_table(&view.filtered_records));
    }
    out
}

/// Renders the record table with one row per record.
pub fn render_table(records: &[Record]) -> String {
    let rows = records.iter().map(row_cells).collect::<Vec<_>>();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{TABLE_CAPTION}");
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Label of the per-row toggle button.
pub fn toggle_label(record: &Record) -> &'static str {
    if record.is_complete {
        "Undo"
    } else {
        "Done"
    }
}

fn row_cells(record: &Record) -> [String; 8] {
    [
        record.title.clone(),
        record.url.clone().unwrap_or_default(),
        record.author.clone().unwrap_or_default(),
        optional_number(record.num_comments),
        optional_number(record.points),
        record.id.to_string(),
        record.is_complete.to_string(),
        format!("[Delete] [{}]", toggle_label(record)),
    ]
}

fn optional_number(value: Option<u32>) -> String {
    value.map(|number| number.to_string()).unwrap_or_default()
}

fn push_row(out: &mut String, cells: &[String; 8], widths: &[usize; 8]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
