//! Plain-text rendering of a grid table.

use std::fmt::Write;

use crate::models::Weekday;
use crate::services::{GridCell, GridTable};

const TIME_COLUMN_WIDTH: usize = 11;

/// Options for [`render_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Characters of the title shown in a class cell; also the column width.
    pub title_width: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { title_width: 20 }
    }
}

/// Lines shown for a class, top to bottom.
fn class_lines(cell: &GridCell<'_>, width: usize) -> Vec<String> {
    match cell {
        GridCell::ClassStart {
            section, period, ..
        } => vec![
            truncate(&section.title, width),
            format!("sec. {}", section.number),
            section.teacher.clone(),
            period.room().to_string(),
        ],
        _ => Vec::new(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Render the grid as a fixed-width table.
///
/// Each class shows its title, section, teacher and room on successive rows
/// of its span; lines that do not fit in the span are dropped.
pub fn render_text(grid: &GridTable<'_>, options: &TextOptions) -> String {
    let width = options.title_width.max("Wednesday".len());
    let mut out = String::new();

    let _ = write!(out, "{:<w$}", "", w = TIME_COLUMN_WIDTH);
    for day in Weekday::ALL {
        let _ = write!(out, "| {:<w$} ", day.name(), w = width);
    }
    out.push_str("|\n");

    let mut pending: Vec<std::vec::IntoIter<String>> = (0..Weekday::ALL.len())
        .map(|_| Vec::new().into_iter())
        .collect();

    for (row, cells) in grid.rows().iter().enumerate() {
        let label = GridTable::row_times(row)
            .map(|(start, end)| format!("{}-{}", start, end))
            .unwrap_or_default();
        let _ = write!(out, "{:<w$}", label, w = TIME_COLUMN_WIDTH);

        for (column, cell) in cells.iter().enumerate() {
            let text = match cell {
                GridCell::Empty => String::new(),
                GridCell::ClassStart { .. } => {
                    let mut lines = class_lines(cell, options.title_width).into_iter();
                    let first = lines.next().unwrap_or_default();
                    pending[column] = lines;
                    first
                }
                GridCell::Continuation => pending[column].next().unwrap_or_default(),
            };
            let _ = write!(out, "| {:<w$} ", truncate(&text, width), w = width);
        }
        out.push_str("|\n");
    }
    out
}
