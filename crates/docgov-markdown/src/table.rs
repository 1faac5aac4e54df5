//! Pipe-table parsing
//!
//! Parses a markdown pipe table into fixed-width row tuples. Header and
//! separator lines are filtered during the scan; they are never materialized
//! as rows.

/// One data row of a pipe table: the first four trimmed cells, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Cell values, trimmed, outer pipes discarded
    pub cells: [String; 4],
}

impl TableRow {
    /// Cell by column index
    #[inline]
    #[must_use]
    pub fn cell(&self, idx: usize) -> &str {
        &self.cells[idx]
    }
}

/// A table cell that is expected to hold an inline-code path or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathCell {
    /// The literal `-`, meaning "no value"
    NoValue,
    /// A single-backtick-quoted relative path
    Path(String),
}

/// Classify a cell as `-`, a backtick-quoted path, or malformed (`None`).
///
/// The literal `-` is a deliberate "no value" marker and must be
/// distinguished from an empty or unquoted cell, which is malformed.
#[must_use]
pub fn parse_path_cell(cell: &str) -> Option<PathCell> {
    let cell = cell.trim();
    if cell == "-" {
        return Some(PathCell::NoValue);
    }
    if cell.len() >= 2 && cell.starts_with('`') && cell.ends_with('`') {
        return Some(PathCell::Path(cell[1..cell.len() - 1].to_string()));
    }
    None
}

/// Parse every data row of the pipe tables in `text`.
///
/// Candidate lines start with `|` after trimming. Each candidate is split on
/// `|`, the empty outer cells produced by the leading and trailing pipes are
/// discarded, and the remaining cells are trimmed. A candidate is rejected
/// when it has fewer than four cells, when its first cell equals
/// `header_label`, or when every character across all its cells is a dash
/// (the separator line). Surviving rows keep document order.
#[must_use]
pub fn parse_table_rows(text: &str, header_label: &str) -> Vec<TableRow> {
    let mut rows = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if !line.starts_with('|') {
            continue;
        }

        let cells: Vec<&str> = line
            .trim_matches('|')
            .split('|')
            .map(str::trim)
            .collect();

        if cells.len() < 4 {
            continue;
        }
        if cells[0] == header_label {
            continue;
        }
        if is_separator(&cells) {
            continue;
        }

        rows.push(TableRow {
            cells: [
                cells[0].to_string(),
                cells[1].to_string(),
                cells[2].to_string(),
                cells[3].to_string(),
            ],
        });
    }

    rows
}

/// Separator lines collapse to dashes: every character of every cell is `-`.
fn is_separator(cells: &[&str]) -> bool {
    let mut saw_dash = false;
    for cell in cells {
        for ch in cell.chars() {
            if ch != '-' {
                return false;
            }
            saw_dash = true;
        }
    }
    saw_dash
}
