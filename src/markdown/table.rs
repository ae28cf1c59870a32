//! Pipe-table rendering
//!
//! The first row always renders as the header, followed by a dash
//! separator sized to the header cells. Empty cells become a single space
//! so the pipe syntax stays well-formed.

use unicode_segmentation::UnicodeSegmentation;

/// Render a table into Markdown lines, bracketed by blank lines.
pub(crate) fn render_table(rows: &[Vec<String>], lines: &mut Vec<String>) {
    let Some((header, data_rows)) = rows.split_first() else {
        return;
    };

    // Blank line before the table unless one is already there
    if lines.last().is_some_and(|line| !line.is_empty()) {
        lines.push(String::new());
    }

    lines.push(render_row(header));

    let separator: Vec<String> = header
        .iter()
        .map(|cell| "-".repeat(display_width(cell).max(3)))
        .collect();
    lines.push(format!("| {} |", separator.join(" | ")));

    for row in data_rows {
        lines.push(render_row(row));
    }

    lines.push(String::new());
}

fn render_row(cells: &[String]) -> String {
    let rendered: Vec<&str> = cells
        .iter()
        .map(|cell| {
            let cell = cell.trim();
            if cell.is_empty() { " " } else { cell }
        })
        .collect();
    format!("| {} |", rendered.join(" | "))
}

fn display_width(cell: &str) -> usize {
    cell.trim().graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_minimal_table() {
        let mut lines = Vec::new();
        render_table(&[row(&["A", "B"]), row(&["1", "2"])], &mut lines);
        assert_eq!(lines, vec!["| A | B |", "| --- | --- |", "| 1 | 2 |", ""]);
    }

    #[test]
    fn test_separator_tracks_header_width() {
        let mut lines = Vec::new();
        render_table(&[row(&["Status", "Id"])], &mut lines);
        assert_eq!(lines[1], "| ------ | --- |");
    }

    #[test]
    fn test_empty_cells_render_as_space() {
        let mut lines = Vec::new();
        render_table(&[row(&["A", "B"]), row(&["", ""])], &mut lines);
        assert_eq!(lines[2], "|   |   |");
    }

    #[test]
    fn test_blank_line_inserted_before_table() {
        let mut lines = vec!["Some prose".to_string()];
        render_table(&[row(&["A"])], &mut lines);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "| A |");
    }
}
