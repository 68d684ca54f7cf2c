//! Plain-text table rendering for subcommand output.
//!
//! A small writer-friendly grid formatter: columns are sized to their widest
//! cell line, and cells may span multiple lines (the connection listing puts
//! one repo URL per line inside a single cell).

use std::io::{self, Write};

/// A renderable table with a header row.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends one row. Cells beyond the header count are dropped; missing
    /// cells render empty.
    pub fn add_row<S: Into<String>>(&mut self, row: Vec<S>) {
        let mut cells: Vec<String> = row.into_iter().map(Into::into).collect();
        cells.truncate(self.headers.len());
        self.rows.push(cells);
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let cell_width = cell
                    .lines()
                    .map(|line| line.chars().count())
                    .max()
                    .unwrap_or(0);
                if cell_width > widths[i] {
                    widths[i] = cell_width;
                }
            }
        }
        widths
    }

    fn separator(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    }

    fn format_line(cells: &[&str], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            let padding = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(padding + 1));
            line.push('|');
        }
        line
    }

    /// Renders the table to a string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let separator = Self::separator(&widths);

        let mut out = String::new();
        out.push_str(&separator);
        out.push('\n');

        let header_refs: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        out.push_str(&Self::format_line(&header_refs, &widths));
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');

        for row in &self.rows {
            // A row is as tall as its tallest cell.
            let height = row
                .iter()
                .map(|cell| cell.lines().count().max(1))
                .max()
                .unwrap_or(1);

            for line_index in 0..height {
                let cells: Vec<&str> = (0..self.headers.len())
                    .map(|col| {
                        row.get(col)
                            .and_then(|cell| cell.lines().nth(line_index))
                            .unwrap_or("")
                    })
                    .collect();
                out.push_str(&Self::format_line(&cells, &widths));
                out.push('\n');
            }
        }

        out.push_str(&separator);
        out.push('\n');
        out
    }

    /// Writes the rendered table to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Basic Rendering
    ///
    /// Tests column sizing and row layout.
    ///
    /// ## Test Scenario
    /// - Two columns where a data cell is wider than its header
    ///
    /// ## Expected Outcome
    /// - Columns align to the widest content; grid lines match widths
    #[test]
    fn test_render_basic_table() {
        let mut table = Table::new(vec!["ID", "Name"]);
        table.add_row(vec!["conn-1", "A very long connection name"]);
        table.add_row(vec!["conn-2", "Short"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "+--------+-----------------------------+");
        assert_eq!(lines[1], "| ID     | Name                        |");
        assert!(lines[3].starts_with("| conn-1 |"));
        assert_eq!(lines.len(), 6);
        // Every line is equally wide.
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }

    /// # Multi-Line Cells
    ///
    /// Tests that a cell holding newline-joined values spans rows.
    ///
    /// ## Test Scenario
    /// - One row whose second cell holds two URLs separated by a newline
    ///
    /// ## Expected Outcome
    /// - The row renders as two lines; the first carries the id
    #[test]
    fn test_render_multiline_cell() {
        let mut table = Table::new(vec!["ID", "Repos"]);
        table.add_row(vec![
            "conn-1",
            "https://github.com/org/a\nhttps://github.com/org/b",
        ]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        // separator, header, separator, two data lines, separator
        assert_eq!(lines.len(), 6);
        assert!(lines[3].contains("conn-1"));
        assert!(lines[3].contains("https://github.com/org/a"));
        assert!(!lines[4].contains("conn-1"));
        assert!(lines[4].contains("https://github.com/org/b"));
    }

    /// # Empty Table
    ///
    /// Tests rendering with headers only.
    ///
    /// ## Test Scenario
    /// - A table with no data rows
    ///
    /// ## Expected Outcome
    /// - Header block renders; row count is zero
    #[test]
    fn test_render_empty_table() {
        let table = Table::new(vec!["ID"]);
        assert_eq!(table.row_count(), 0);

        let rendered = table.render();
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.contains("| ID |"));
    }

    /// # Short Rows
    ///
    /// Tests that rows with fewer cells than headers render empty cells.
    ///
    /// ## Test Scenario
    /// - A two-column table with a one-cell row
    ///
    /// ## Expected Outcome
    /// - The missing cell renders as padding, keeping the grid aligned
    #[test]
    fn test_render_short_row() {
        let mut table = Table::new(vec!["ID", "Name"]);
        table.add_row(vec!["conn-1"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }
}
