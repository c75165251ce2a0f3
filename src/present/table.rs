//! Bordered text tables aligned by terminal display width.

use unicode_width::UnicodeWidthStr;

/// A two-or-more column table with a header row.
///
/// Widths are measured with `unicode-width`, so CJK and other double-width
/// characters keep the borders aligned.
///
/// ```text
/// +-------+-------+
/// | Field | Value |
/// +=======+=======+
/// | Title | Song  |
/// +-------+-------+
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(|h| sanitize(&h.into())).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(|c| sanitize(&c.into()))
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
        self
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let rule = border(&widths, '-');

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&line(&self.headers, &widths));
        out.push('\n');
        out.push_str(&border(&widths, '='));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&line(row, &widths));
            out.push('\n');
        }
        if !self.rows.is_empty() {
            out.push_str(&rule);
            out.push('\n');
        }
        out
    }
}

fn border(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat(fill).take(w + 2));
        s.push('+');
    }
    s
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        s.push(' ');
        s.push_str(cell);
        s.extend(std::iter::repeat(' ').take(w - cell.width()));
        s.push_str(" |");
    }
    s
}

/// One line per row: control characters become spaces.
fn sanitize(cell: &str) -> String {
    cell.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
