//! Output formatting for the server table
//!
//! The table is plain monospace text: left-justified cells, two spaces between
//! columns, every column as wide as its widest cell. The header and its dash
//! separator are kept apart from the data lines so the caller can send them to
//! a different stream.

use nordservers_core::DisplayRow;
use tabled::Tabled;

const COLUMN_GAP: &str = "  ";
const SEPARATOR_DASHES: usize = 80;

/// Table row; field order is column order.
#[derive(Tabled)]
struct ServerRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Egress Country")]
    egress_country: &'a str,
    #[tabled(rename = "Egress City")]
    egress_city: &'a str,
    #[tabled(rename = "Categories")]
    categories: &'a str,
    #[tabled(rename = "Load")]
    load: u32,
}

impl<'a> From<&'a DisplayRow> for ServerRow<'a> {
    fn from(row: &'a DisplayRow) -> Self {
        Self {
            id: &row.id,
            name: &row.name,
            egress_country: &row.egress_country,
            egress_city: &row.egress_city,
            categories: &row.categories,
            load: row.load,
        }
    }
}

/// Server rows rendered to fixed-width text.
#[derive(Debug, Clone)]
pub struct ServerTable {
    headers: Vec<String>,
    cells: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl ServerTable {
    pub fn new(rows: &[DisplayRow]) -> Self {
        let headers: Vec<String> = ServerRow::headers()
            .into_iter()
            .map(|h| h.into_owned())
            .collect();

        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                ServerRow::from(row)
                    .fields()
                    .into_iter()
                    .map(|f| f.into_owned())
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        Self {
            headers,
            cells,
            widths,
        }
    }

    /// Column widths in characters.
    #[cfg(test)]
    fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn header(&self) -> String {
        self.format_line(&self.headers)
    }

    /// Dash line under the header, one dash run per column.
    pub fn separator(&self) -> String {
        let dashes = "-".repeat(SEPARATOR_DASHES);
        self.format_line(self.widths.iter().map(|_| dashes.as_str()))
    }

    /// Data lines, in row order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| self.format_line(row))
    }

    fn format_line<I>(&self, cells: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        cells
            .into_iter()
            .zip(&self.widths)
            .map(|(cell, &width)| format!("{:<width$.width$}", cell.as_ref(), width = width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    }
}
