use iso_currency::Currency;

use crate::entities::Cell;
use crate::presentation::utils::{format_amount, format_number};

/// Renders a statement matrix as aligned plain text: labels left-aligned,
/// values right-aligned. Each value column's currency is resolved from the
/// first header row so amounts carry the right symbol and decimal places.
pub(crate) struct TablePrinter;

impl TablePrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_table(&self, table: &[Vec<Cell>]) -> String {
        let column_currencies = Self::column_currencies(table);
        let rendered: Vec<Vec<String>> = table
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        Self::render_cell(cell, column_currencies.get(i).copied().flatten())
                    })
                    .collect()
            })
            .collect();

        let column_count = rendered.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; column_count];
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                if i == 0 {
                    out.push_str(&format!("{:<width$}", cell, width = widths[0]));
                } else {
                    out.push_str(&format!("  {:>width$}", cell, width = widths[i]));
                }
            }
            out.push('\n');
        }
        out
    }

    fn column_currencies(table: &[Vec<Cell>]) -> Vec<Option<Currency>> {
        table
            .first()
            .map(|header| {
                header
                    .iter()
                    .map(|cell| match cell {
                        Cell::Text(code) => Currency::from_code(code),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn render_cell(cell: &Cell, currency: Option<Currency>) -> String {
        match cell {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Date(date) => date.format("%Y-%m-%d").to_string(),
            Cell::Number(value) => match currency {
                Some(currency) => format_amount(*value, currency),
                None => format_number(*value, 2),
            },
        }
    }
}
