//! Terminal view - draws the transaction table with comfy-table

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use rust_decimal::Decimal;

use expense_core::{Transaction, TransactionView};

use crate::output::create_table;

/// Background used for rows matching the current filter
const HIGHLIGHT: Color = Color::Rgb { r: 173, g: 255, b: 168 };

struct TableRow {
    amount: Decimal,
    category: String,
    date: String,
}

/// Prints the table every time the controller updates it
#[derive(Default)]
pub struct TerminalView {
    rows: Vec<TableRow>,
    highlighted: Vec<bool>,
    quiet: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view that keeps state but never prints
    #[cfg(test)]
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    #[cfg(test)]
    pub fn highlighted(&self) -> &[bool] {
        &self.highlighted
    }

    /// Build the table as currently shown
    pub fn render(&self) -> Table {
        let mut table = create_table();
        table.set_header(vec!["#", "Amount", "Category", "Date"]);

        for (i, row) in self.rows.iter().enumerate() {
            let mut cells = vec![
                Cell::new(i),
                Cell::new(format!("{:.2}", row.amount)).set_alignment(CellAlignment::Right),
                Cell::new(&row.category),
                Cell::new(&row.date),
            ];
            if self.highlighted.get(i).copied().unwrap_or(false) {
                cells = cells
                    .into_iter()
                    .map(|c| c.bg(HIGHLIGHT).fg(Color::Black))
                    .collect();
            }
            table.add_row(cells);
        }

        let total = self
            .rows
            .iter()
            .fold(Decimal::ZERO, |total, r| total.saturating_add(r.amount));
        table.add_row(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", total))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(""),
        ]);

        table
    }

    /// Print the table
    pub fn show(&self) {
        if !self.quiet {
            println!("{}", self.render());
        }
    }
}

impl TransactionView for TerminalView {
    fn refresh(&mut self, transactions: &[Transaction]) {
        self.rows = transactions
            .iter()
            .map(|t| TableRow {
                amount: t.amount(),
                category: t.category().to_string(),
                date: t.timestamp(),
            })
            .collect();
        self.highlighted = vec![false; self.rows.len()];
        self.show();
    }

    fn highlight_rows(&mut self, rows: &[bool]) {
        self.highlighted = (0..self.rows.len())
            .map(|i| rows.get(i).copied().unwrap_or(false))
            .collect();
        self.show();
    }
}
