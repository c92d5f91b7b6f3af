//! Transaction display formatting
//!
//! Table view for `transaction list` and the compact list on the dashboard.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::metrics::category_label;
use crate::models::Transaction;

use super::format::{truncate, Theme, Tone};

const NAME_WIDTH: usize = 28;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, theme: &Theme) -> Self {
        Self {
            id: txn.id.to_string(),
            date: theme.date(txn.date),
            kind: txn.kind.to_string(),
            name: truncate(&txn.name, NAME_WIDTH),
            category: if txn.is_expense() {
                category_label(&txn.name).to_string()
            } else {
                String::new()
            },
            amount: format!("{}{}", txn.kind.sign(), theme.money(txn.amount)),
        }
    }
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[Transaction], theme: &Theme) -> String {
    if transactions.is_empty() {
        return "No transactions yet. Add your first transaction to get started!".to_string();
    }

    let rows = transactions.iter().map(|t| TransactionRow::new(t, theme));
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()))
        .to_string()
}

/// One line per transaction: date, name and signed amount
pub fn format_transaction_short(txn: &Transaction, theme: &Theme) -> String {
    let amount = format!("{} {}", txn.kind.sign(), theme.money(txn.amount));
    let amount = if txn.is_income() {
        theme.paint(Tone::Positive, &amount)
    } else {
        theme.paint(Tone::Danger, &amount)
    };

    format!(
        "{}  {:<width$}  {}  [{}]",
        theme.date(txn.date),
        truncate(&txn.name, NAME_WIDTH),
        amount,
        txn.id,
        width = NAME_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn test_empty_table() {
        let output = format_transaction_table(&[], &Theme::default());
        assert!(output.starts_with("No transactions yet."));
    }

    #[test]
    fn test_table_contents() {
        let transactions = vec![
            Transaction::income("Salary", Money::from_units(1000), date()),
            Transaction::expense("Groceries Woolworths", Money::from_cents(20050), date()),
        ];

        let output = format_transaction_table(&transactions, &Theme::default());
        assert!(output.contains("Salary"));
        assert!(output.contains("+R1000.00"));
        assert!(output.contains("-R200.50"));
        assert!(output.contains("Groceries"));
        assert!(output.contains(&transactions[0].id.to_string()));
    }

    #[test]
    fn test_short_format() {
        let txn = Transaction::expense("Coffee", Money::from_cents(3550), date());
        let line = format_transaction_short(&txn, &Theme::default());
        assert!(line.starts_with("2026-10-15  Coffee"));
        assert!(line.contains("- R35.50"));
    }
}
