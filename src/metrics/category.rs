//! Expense breakdown by inferred category
//!
//! Transactions carry no category field. The category of an expense is the
//! first word of its name, so "Groceries Woolworths" and "Groceries Checkers"
//! both land in "Groceries". Names without any word fall into "Other".

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use super::month::MonthRef;
use crate::models::{Money, Transaction};

/// Label used when a name has no first word
pub const FALLBACK_CATEGORY: &str = "Other";

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

impl CategoryTotal {
    /// Share of `all` taken by this category, 0 when `all` is zero
    pub fn share_of(&self, all: Money) -> f64 {
        self.total.percentage_of(all)
    }
}

/// Category label for a transaction name
pub fn category_label(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(FALLBACK_CATEGORY)
}

/// Sum reference-month expenses per category
///
/// Categories appear in order of their first occurrence in `transactions`.
pub fn categorize_expenses(transactions: &[Transaction], today: NaiveDate) -> Vec<CategoryTotal> {
    let month = MonthRef::of(today);
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && month.contains(t.date))
    {
        let label = category_label(&txn.name);
        let slot = *index.entry(label).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: label.to_string(),
                total: Money::zero(),
                transaction_count: 0,
            });
            totals.len() - 1
        });

        totals[slot].total += txn.amount;
        totals[slot].transaction_count += 1;
    }

    totals
}
