//! Dashboard service
//!
//! Reads the current record set and runs it through the metrics engine.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::SpendVistaResult;
use crate::metrics::{
    categorize_expenses, compute_metrics, goal_progress, income_expense_chart,
    recent_transactions, CategoryTotal, ChartBar, GoalProgress, Metrics,
};
use crate::models::{Budget, EmergencyFund, Transaction};
use crate::storage::Storage;

/// Number of recent transactions shown when not configured
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Everything the dashboard and report views need for one reference date
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub metrics: Metrics,
    pub budget: Budget,
    pub emergency_fund: EmergencyFund,
    pub categories: Vec<CategoryTotal>,
    pub chart: [ChartBar; 2],
    /// Most recent first
    pub recent: Vec<Transaction>,
    pub goals: Vec<GoalProgress>,
}

/// Service producing dashboard snapshots
pub struct DashboardService<'a> {
    storage: &'a Storage,
    recent_count: usize,
}

impl<'a> DashboardService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }

    /// Override how many recent transactions the snapshot carries
    pub fn with_recent_count(mut self, count: usize) -> Self {
        self.recent_count = count;
        self
    }

    pub fn snapshot(&self, today: NaiveDate) -> SpendVistaResult<Dashboard> {
        let transactions = self.storage.transactions.get_all()?;
        let budget = self.storage.budget.get()?;
        let emergency_fund = self.storage.emergency.get()?;
        let goals = self.storage.goals.get_all()?;

        let metrics = compute_metrics(&transactions, &budget, &emergency_fund, today);
        let chart = income_expense_chart(&metrics);

        Ok(Dashboard {
            today,
            categories: categorize_expenses(&transactions, today),
            recent: recent_transactions(&transactions, self.recent_count)
                .into_iter()
                .cloned()
                .collect(),
            goals: goals.iter().map(goal_progress).collect(),
            chart,
            metrics,
            budget,
            emergency_fund,
        })
    }
}
