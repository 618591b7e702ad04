use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::month::MonthDate;

/// One projected month, produced exactly once per month per request in
/// calendar order. `balance` is the month's own net (income - expense);
/// `budget_after` is the cumulative budget carried forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthOutput {
    pub month_date: MonthDate,
    pub budget_after: f64,
    pub balance: f64,
    pub income: f64,
    pub expense: f64,
}

/// Aggregate statistics derived from a completed month sequence. Starting
/// and ending balances are single-month nets, not the cumulative budget;
/// extrema report the earliest month on ties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub starting_balance: f64,
    pub ending_balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub lowest_balance: f64,
    pub lowest_balance_date: MonthDate,
    pub highest_balance: f64,
    pub highest_balance_date: MonthDate,
}

/// The unit stored in and retrieved from the prediction store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub id: Uuid,
    pub summary: BudgetSummary,
    pub months: Vec<MonthOutput>,
}
