use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;

use super::{month::MonthDate, payment::PaymentItem};

/// Input for one projection run. Owns its payment item lists exclusively;
/// items are never shared across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub prediction_months: u32,
    pub initial_budget: f64,
    pub start_prediction_month: MonthDate,
    #[serde(default)]
    pub incomes: Vec<PaymentItem>,
    #[serde(default)]
    pub expenses: Vec<PaymentItem>,
    #[serde(default)]
    pub output_currency: CurrencyCode,
}

impl PredictionRequest {
    /// Income items that fire in `month`.
    pub fn month_incomes(&self, month: MonthDate) -> impl Iterator<Item = &PaymentItem> {
        self.incomes.iter().filter(move |item| item.occurs(month))
    }

    /// Expense items that fire in `month`.
    pub fn month_expenses(&self, month: MonthDate) -> impl Iterator<Item = &PaymentItem> {
        self.expenses.iter().filter(move |item| item.occurs(month))
    }
}

/// Threshold predicates evaluated against one month of a stored prediction.
/// All present thresholds must hold for the goal to be met.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckGoalRequest {
    pub prediction_id: Uuid,
    pub month: MonthDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_higher_or_equal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_higher_or_equal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_lower_or_equal: Option<f64>,
}
