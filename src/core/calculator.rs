use crate::currency::RateSession;
use crate::domain::{MonthDate, MonthOutput, PredictionRequest};

/// Stateless single-month step of the prediction loop. All dependencies come
/// in as parameters; there is no ambient state to configure.
pub struct MonthCalculator;

impl MonthCalculator {
    /// Sums the items firing in `month`, converts them into the request's
    /// output currency, and folds the running budget forward.
    pub fn calculate_month(
        request: &PredictionRequest,
        month: MonthDate,
        budget_before: f64,
        rates: &mut RateSession<'_>,
    ) -> MonthOutput {
        let income: f64 = request
            .month_incomes(month)
            .map(|item| rates.convert(item.amount, &item.currency, &request.output_currency))
            .sum();
        let expense: f64 = request
            .month_expenses(month)
            .map(|item| rates.convert(item.amount, &item.currency, &request.output_currency))
            .sum();

        let balance = income - expense;
        let budget_after = budget_before + balance;

        MonthOutput {
            month_date: month,
            budget_after,
            balance,
            income,
            expense,
        }
    }
}
