use crate::domain::{BudgetSummary, MonthOutput};
use crate::errors::PredictionError;

/// Reduces an ordered month sequence into aggregate statistics in a single
/// pass. Extrema comparisons are strict, so the earliest month wins ties.
pub fn reduce(months: &[MonthOutput]) -> Result<BudgetSummary, PredictionError> {
    let (first, last) = match (months.first(), months.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(PredictionError::EmptyMonths),
    };

    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut lowest = first;
    let mut highest = first;
    for month in months {
        total_income += month.income;
        total_expenses += month.expense;
        if month.balance < lowest.balance {
            lowest = month;
        }
        if month.balance > highest.balance {
            highest = month;
        }
    }

    Ok(BudgetSummary {
        starting_balance: first.balance,
        ending_balance: last.balance,
        total_income,
        total_expenses,
        lowest_balance: lowest.balance,
        lowest_balance_date: lowest.month_date,
        highest_balance: highest.balance,
        highest_balance_date: highest.month_date,
    })
}
