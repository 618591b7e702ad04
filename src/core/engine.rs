use tracing::debug;

use crate::currency::{RateProvider, RateSession};
use crate::domain::{BudgetSummary, MonthDate, MonthOutput, PredictionRequest};
use crate::errors::PredictionError;

use super::{calculator::MonthCalculator, summary};

/// The computed month sequence plus its aggregate summary.
#[derive(Debug, Clone)]
pub struct Projection {
    pub months: Vec<MonthOutput>,
    pub summary: BudgetSummary,
}

/// Drives the month-by-month projection over the whole horizon. The loop is
/// strictly sequential: each month's opening budget is the previous month's
/// closing budget.
pub struct PredictionEngine<'a> {
    provider: &'a dyn RateProvider,
}

impl<'a> PredictionEngine<'a> {
    pub fn new(provider: &'a dyn RateProvider) -> Self {
        Self { provider }
    }

    pub fn run(&self, request: &PredictionRequest) -> Result<Projection, PredictionError> {
        if request.prediction_months == 0 {
            return Err(PredictionError::InvalidRequest(
                "prediction horizon must cover at least one month".into(),
            ));
        }

        let mut rates = RateSession::new(self.provider);
        let mut months = Vec::with_capacity(request.prediction_months as usize);
        let mut budget = request.initial_budget;
        for current in MonthDate::range(request.start_prediction_month, request.prediction_months)
        {
            let month = MonthCalculator::calculate_month(request, current, budget, &mut rates);
            budget = month.budget_after;
            months.push(month);
        }
        debug!(months = months.len(), "projection complete");

        let summary = summary::reduce(&months)?;
        Ok(Projection { months, summary })
    }
}
