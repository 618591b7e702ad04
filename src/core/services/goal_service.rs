use crate::domain::CheckGoalRequest;
use crate::errors::PredictionError;
use crate::store::PredictionStore;
use crate::validate;

/// Evaluates threshold predicates against one month of a stored prediction.
pub struct GoalService;

impl GoalService {
    /// Returns whether every present threshold holds for the requested
    /// month. An unknown id or a month outside the stored horizon answers
    /// `false` rather than erroring.
    pub fn check(
        store: &dyn PredictionStore,
        request: &CheckGoalRequest,
    ) -> Result<bool, PredictionError> {
        validate::validate_goal(request)?;

        let Some(prediction) = store.get(request.prediction_id)? else {
            return Ok(false);
        };
        let Some(month) = prediction
            .months
            .iter()
            .find(|m| m.month_date == request.month)
        else {
            return Ok(false);
        };

        if let Some(threshold) = request.balance_higher_or_equal {
            if month.balance < threshold {
                return Ok(false);
            }
        }
        if let Some(threshold) = request.income_higher_or_equal {
            if month.income < threshold {
                return Ok(false);
            }
        }
        if let Some(threshold) = request.expense_lower_or_equal {
            if month.expense > threshold {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
