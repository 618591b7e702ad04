//! Field-level request validation, performed before the prediction core
//! runs. The core itself only keeps structural guards.

use std::fmt;

use crate::config::PredictorSettings;
use crate::domain::{CheckGoalRequest, MonthDate, PaymentItem, PredictionRequest};

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 100;
const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2999;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Ordered list of violations reported back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_request(
    request: &PredictionRequest,
    settings: &PredictorSettings,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if request.prediction_months < 1 {
        errors.push("predictionMonths", "must be at least 1");
    } else if request.prediction_months > settings.max_prediction_months {
        errors.push(
            "predictionMonths",
            format!("must not exceed {}", settings.max_prediction_months),
        );
    }

    if request.initial_budget < 0.0 {
        errors.push("initialBudget", "must not be negative");
    }

    check_month(
        "startPredictionMonth",
        request.start_prediction_month,
        &mut errors,
    );

    if !request.output_currency.is_well_formed() {
        errors.push("outputCurrency", "must be a three-letter ISO 4217 code");
    }

    for (index, item) in request.incomes.iter().enumerate() {
        check_item(&format!("incomes[{index}]"), item, &mut errors);
    }
    for (index, item) in request.expenses.iter().enumerate() {
        check_item(&format!("expenses[{index}]"), item, &mut errors);
    }

    errors.into_result()
}

pub fn validate_goal(request: &CheckGoalRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if request.prediction_id.is_nil() {
        errors.push("predictionId", "must not be empty");
    }

    check_month("month", request.month, &mut errors);

    if let Some(threshold) = request.income_higher_or_equal {
        if threshold < 0.0 {
            errors.push("incomeHigherOrEqual", "must not be negative");
        }
    }
    if let Some(threshold) = request.expense_lower_or_equal {
        if threshold < 0.0 {
            errors.push("expenseLowerOrEqual", "must not be negative");
        }
    }

    errors.into_result()
}

fn check_month(field: &str, month: MonthDate, errors: &mut ValidationErrors) {
    if !(1..=12).contains(&month.month) {
        errors.push(format!("{field}.month"), "must be between 1 and 12");
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&month.year) {
        errors.push(
            format!("{field}.year"),
            format!("must be between {MIN_YEAR} and {MAX_YEAR}"),
        );
    }
}

fn check_item(prefix: &str, item: &PaymentItem, errors: &mut ValidationErrors) {
    let name_len = item.name.trim().len();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name_len) {
        errors.push(
            format!("{prefix}.name"),
            format!("must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters"),
        );
    }

    if item.amount <= 0.0 {
        errors.push(format!("{prefix}.amount"), "must be greater than zero");
    }

    if !item.currency.is_well_formed() {
        errors.push(
            format!("{prefix}.currency"),
            "must be a three-letter ISO 4217 code",
        );
    }

    check_month(&format!("{prefix}.startDate"), item.start_date, errors);
    if let Some(end_date) = item.end_date {
        check_month(&format!("{prefix}.endDate"), end_date, errors);
    }
}
