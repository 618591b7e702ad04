use budget_predictor::config::PredictorSettings;
use budget_predictor::core::services::PredictionService;
use budget_predictor::currency::{CurrencyCode, UnitRates};
use budget_predictor::domain::{MonthDate, PaymentItem, PredictionRequest};
use budget_predictor::errors::PredictionError;
use budget_predictor::example;
use budget_predictor::store::MemoryStore;

fn month(m: u32, y: i32) -> MonthDate {
    MonthDate::new(m, y)
}

#[test]
fn a_rejected_request_reports_every_offending_field() {
    let request = PredictionRequest {
        prediction_months: 0,
        initial_budget: -10.0,
        start_prediction_month: month(13, 2025),
        incomes: vec![PaymentItem::new("ok", 0.0, month(1, 2025))],
        expenses: vec![],
        output_currency: CurrencyCode("US".into()),
    };

    let mut store = MemoryStore::new();
    let err = PredictionService::run(
        &mut store,
        &UnitRates,
        &PredictorSettings::default(),
        &request,
        None,
    )
    .unwrap_err();

    let PredictionError::Validation(errors) = err else {
        panic!("expected a validation error");
    };
    let fields: Vec<&str> = errors
        .violations()
        .iter()
        .map(|v| v.field.as_str())
        .collect();
    assert!(fields.contains(&"predictionMonths"));
    assert!(fields.contains(&"initialBudget"));
    assert!(fields.contains(&"startPredictionMonth.month"));
    assert!(fields.contains(&"outputCurrency"));
    assert!(fields.contains(&"incomes[0].name"));
    assert!(fields.contains(&"incomes[0].amount"));
}

#[test]
fn the_configured_maximum_horizon_is_enforced() {
    let mut settings = PredictorSettings::default();
    settings.max_prediction_months = 12;

    let request = example::example_request(month(1, 2025), 13, 0.0);
    let mut store = MemoryStore::new();
    let err = PredictionService::run(&mut store, &UnitRates, &settings, &request, None)
        .unwrap_err();
    assert!(matches!(err, PredictionError::Validation(_)));
}

#[test]
fn the_example_request_runs_end_to_end() {
    let settings = PredictorSettings::default();
    let request = example::example_request(
        month(1, 2025),
        settings.default_example_months,
        settings.default_initial_budget,
    );

    let mut store = MemoryStore::new();
    let result =
        PredictionService::run(&mut store, &UnitRates, &settings, &request, None).unwrap();

    assert_eq!(result.months.len(), 36);
    // Recurring salary alone outweighs recurring expenses in the sample,
    // so every month sees income.
    assert!(result.months.iter().all(|m| m.income > 0.0));
    assert!(result.summary.total_income > 0.0);
    assert!(result.summary.total_expenses > 0.0);
}
