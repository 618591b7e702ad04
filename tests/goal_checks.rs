use budget_predictor::config::PredictorSettings;
use budget_predictor::core::services::{GoalService, PredictionService};
use budget_predictor::currency::{CurrencyCode, UnitRates};
use budget_predictor::domain::{
    CheckGoalRequest, Frequency, MonthDate, PaymentItem, PredictionRequest,
};
use budget_predictor::store::{JsonFileStore, MemoryStore, PredictionStore};
use uuid::Uuid;

fn month(m: u32, y: i32) -> MonthDate {
    MonthDate::new(m, y)
}

fn sample_request() -> PredictionRequest {
    PredictionRequest {
        prediction_months: 6,
        initial_budget: 500.0,
        start_prediction_month: month(1, 2025),
        incomes: vec![
            PaymentItem::new("Salary", 3000.0, month(1, 2025)).with_frequency(Frequency::Monthly),
            PaymentItem::new("Bonus", 2000.0, month(4, 2025)),
        ],
        expenses: vec![
            PaymentItem::new("Rent", 1800.0, month(1, 2025)).with_frequency(Frequency::Monthly),
        ],
        output_currency: CurrencyCode::default(),
    }
}

fn goal(id: Uuid, m: MonthDate) -> CheckGoalRequest {
    CheckGoalRequest {
        prediction_id: id,
        month: m,
        balance_higher_or_equal: None,
        income_higher_or_equal: None,
        expense_lower_or_equal: None,
    }
}

#[test]
fn goal_check_against_a_stored_prediction() {
    let mut store = MemoryStore::new();
    let settings = PredictorSettings::default();
    let result =
        PredictionService::run(&mut store, &UnitRates, &settings, &sample_request(), None).unwrap();

    // April has the one-time bonus on top of the salary.
    let mut request = goal(result.id, month(4, 2025));
    request.income_higher_or_equal = Some(5000.0);
    request.balance_higher_or_equal = Some(3200.0);
    request.expense_lower_or_equal = Some(1800.0);
    assert!(GoalService::check(&store, &request).unwrap());

    // A plain month does not meet the bonus-level income threshold.
    let mut request = goal(result.id, month(5, 2025));
    request.income_higher_or_equal = Some(5000.0);
    assert!(!GoalService::check(&store, &request).unwrap());
}

#[test]
fn goal_check_works_through_the_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let settings = PredictorSettings::default();

    let id = {
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        PredictionService::run(&mut store, &UnitRates, &settings, &sample_request(), None)
            .unwrap()
            .id
    };

    // A fresh store instance sees the persisted result.
    let store = JsonFileStore::open(dir.path()).unwrap();
    assert!(store.get(id).unwrap().is_some());

    let mut request = goal(id, month(2, 2025));
    request.balance_higher_or_equal = Some(1200.0);
    assert!(GoalService::check(&store, &request).unwrap());
}

#[test]
fn unknown_prediction_or_missing_month_answer_false() {
    let mut store = MemoryStore::new();
    let settings = PredictorSettings::default();
    let result =
        PredictionService::run(&mut store, &UnitRates, &settings, &sample_request(), None).unwrap();

    assert!(!GoalService::check(&store, &goal(Uuid::new_v4(), month(1, 2025))).unwrap());
    assert!(!GoalService::check(&store, &goal(result.id, month(7, 2025))).unwrap());
    assert!(!GoalService::check(&store, &goal(result.id, month(12, 2024))).unwrap());
}
