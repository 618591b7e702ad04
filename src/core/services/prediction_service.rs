use tracing::info;
use uuid::Uuid;

use crate::config::PredictorSettings;
use crate::core::PredictionEngine;
use crate::currency::RateProvider;
use crate::domain::{PredictionRequest, PredictionResult};
use crate::errors::PredictionError;
use crate::store::PredictionStore;
use crate::validate;

/// Boundary operation: validate a request, project it, and persist the
/// result under an opaque id.
pub struct PredictionService;

impl PredictionService {
    /// Runs a prediction. `put_id` reuses an existing id (replacing the
    /// stored result); otherwise a fresh id is assigned.
    pub fn run(
        store: &mut dyn PredictionStore,
        rates: &dyn RateProvider,
        settings: &PredictorSettings,
        request: &PredictionRequest,
        put_id: Option<Uuid>,
    ) -> Result<PredictionResult, PredictionError> {
        validate::validate_request(request, settings)?;

        let projection = PredictionEngine::new(rates).run(request)?;
        let id = put_id.unwrap_or_else(Uuid::new_v4);
        let result = PredictionResult {
            id,
            summary: projection.summary,
            months: projection.months,
        };
        store.put(&result)?;
        info!(%id, months = result.months.len(), "prediction stored");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{CurrencyCode, UnitRates};
    use crate::domain::{Frequency, MonthDate, PaymentItem};
    use crate::store::MemoryStore;

    fn request() -> PredictionRequest {
        let start = MonthDate::new(1, 2025);
        PredictionRequest {
            prediction_months: 2,
            initial_budget: 0.0,
            start_prediction_month: start,
            incomes: vec![PaymentItem::new("Salary", 10.0, start)
                .with_frequency(Frequency::Monthly)],
            expenses: vec![PaymentItem::new("Rent", 5.0, start)
                .with_frequency(Frequency::Monthly)],
            output_currency: CurrencyCode::default(),
        }
    }

    #[test]
    fn runs_and_stores_under_a_fresh_id() {
        let mut store = MemoryStore::new();
        let settings = PredictorSettings::default();
        let result =
            PredictionService::run(&mut store, &UnitRates, &settings, &request(), None).unwrap();

        assert!(!result.id.is_nil());
        let stored = store.get(result.id).unwrap().unwrap();
        assert_eq!(stored, result);
    }

    #[test]
    fn put_id_is_reused_and_replaces_the_stored_result() {
        let mut store = MemoryStore::new();
        let settings = PredictorSettings::default();
        let id = Uuid::new_v4();

        let first =
            PredictionService::run(&mut store, &UnitRates, &settings, &request(), Some(id))
                .unwrap();
        assert_eq!(first.id, id);

        let mut changed = request();
        changed.prediction_months = 3;
        let second =
            PredictionService::run(&mut store, &UnitRates, &settings, &changed, Some(id)).unwrap();
        assert_eq!(second.id, id);
        assert_eq!(store.get(id).unwrap().unwrap().months.len(), 3);
    }

    #[test]
    fn invalid_requests_never_reach_the_store() {
        let mut store = MemoryStore::new();
        let settings = PredictorSettings::default();
        let mut bad = request();
        bad.initial_budget = -1.0;

        let err =
            PredictionService::run(&mut store, &UnitRates, &settings, &bad, None).unwrap_err();
        assert!(matches!(err, PredictionError::Validation(_)));
    }
}
