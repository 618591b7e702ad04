use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

use super::month::MonthDate;

/// How often a payment item fires after its start month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[derive(Default)]
pub enum Frequency {
    #[default]
    OneTime,
    Monthly,
    Quarterly,
    SemiAnnually,
    Annually,
}

impl Frequency {
    /// Recurrence interval in months; `None` for one-time items.
    pub fn interval_months(self) -> Option<u32> {
        match self {
            Frequency::OneTime => None,
            Frequency::Monthly => Some(1),
            Frequency::Quarterly => Some(3),
            Frequency::SemiAnnually => Some(6),
            Frequency::Annually => Some(12),
        }
    }
}

/// A named cash-flow event belonging to one request's income or expense
/// list. Constructed once per request and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItem {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub currency: CurrencyCode,
    pub start_date: MonthDate,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MonthDate>,
}

impl PaymentItem {
    pub fn new(name: impl Into<String>, amount: f64, start_date: MonthDate) -> Self {
        Self {
            name: name.into(),
            amount,
            currency: CurrencyCode::default(),
            start_date,
            frequency: Frequency::OneTime,
            end_date: None,
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_end_date(mut self, end_date: MonthDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    /// Whether this item contributes to `target`.
    ///
    /// An end month earlier than the start month describes an empty
    /// schedule: the item never fires, not even on its start month. Recurring
    /// items match exactly the months reachable from the start month by
    /// whole interval steps, so a schedule stays anchored to its start month
    /// across year boundaries.
    pub fn occurs(&self, target: MonthDate) -> bool {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return false;
            }
            if target > end {
                return false;
            }
        }
        if target < self.start_date {
            return false;
        }
        if target == self.start_date {
            return true;
        }
        let Some(interval) = self.frequency.interval_months() else {
            return false;
        };
        let mut cursor = self.start_date;
        while cursor < target {
            cursor = cursor.add_months(interval);
        }
        cursor == target
    }
}
