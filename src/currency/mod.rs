//! Currency codes and the injected exchange-rate capability.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed, case-insensitive comparison.
    pub fn matches(&self, other: &CurrencyCode) -> bool {
        self.0.trim().eq_ignore_ascii_case(other.0.trim())
    }

    /// Exactly three ASCII letters, the ISO 4217 code shape.
    pub fn is_well_formed(&self) -> bool {
        let code = self.0.trim();
        code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
    }

    fn normalized(&self) -> String {
        self.0.trim().to_uppercase()
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim())
    }
}

#[derive(Debug, Error)]
pub enum RateError {
    #[error("no exchange rate for {from} -> {to}")]
    Missing { from: String, to: String },
}

/// Injected capability that supplies exchange rates. Implementations are
/// consulted through a [`RateSession`], which owns deduplication and the
/// parity fallback.
pub trait RateProvider {
    fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64, RateError>;
}

/// Provider for single-currency requests; every pair resolves to parity.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitRates;

impl RateProvider for UnitRates {
    fn rate(&self, _from: &CurrencyCode, _to: &CurrencyCode) -> Result<f64, RateError> {
        Ok(1.0)
    }
}

/// A fixed table of rates keyed by (from, to), consulting the inverse pair
/// when the direct one is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixedRateTable {
    rates: HashMap<String, f64>,
}

impl FixedRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: &str, to: &str, rate: f64) {
        self.rates.insert(pair_key(from, to), rate);
    }

    pub fn with_rate(mut self, from: &str, to: &str, rate: f64) -> Self {
        self.insert(from, to, rate);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateProvider for FixedRateTable {
    fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64, RateError> {
        if let Some(rate) = self.rates.get(&pair_key(from.as_str(), to.as_str())) {
            return Ok(*rate);
        }
        if let Some(rate) = self.rates.get(&pair_key(to.as_str(), from.as_str())) {
            if rate.abs() > f64::EPSILON {
                return Ok(1.0 / rate);
            }
        }
        Err(RateError::Missing {
            from: from.normalized(),
            to: to.normalized(),
        })
    }
}

fn pair_key(from: &str, to: &str) -> String {
    format!(
        "{}:{}",
        from.trim().to_uppercase(),
        to.trim().to_uppercase()
    )
}

/// Per-request conversion state. Deduplicates provider lookups per distinct
/// (from, to) pair and degrades to parity when a rate is unavailable; failed
/// lookups are cached and never retried.
pub struct RateSession<'a> {
    provider: &'a dyn RateProvider,
    resolved: HashMap<String, f64>,
}

impl<'a> RateSession<'a> {
    pub fn new(provider: &'a dyn RateProvider) -> Self {
        Self {
            provider,
            resolved: HashMap::new(),
        }
    }

    /// Converts `amount` into the target currency. Same-currency pairs
    /// short-circuit without touching the provider.
    pub fn convert(&mut self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> f64 {
        if from.matches(to) {
            return amount;
        }
        amount * self.rate_for(from, to)
    }

    fn rate_for(&mut self, from: &CurrencyCode, to: &CurrencyCode) -> f64 {
        let key = pair_key(from.as_str(), to.as_str());
        if let Some(rate) = self.resolved.get(&key) {
            return *rate;
        }
        let rate = match self.provider.rate(from, to) {
            Ok(rate) => rate,
            Err(err) => {
                warn!(%from, %to, error = %err, "exchange rate unavailable, converting at parity");
                1.0
            }
        };
        self.resolved.insert(key, rate);
        rate
    }
}
