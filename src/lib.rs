#![doc(test(attr(deny(warnings))))]

//! Budget Predictor projects a cash balance forward over a monthly horizon
//! from recurring and one-time payment items, and offers goal checks against
//! stored predictions.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod example;
pub mod store;
pub mod utils;
pub mod validate;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Predictor tracing initialized.");
    });
}
