#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the accounting primitives behind a personal-finance
//! tracker: multi-currency ledger records, custom accounting periods, and the
//! pure aggregation queries that dashboards, budgets, and account views
//! consume.

pub mod currency;
pub mod errors;
pub mod ledger;
pub mod reports;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
