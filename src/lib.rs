#![doc(test(attr(deny(warnings))))]

//! Finance Tracker keeps a JSON-backed ledger of income and expense
//! transactions and renders listings, balances, and summary reports over it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing, pins the process-start date, and emits a startup log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let started = ledger::clock::process_start_date();
        tracing::info!(%started, "Finance Tracker tracing initialized.");
    });
}
