#![doc(test(attr(deny(warnings))))]

//! Day Ledger tracks a monthly spending budget split evenly across days,
//! records transactions against specific days, and spreads overspending onto
//! the days that follow.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        core::utils::init_tracing();
        tracing::info!("Day Ledger tracing initialized.");
    });
}
