//! Day-ledger domain model and the deficit spreading that keeps it consistent.

pub mod day;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use day::DayRecord;
pub use ledger::Ledger;
pub use transaction::{Transaction, MAX_CATEGORY_LEN};
