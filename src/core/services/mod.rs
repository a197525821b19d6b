pub mod query_service;
pub mod summary_service;
pub mod transaction_service;

pub use query_service::{AlertStatus, CategoryHit, QueryService};
pub use summary_service::{CategorySummary, CategoryTotal, MonthTotals, SummaryService};
pub use transaction_service::TransactionService;
