//! Ledger domain model, aggregation, and display helpers.

pub mod clock;
pub mod format;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use clock::{Clock, SystemClock};
pub use ledger::{Ledger, DEFAULT_DATA_FILE};
pub use summary::SummaryReport;
pub use transaction::{Transaction, TransactionKind};
