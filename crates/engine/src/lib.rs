pub use error::EngineError;
pub use ledger::{Appended, Ledger};
pub use money::Money;
pub use snapshot::{SnapshotError, SnapshotFile};
pub use stats::{CategoryTotals, balance, category_totals};
pub use transactions::{Transaction, TransactionKind};
pub use window::{Window, filter_by_window, window_start};

mod error;
mod ledger;
mod money;
mod snapshot;
mod stats;
mod transactions;
mod window;

type ResultEngine<T> = Result<T, EngineError>;
