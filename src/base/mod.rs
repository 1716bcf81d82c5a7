mod amount;
mod charset;
mod config;
mod field;
pub mod fs;
pub mod pivot;
mod selection;
mod session;
pub mod table;
mod transaction;
mod transactions;
pub mod tree;
pub mod util;
mod value;

pub use amount::Amount;
pub use charset::Charset;
pub use config::Config;
pub use field::GroupField;
pub use fs::Fs;
pub use pivot::ColumnNode;
pub use pivot::PivotResult;
pub use selection::Selection;
pub use selection::SelectionError;
pub use session::Session;
pub use transaction::Transaction;
pub use transactions::TransactionsId;
pub use transactions::Transactions;
pub use tree::Tree;
pub use value::Value;
