pub mod account;
pub mod common;
pub mod period;
pub mod student;
pub mod transaction;

pub use account::{Account, AccountCategory};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use period::{DateRange, RecognitionBasis};
pub use student::{Campus, MasterData, Student};
pub use transaction::{Transaction, TransactionStatus, TransactionType};
