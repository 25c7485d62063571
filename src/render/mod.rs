//! Plain-text rendering of statements for terminals and logs.

pub mod statements;
pub mod table;

pub use statements::StatementRenderer;
pub use table::{Alignment, Table, TableColumn};
