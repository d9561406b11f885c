// Tue Feb 10 2026 - Alex

pub mod error;
pub mod parser;
pub mod table;

pub use error::MappingError;
pub use table::{SymbolTable, FIELD_PREFIX, METHOD_PREFIX};
