// Tue Feb 10 2026 - Alex

pub mod config;
pub mod logfile;
pub mod mapping;
pub mod report;
pub mod rewrite;
pub mod utils;

pub use config::Config;
pub use logfile::LogFile;
pub use mapping::SymbolTable;
pub use report::{ReportSink, RunSummary};
pub use rewrite::{ChainSegmenter, LineRewriter};
