// Wed Feb 11 2026 - Alex

pub mod chain;
pub mod rewriter;

pub use chain::ChainSegmenter;
pub use rewriter::LineRewriter;
