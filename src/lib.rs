//! # Rustem
//!
//! A language-aware text analysis pipeline for Rust.
//!
//! ## Features
//!
//! - Lazy, pull-based token streams
//! - Unicode word-boundary tokenization
//! - Case folding, stop word removal and keyword protection
//! - Pluggable stemming (Snowball Russian by default)
//! - Shared, immutable stop word sets loaded once per process

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::language::russian::{
        RussianAnalyzer, RussianAnalyzerConfig,
    };
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::version::Version;
    pub use crate::analysis::word_set::WordSet;
    pub use crate::error::{Result, RustemError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
