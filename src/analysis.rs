//! Text analysis module for Rustem.
//!
//! This module converts raw text into a sequence of indexable tokens by
//! chaining independent stages:
//!
//! - **Tokenizers**: Break text into individual tokens
//! - **Token Filters**: Transform, drop or tag tokens pulled from upstream
//! - **Analyzers**: Combine a tokenizer and filters into a fixed pipeline
//! - **Word sets**: Immutable stop word and stem exclusion sets
//!
//! # Architecture
//!
//! ```text
//! Text → Tokenizer → Lowercase → Stop → KeywordMarker → Stem → Tokens
//! ```
//!
//! Every stage is a lazy iterator over its upstream, so a token is only
//! produced when the caller pulls it.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::analyzer::Analyzer;
//! use rustem::analysis::analyzer::language::russian::RussianAnalyzer;
//!
//! let analyzer = RussianAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("И кошка сидела на окне").unwrap().collect();
//!
//! // "и" and "на" are stop words
//! assert_eq!(tokens.len(), 3);
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
pub mod version;
pub mod word_set;
pub mod wordlist;

// Re-exports
pub use analyzer::Analyzer;
pub use analyzer::language::russian::RussianAnalyzer;
pub use analyzer::per_field::PerFieldAnalyzer;
pub use analyzer::pipeline::PipelineAnalyzer;
pub use token::{Token, TokenStream};
pub use token_filter::Filter as TokenFilter;
pub use tokenizer::Tokenizer;
pub use version::Version;
pub use word_set::WordSet;
