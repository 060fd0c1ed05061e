//! Language-specific analyzers.
//!
//! # Available Languages
//!
//! - [`russian`] - Russian text analysis with Snowball stop words and stemming
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
//! // "и" and "на" are filtered as stop words
//! assert_eq!(tokens.len(), 3);
//! ```

pub mod russian;
