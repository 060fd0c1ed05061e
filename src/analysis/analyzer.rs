//! Analyzer trait and implementations.
//!
//! Analyzers combine a tokenizer with a chain of filters:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Index
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`RussianAnalyzer`](language::russian::RussianAnalyzer) - Russian stop words and stemming
//! - [`PerFieldAnalyzer`](per_field::PerFieldAnalyzer) - Different analyzers per field
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::analyzer::Analyzer;
//! use rustem::analysis::analyzer::language::russian::RussianAnalyzer;
//!
//! let analyzer = RussianAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze_field("body", "Кошки").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "кошк");
//! ```

use std::io::Read;

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod language;
pub mod per_field;
pub mod pipeline;

pub use per_field::PerFieldAnalyzer;
pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
///
/// Configuration held by an analyzer is immutable and may be read from many
/// threads at once; every call builds a fresh stream with its own state.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a lazy stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Analyze text belonging to `field`.
    ///
    /// Single-language analyzers ignore the field; routing analyzers such as
    /// [`PerFieldAnalyzer`] use it to pick a delegate.
    fn analyze_field(&self, field: &str, text: &str) -> Result<TokenStream> {
        let _ = field;
        self.analyze(text)
    }

    /// Read all of `reader` and analyze it as `field`.
    ///
    /// Read failures are returned as [`RustemError::Io`](crate::error::RustemError::Io).
    fn analyze_reader(&self, field: &str, reader: &mut dyn Read) -> Result<TokenStream> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.analyze_field(field, &text)
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}
