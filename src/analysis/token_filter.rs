//! Token filter implementations for token transformation.
//!
//! A filter wraps its upstream stream and yields a new one. Filters are lazy:
//! nothing is pulled from upstream until the caller asks for the next token,
//! and a filter that drops tokens keeps pulling until it finds one to yield
//! or upstream is exhausted.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`keyword_marker::KeywordMarkerFilter`] - Protects words from stemming
//! - [`stem::StemFilter`] - Reduces non-keyword tokens to their stem
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Keyword Marker → Stemmer
//! ```
//!
//! Stop words are removed before stemming so that they are matched against
//! surface forms, not stems.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::token_filter::Filter;
//! use rustem::analysis::token_filter::lowercase::LowercaseFilter;
//! use rustem::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Кошка", 0), Token::new("ОКНО", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "кошка");
//! assert_eq!(filtered[1].text, "окно");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so a configured filter can be shared by
/// concurrent analysis runs; per-run state lives in the returned stream.
pub trait Filter: Send + Sync {
    /// Wrap `tokens` with this filter.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod keyword_marker;
pub mod lowercase;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use keyword_marker::KeywordMarkerFilter;
pub use lowercase::LowercaseFilter;
pub use stem::{IdentityStemmer, SnowballStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
