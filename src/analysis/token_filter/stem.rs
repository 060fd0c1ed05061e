//! Stemming token filter and stemmer implementations.
//!
//! The [`StemFilter`] delegates to any [`Stemmer`]. Tokens marked as keywords
//! are passed through untouched; everything else has its text replaced by
//! the stem.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::token::Token;
//! use rustem::analysis::token_filter::Filter;
//! use rustem::analysis::token_filter::stem::StemFilter;
//!
//! let filter = StemFilter::new(); // Snowball Russian
//! let tokens = vec![Token::new("кошка", 0), Token::new("бегать", 1).with_keyword(true)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result[0].text, "кошк");
//! assert_eq!(result[1].text, "бегать");
//! ```

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
///
/// Implementations must be deterministic: the same word always yields the
/// same stem.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod identity;
pub mod snowball;

// Re-export stemmers
pub use identity::IdentityStemmer;
pub use snowball::{SnowballStemmer, StemmerLanguage};

/// Filter that applies stemming to non-keyword tokens.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Snowball Russian stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(SnowballStemmer::russian()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(tokens.map(move |mut token| {
            if !token.keyword {
                token.text = stemmer.stem(&token.text);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
