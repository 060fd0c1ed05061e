//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first stage of the analysis pipeline. They split raw
//! text into tokens and assign offsets, positions and position increments.
//! They never set the keyword flag.
//!
//! # Available Tokenizers
//!
//! - [`standard::StandardTokenizer`] - Unicode word boundaries (UAX #29)
//! - [`letter::LetterTokenizer`] - Runs of letters and digits
//!
//! Both produce their tokens lazily: each call to `next()` scans the input
//! only as far as the following token.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::tokenizer::Tokenizer;
//! use rustem::analysis::tokenizer::standard::StandardTokenizer;
//!
//! let tokenizer = StandardTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Кошка, окно!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Default maximum token length, in characters.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// Trait for tokenizers that convert text into tokens.
///
/// Every call to [`tokenize`](Self::tokenize) returns an independent stream;
/// a tokenizer holds no per-run state and can be shared between threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod letter;
pub mod standard;

// Re-export all tokenizers for convenient access
pub use letter::LetterTokenizer;
pub use standard::StandardTokenizer;
