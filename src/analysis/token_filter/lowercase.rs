//! Lowercase filter implementation.
//!
//! Converts token text to lowercase, character by character, so that the
//! result does not depend on surrounding context. ASCII text is lowered in
//! place without allocating. Offsets and positions are never changed and no
//! token is dropped.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::token_filter::Filter;
//! use rustem::analysis::token_filter::lowercase::LowercaseFilter;
//! use rustem::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("МИР", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "мир");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercase `text` one character at a time.
pub fn lowercase(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether [`lowercase`] would change `text`.
pub fn needs_lowercase(text: &str) -> bool {
    text.chars().any(|c| {
        let mut lower = c.to_lowercase();
        !(lower.next() == Some(c) && lower.next().is_none())
    })
}

/// Lowercase `text` in place, reusing its buffer when possible.
pub fn lowercase_in_place(text: &mut String) {
    if text.is_ascii() {
        text.make_ascii_lowercase();
    } else if needs_lowercase(text) {
        *text = lowercase(text);
    }
}

/// A filter that converts tokens to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            lowercase_in_place(&mut token.text);
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
