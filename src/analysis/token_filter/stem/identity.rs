//! Identity stemmer implementation.

use crate::analysis::token_filter::stem::Stemmer;

/// Stemmer that leaves every word as it is.
///
/// Useful for disabling stemming in an otherwise unchanged pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_owned()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
