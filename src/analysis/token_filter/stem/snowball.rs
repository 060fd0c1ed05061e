//! Snowball stemmers backed by `rust-stemmers`.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::token_filter::stem::Stemmer;
//! use rustem::analysis::token_filter::stem::snowball::SnowballStemmer;
//!
//! let stemmer = SnowballStemmer::russian();
//! assert_eq!(stemmer.stem("кошка"), "кошк");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::Stemmer;
use crate::error::{Result, RustemError};

/// Languages with a Snowball stemmer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerLanguage {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    #[default]
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl StemmerLanguage {
    fn to_algorithm(self) -> Algorithm {
        match self {
            StemmerLanguage::Arabic => Algorithm::Arabic,
            StemmerLanguage::Danish => Algorithm::Danish,
            StemmerLanguage::Dutch => Algorithm::Dutch,
            StemmerLanguage::English => Algorithm::English,
            StemmerLanguage::Finnish => Algorithm::Finnish,
            StemmerLanguage::French => Algorithm::French,
            StemmerLanguage::German => Algorithm::German,
            StemmerLanguage::Greek => Algorithm::Greek,
            StemmerLanguage::Hungarian => Algorithm::Hungarian,
            StemmerLanguage::Italian => Algorithm::Italian,
            StemmerLanguage::Norwegian => Algorithm::Norwegian,
            StemmerLanguage::Portuguese => Algorithm::Portuguese,
            StemmerLanguage::Romanian => Algorithm::Romanian,
            StemmerLanguage::Russian => Algorithm::Russian,
            StemmerLanguage::Spanish => Algorithm::Spanish,
            StemmerLanguage::Swedish => Algorithm::Swedish,
            StemmerLanguage::Tamil => Algorithm::Tamil,
            StemmerLanguage::Turkish => Algorithm::Turkish,
        }
    }
}

impl FromStr for StemmerLanguage {
    type Err = RustemError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_ascii_lowercase()))
            .map_err(|_| RustemError::invalid_config(format!("unsupported stemmer language: '{s}'")))
    }
}

/// A Snowball stemmer for one language.
pub struct SnowballStemmer {
    language: StemmerLanguage,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: StemmerLanguage) -> Self {
        SnowballStemmer {
            language,
            inner: rust_stemmers::Stemmer::create(language.to_algorithm()),
        }
    }

    pub fn russian() -> Self {
        Self::new(StemmerLanguage::Russian)
    }

    pub fn language(&self) -> StemmerLanguage {
        self.language
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::russian()
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}
