//! Russian analyzer.
//!
//! The chain is fixed:
//!
//! ```text
//! tokenizer → lowercase → stop → keyword marker → stem
//! ```
//!
//! Stop words are matched against lowercased surface forms, before stemming.
//! The keyword marker is only inserted when a stem exclusion set is given, and
//! words it marks reach the output lowercased but unstemmed.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use rustem::analysis::analyzer::Analyzer;
//! use rustem::analysis::analyzer::language::russian::RussianAnalyzer;
//! use rustem::analysis::version::Version;
//! use rustem::analysis::word_set::WordSet;
//!
//! let analyzer = RussianAnalyzer::with_stem_exclusion(
//!     Version::CURRENT,
//!     RussianAnalyzer::default_stop_set(),
//!     Arc::new(WordSet::new(["бегать"], true)),
//! );
//!
//! let tokens: Vec<_> = analyzer.analyze("Бегать").unwrap().collect();
//! assert_eq!(tokens[0].text, "бегать");
//! assert!(tokens[0].is_keyword());
//! ```

use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::{SnowballStemmer, StemFilter, Stemmer};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::letter::LetterTokenizer;
use crate::analysis::tokenizer::standard::StandardTokenizer;
use crate::analysis::tokenizer::{DEFAULT_MAX_TOKEN_LENGTH, Tokenizer};
use crate::analysis::version::Version;
use crate::analysis::word_set::WordSet;
use crate::analysis::wordlist::{default_russian_stop_set, load_wordset_file};
use crate::error::Result;

/// Configuration for [`RussianAnalyzer::from_config`].
///
/// ```
/// use rustem::analysis::analyzer::language::russian::RussianAnalyzerConfig;
///
/// let config = RussianAnalyzerConfig::from_json(
///     r#"{ "version": "LUCENE_36", "stem_exclusion": ["бегать"] }"#,
/// ).unwrap();
///
/// assert_eq!(config.version.to_string(), "3.6");
/// assert!(config.ignore_case);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RussianAnalyzerConfig {
    /// Compatibility version; selects the tokenizer.
    pub version: Version,

    /// Wordlist file for stop words. The built-in set is used when absent.
    pub stopwords: Option<PathBuf>,

    /// Words that are never stemmed.
    pub stem_exclusion: Vec<String>,

    /// Whether the stop word and exclusion sets match case-insensitively.
    pub ignore_case: bool,

    /// Tokens longer than this many characters are dropped (or split, before 3.1).
    pub max_token_length: usize,
}

impl Default for RussianAnalyzerConfig {
    fn default() -> Self {
        RussianAnalyzerConfig {
            version: Version::CURRENT,
            stopwords: None,
            stem_exclusion: Vec::new(),
            ignore_case: true,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }
}

impl RussianAnalyzerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Analyzer for Russian text.
///
/// Holds only immutable, shared configuration; a single instance can serve
/// any number of threads.
#[derive(Clone)]
pub struct RussianAnalyzer {
    inner: PipelineAnalyzer,
    version: Version,
    stop_words: Arc<WordSet>,
    stem_exclusion: Arc<WordSet>,
    stemmer: Arc<dyn Stemmer>,
    max_token_length: usize,
}

impl RussianAnalyzer {
    /// The built-in Russian stop set, shared by every analyzer that uses it.
    pub fn default_stop_set() -> Arc<WordSet> {
        default_russian_stop_set()
    }

    /// Current version, built-in stop words, no stem exclusions.
    pub fn new() -> Self {
        Self::with_stop_words(Version::CURRENT, Self::default_stop_set())
    }

    /// Use the given stop words and no stem exclusions.
    pub fn with_stop_words(version: Version, stop_words: Arc<WordSet>) -> Self {
        Self::with_stem_exclusion(version, stop_words, WordSet::empty())
    }

    /// Use the given stop words, and never stem the words in `stem_exclusion`.
    pub fn with_stem_exclusion(
        version: Version,
        stop_words: Arc<WordSet>,
        stem_exclusion: Arc<WordSet>,
    ) -> Self {
        Self::assemble(
            version,
            default_tokenizer_for(version),
            stop_words,
            stem_exclusion,
            Arc::new(SnowballStemmer::russian()),
            DEFAULT_MAX_TOKEN_LENGTH,
        )
    }

    /// Build an analyzer from a configuration, loading any wordlist it names.
    pub fn from_config(config: &RussianAnalyzerConfig) -> Result<Self> {
        let tokenizer = tokenizer_for(config.version, config.max_token_length)?;

        let stop_words = match &config.stopwords {
            Some(path) => Arc::new(load_wordset_file(path, config.ignore_case)?),
            None => Self::default_stop_set(),
        };

        let stem_exclusion = if config.stem_exclusion.is_empty() {
            WordSet::empty()
        } else {
            Arc::new(WordSet::new(
                config.stem_exclusion.iter().cloned(),
                config.ignore_case,
            ))
        };

        Ok(Self::assemble(
            config.version,
            tokenizer,
            stop_words,
            stem_exclusion,
            Arc::new(SnowballStemmer::russian()),
            config.max_token_length,
        ))
    }

    /// Replace the stemmer at the end of the chain.
    pub fn with_stemmer(self, stemmer: Arc<dyn Stemmer>) -> Self {
        let tokenizer = Arc::clone(self.inner.tokenizer());
        Self::assemble(
            self.version,
            tokenizer,
            self.stop_words,
            self.stem_exclusion,
            stemmer,
            self.max_token_length,
        )
    }

    fn assemble(
        version: Version,
        tokenizer: Arc<dyn Tokenizer>,
        stop_words: Arc<WordSet>,
        stem_exclusion: Arc<WordSet>,
        stemmer: Arc<dyn Stemmer>,
        max_token_length: usize,
    ) -> Self {
        let mut inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::with_stop_words(Arc::clone(&stop_words))));
        if !stem_exclusion.is_empty() {
            inner = inner.add_filter(Arc::new(KeywordMarkerFilter::new(Arc::clone(
                &stem_exclusion,
            ))));
        }
        let inner = inner
            .add_filter(Arc::new(StemFilter::with_stemmer(Arc::clone(&stemmer))))
            .with_name("russian");

        debug!(
            "Assembled Russian analyzer (version {version}): {} -> {}",
            inner.tokenizer().name(),
            inner.filter_names().join(" -> ")
        );

        RussianAnalyzer {
            inner,
            version,
            stop_words,
            stem_exclusion,
            stemmer,
            max_token_length,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn stop_words(&self) -> &Arc<WordSet> {
        &self.stop_words
    }

    pub fn stem_exclusion(&self) -> &Arc<WordSet> {
        &self.stem_exclusion
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

fn default_tokenizer_for(version: Version) -> Arc<dyn Tokenizer> {
    if version.on_or_after(Version::LUCENE_3_1) {
        Arc::new(StandardTokenizer::new())
    } else {
        Arc::new(LetterTokenizer::new())
    }
}

fn tokenizer_for(version: Version, max_token_length: usize) -> Result<Arc<dyn Tokenizer>> {
    if version.on_or_after(Version::LUCENE_3_1) {
        Ok(Arc::new(StandardTokenizer::with_max_token_length(
            max_token_length,
        )?))
    } else {
        Ok(Arc::new(LetterTokenizer::with_max_token_length(
            max_token_length,
        )?))
    }
}

impl Default for RussianAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for RussianAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "russian"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Debug for RussianAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RussianAnalyzer")
            .field("version", &self.version)
            .field("stop_words", &self.stop_words.len())
            .field("stem_exclusion", &self.stem_exclusion.len())
            .field("inner", &self.inner)
            .finish()
    }
}
