//! Per-field analyzer.
//!
//! Routes [`Analyzer::analyze_field`] to an analyzer registered for the field,
//! or to a default one. This is where the field identifier passed to an
//! analysis call takes effect; the wrapped analyzers themselves ignore it.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// An analyzer that applies different analyzers to different fields.
///
/// Reuse a single instance with `Arc::clone` when several fields share an
/// analyzer, so they also share its stop word and exclusion sets.
///
/// # Example
///
/// ```
/// use rustem::analysis::analyzer::{Analyzer, PerFieldAnalyzer};
/// use rustem::analysis::analyzer::language::russian::RussianAnalyzer;
/// use rustem::analysis::analyzer::pipeline::PipelineAnalyzer;
/// use rustem::analysis::tokenizer::standard::StandardTokenizer;
/// use std::sync::Arc;
///
/// let mut analyzer = PerFieldAnalyzer::new(Arc::new(RussianAnalyzer::new()));
/// analyzer.add_analyzer("id", Arc::new(PipelineAnalyzer::new(Arc::new(StandardTokenizer::new()))));
///
/// let tokens: Vec<_> = analyzer.analyze_field("id", "Кошки").unwrap().collect();
/// assert_eq!(tokens[0].text, "Кошки");
/// ```
#[derive(Clone)]
pub struct PerFieldAnalyzer {
    /// Default analyzer for fields not in the map.
    default_analyzer: Arc<dyn Analyzer>,

    /// Map of field names to their specific analyzers.
    field_analyzers: AHashMap<String, Arc<dyn Analyzer>>,
}

impl PerFieldAnalyzer {
    /// Create a new per-field analyzer with a default analyzer.
    pub fn new(default_analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            default_analyzer,
            field_analyzers: AHashMap::new(),
        }
    }

    /// Add a field-specific analyzer.
    pub fn add_analyzer(&mut self, field: impl Into<String>, analyzer: Arc<dyn Analyzer>) {
        self.field_analyzers.insert(field.into(), analyzer);
    }

    /// Get the analyzer for a specific field.
    pub fn get_analyzer(&self, field: &str) -> &Arc<dyn Analyzer> {
        self.field_analyzers
            .get(field)
            .unwrap_or(&self.default_analyzer)
    }

    /// Get the default analyzer.
    pub fn default_analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.default_analyzer
    }
}

impl Analyzer for PerFieldAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.default_analyzer.analyze(text)
    }

    fn analyze_field(&self, field: &str, text: &str) -> Result<TokenStream> {
        self.get_analyzer(field).analyze_field(field, text)
    }

    fn name(&self) -> &'static str {
        "per_field"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for PerFieldAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<&str> = self.field_analyzers.keys().map(String::as_str).collect();
        fields.sort_unstable();
        f.debug_struct("PerFieldAnalyzer")
            .field("default", &self.default_analyzer.name())
            .field("fields", &fields)
            .finish()
    }
}
