//! Command implementations for the Rustem CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::language::russian::{RussianAnalyzer, RussianAnalyzerConfig};
use crate::analysis::token::Token;
use crate::analysis::version::Version;
use crate::analysis::wordlist::{
    DEFAULT_RUSSIAN_STOPWORD_FILE, load_wordset_file, try_default_russian_stop_set,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: RustemArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args, &args),
        Command::Stopwords(stopwords_args) => list_stopwords(stopwords_args, &args),
    }
}

/// Analyze text given on the command line, in a file, or on standard input.
fn analyze_text(args: &AnalyzeArgs, cli_args: &RustemArgs) -> Result<()> {
    let config = build_config(args)?;
    let analyzer = RussianAnalyzer::from_config(&config)?;
    info!(
        "Analyzing field '{}' with {} stop words, {} stem exclusions",
        args.field,
        analyzer.stop_words().len(),
        analyzer.stem_exclusion().len()
    );

    let start_time = Instant::now();
    let results = match (&args.text, &args.file) {
        (Some(text), _) => vec![AnalysisResult {
            field: args.field.clone(),
            line: None,
            tokens: analyzer.analyze_field(&args.field, text)?.collect(),
        }],
        (None, Some(path)) => analyze_lines(&analyzer, &args.field, path)?,
        (None, None) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            vec![AnalysisResult {
                field: args.field.clone(),
                line: None,
                tokens: analyze_input(&analyzer, &args.field, &mut input)?,
            }]
        }
    };
    let duration = start_time.elapsed();

    let total_tokens = results.iter().map(|r| r.tokens.len()).sum();
    output_result(
        "Analysis results",
        &AnalysisReport {
            analyzer: analyzer.name().to_string(),
            version: analyzer.version().to_string(),
            results,
            total_tokens,
            duration_ms: elapsed_ms(duration),
        },
        cli_args,
    )
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
fn elapsed_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Merge the configuration file (if any) with command line overrides.
fn build_config(args: &AnalyzeArgs) -> Result<RussianAnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading analyzer configuration from {}", path.display());
            RussianAnalyzerConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => RussianAnalyzerConfig::default(),
    };

    if let Some(tag) = &args.lucene_version {
        config.version = Version::parse(tag)?;
    }
    if let Some(path) = &args.stopwords {
        config.stopwords = Some(path.clone());
    }
    if !args.exclude.is_empty() {
        config.stem_exclusion = args
            .exclude
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
    }

    Ok(config)
}

/// Read `input` to its end and analyze it as one text.
fn analyze_input(analyzer: &dyn Analyzer, field: &str, input: &mut dyn Read) -> Result<Vec<Token>> {
    Ok(analyzer.analyze_reader(field, input)?.collect())
}

/// Analyze every line of a file in parallel, keeping input order.
fn analyze_lines(analyzer: &dyn Analyzer, field: &str, path: &Path) -> Result<Vec<AnalysisResult>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    debug!("Analyzing {} lines from {}", lines.len(), path.display());

    lines
        .par_iter()
        .enumerate()
        .map(|(idx, line)| -> Result<AnalysisResult> {
            Ok(AnalysisResult {
                field: field.to_string(),
                line: Some(idx + 1),
                tokens: analyzer.analyze_field(field, line)?.collect(),
            })
        })
        .collect()
}

/// Validate a wordlist and list its entries.
fn list_stopwords(args: &StopwordsArgs, cli_args: &RustemArgs) -> Result<()> {
    let (source, set) = match &args.file {
        Some(path) => (
            path.display().to_string(),
            Arc::new(load_wordset_file(path, true)?),
        ),
        None => (
            DEFAULT_RUSSIAN_STOPWORD_FILE.to_string(),
            try_default_russian_stop_set()?,
        ),
    };

    let words = if args.count {
        Vec::new()
    } else {
        set.sorted().into_iter().map(str::to_string).collect()
    };

    output_result(
        "Stop words",
        &StopwordsResult {
            source,
            count: set.len(),
            words,
        },
        cli_args,
    )
}
