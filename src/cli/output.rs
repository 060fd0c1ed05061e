//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, RustemArgs};
use crate::error::Result;

/// Tokens produced for one input (the whole text, or one line of a file).
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub field: String,
    /// 1-based line number when the input came from a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub tokens: Vec<Token>,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analyzer: String,
    pub version: String,
    pub results: Vec<AnalysisResult>,
    pub total_tokens: usize,
    pub duration_ms: u64,
}

/// Result structure for the stopwords command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopwordsResult {
    pub source: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<String>,
}

/// Results that know how to print themselves for people.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()>;
}

impl HumanOutput for AnalysisReport {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        for result in &self.results {
            if let Some(line) = result.line {
                writeln!(out, "Line {line}:")?;
            }
            for token in &result.tokens {
                writeln!(out, "{}", format_token(token))?;
            }
        }

        if verbosity > 1 {
            writeln!(out)?;
            writeln!(
                out,
                "{} tokens ({} analyzer, version {}) in {} ms",
                self.total_tokens, self.analyzer, self.version, self.duration_ms
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for StopwordsResult {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> io::Result<()> {
        if verbosity > 1 {
            writeln!(out, "Source: {}", self.source)?;
        }
        if self.words.is_empty() {
            writeln!(out, "{}", self.count)?;
        } else {
            for word in &self.words {
                writeln!(out, "{word}")?;
            }
        }
        Ok(())
    }
}

/// Output a result to standard output in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &RustemArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)?;
    out.flush()?;
    Ok(())
}

/// Write a result in the specified format.
pub fn write_result<T>(out: &mut dyn Write, message: &str, result: &T, args: &RustemArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(out, message, result, args),
        OutputFormat::Json => output_json(out, result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &RustemArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    result.write_human(out, args.verbosity())?;
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(out: &mut dyn Write, result: &T, args: &RustemArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

/// One token per line: position, text, byte span, type and the keyword flag.
fn format_token(token: &Token) -> String {
    let mut line = format!(
        "{}\t{}\t[{}..{}]\t{}",
        token.position,
        token.text,
        token.start_offset,
        token.end_offset,
        token.token_type.as_str()
    );
    if token.position_increment != 1 {
        line.push_str(&format!("\t+{}", token.position_increment));
    }
    if token.is_keyword() {
        line.push_str("\tkeyword");
    }
    line
}
