//! Integration tests for the Russian analysis chain

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rustem::analysis::analyzer::PerFieldAnalyzer;
use rustem::analysis::token_filter::{LowercaseFilter, StemFilter, StopFilter};
use rustem::analysis::tokenizer::standard::StandardTokenStream;
use rustem::analysis::tokenizer::{LetterTokenizer, Tokenizer};
use rustem::analysis::wordlist::{
    FileResourceLoader, ResourceLoader, load_wordset, load_wordset_file,
};
use rustem::analysis::PipelineAnalyzer;
use rustem::prelude::*;
use tempfile::{NamedTempFile, TempDir};

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_default_chain_end_to_end() -> Result<()> {
    let analyzer = RussianAnalyzer::new();
    let input = "И кошка сидела на окне";

    let tokens: Vec<Token> = analyzer.analyze(input)?.collect();
    assert_eq!(texts(&tokens), vec!["кошк", "сидел", "окн"]);

    // Offsets refer to the original input and never go backwards
    let surfaces: Vec<&str> = tokens
        .iter()
        .map(|t| &input[t.start_offset..t.end_offset])
        .collect();
    assert_eq!(surfaces, vec!["кошка", "сидела", "окне"]);
    assert!(tokens.windows(2).all(|w| w[0].start_offset <= w[1].start_offset));

    // Gaps left by "и" and "на"
    let increments: Vec<usize> = tokens.iter().map(|t| t.position_increment).collect();
    assert_eq!(increments, vec![2, 1, 2]);

    Ok(())
}

#[test]
fn test_stem_exclusion_end_to_end() -> Result<()> {
    let analyzer = RussianAnalyzer::with_stem_exclusion(
        Version::CURRENT,
        RussianAnalyzer::default_stop_set(),
        Arc::new(WordSet::new(["бегать"], true)),
    );

    let tokens: Vec<Token> = analyzer.analyze("бегать")?.collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "бегать");
    assert!(tokens[0].is_keyword());

    // Uppercase input is lowercased before the exclusion check
    let tokens: Vec<Token> = analyzer.analyze("БЕГАТЬ и ходить")?.collect();
    assert_eq!(tokens[0].text, "бегать");
    assert!(tokens[0].is_keyword());
    assert!(!tokens[1].is_keyword());

    Ok(())
}

#[test]
fn test_stop_words_match_surface_forms() -> Result<()> {
    // "не" is a stop word; stemming never runs on it
    let analyzer = RussianAnalyzer::new();
    let tokens: Vec<Token> = analyzer.analyze("НЕ В окне")?.collect();
    assert_eq!(texts(&tokens), vec!["окн"]);
    assert_eq!(tokens[0].position_increment, 3);

    Ok(())
}

#[test]
fn test_degenerate_inputs() -> Result<()> {
    let analyzer = RussianAnalyzer::new();

    assert_eq!(analyzer.analyze("")?.count(), 0);
    assert_eq!(analyzer.analyze(" \t\n ")?.count(), 0);
    assert_eq!(analyzer.analyze("?!, «...»")?.count(), 0);
    assert_eq!(analyzer.analyze("и на в не")?.count(), 0);

    Ok(())
}

#[test]
fn test_numbers_and_mixed_script() -> Result<()> {
    let analyzer = RussianAnalyzer::new();
    let tokens: Vec<Token> = analyzer.analyze("В 2024 году Rust")?.collect();

    assert_eq!(tokens[0].text, "2024");
    assert_eq!(tokens[0].token_type.as_str(), "<NUM>");
    assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("rust"));

    Ok(())
}

#[test]
fn test_legacy_version() -> Result<()> {
    let config = RussianAnalyzerConfig::from_json(r#"{"version": "LUCENE_30"}"#)?;
    let analyzer = RussianAnalyzer::from_config(&config)?;
    assert_eq!(analyzer.version(), Version::LUCENE_3_0);

    let tokens: Vec<Token> = analyzer.analyze("И кошка сидела на окне")?.collect();
    assert_eq!(texts(&tokens), vec!["кошк", "сидел", "окн"]);

    Ok(())
}

#[test]
fn test_invalid_configuration() {
    assert!(matches!(
        Version::parse("LUCENE_X"),
        Err(RustemError::InvalidConfiguration(_))
    ));
    assert!(RussianAnalyzerConfig::from_json(r#"{"version": "nope"}"#).is_err());
}

#[test]
fn test_custom_wordlist_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stop.txt");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# my stop words").unwrap();
        writeln!(file, "Кошка   | case is folded").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "сидела окне").unwrap();
    }

    let set = load_wordset_file(&path, true)?;
    assert_eq!(set.len(), 3);
    assert!(set.contains("КОШКА"));

    let loader = FileResourceLoader::with_base_dir(dir.path());
    let set = Arc::new(load_wordset(&loader, "stop.txt", true)?);
    let analyzer = RussianAnalyzer::with_stop_words(Version::CURRENT, Arc::clone(&set));

    let tokens: Vec<Token> = analyzer.analyze("И кошка сидела на окне")?.collect();
    assert_eq!(texts(&tokens), vec!["и", "на"]);
    assert!(Arc::ptr_eq(analyzer.stop_words(), &set));

    Ok(())
}

#[test]
fn test_wordlist_errors() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xd0, 0x28, 0xff]).unwrap();
    file.flush().unwrap();

    let err = load_wordset_file(file.path(), true).unwrap_err();
    assert!(err.is_resource_load());

    let loader = FileResourceLoader::new();
    assert!(loader.read("/nonexistent/stop.txt").unwrap_err().is_resource_load());
}

#[test]
fn test_default_stop_set_is_shared() {
    let a = RussianAnalyzer::new();
    let b = RussianAnalyzer::default();

    assert!(Arc::ptr_eq(a.stop_words(), b.stop_words()));
    assert!(a.stop_words().contains("И"));
    assert!(!a.stop_words().is_empty());
}

#[test]
fn test_per_field_routing() -> Result<()> {
    let russian: Arc<dyn Analyzer> = Arc::new(RussianAnalyzer::new());
    let letters: Arc<dyn Analyzer> = Arc::new(
        PipelineAnalyzer::new(Arc::new(LetterTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new())),
    );

    let mut analyzer = PerFieldAnalyzer::new(russian);
    analyzer.add_analyzer("tags", letters);

    let body: Vec<Token> = analyzer.analyze_field("body", "Кошки на окне")?.collect();
    let tags: Vec<Token> = analyzer.analyze_field("tags", "Кошки на окне")?.collect();

    assert_eq!(texts(&body), vec!["кошк", "окн"]);
    assert_eq!(texts(&tags), vec!["кошки", "на", "окне"]);

    // A single-language analyzer ignores the field name
    let plain = RussianAnalyzer::new();
    let a: Vec<Token> = plain.analyze_field("title", "кошки")?.collect();
    let b: Vec<Token> = plain.analyze_field("body", "кошки")?.collect();
    assert_eq!(a, b);

    Ok(())
}

#[test]
fn test_analyze_reader() -> Result<()> {
    let analyzer = RussianAnalyzer::new();
    let mut input = "Кошка\nсидела на окне".as_bytes();

    let tokens: Vec<Token> = analyzer.analyze_reader("body", &mut input)?.collect();
    assert_eq!(texts(&tokens), vec!["кошк", "сидел", "окн"]);

    // Invalid UTF-8 in the input surfaces as an I/O error
    let mut bad: &[u8] = &[0xff, 0xfe];
    assert!(matches!(
        analyzer.analyze_reader("body", &mut bad),
        Err(RustemError::Io(_))
    ));

    Ok(())
}

#[test]
fn test_token_source_is_restartable() {
    let mut stream = StandardTokenStream::new("кошка сидела", 255);
    let first: Vec<Token> = stream.by_ref().collect();
    assert_eq!(first.len(), 2);
    assert!(stream.next().is_none());

    stream.reset("на окне");
    let second: Vec<Token> = stream.collect();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].text, "на");
    assert_eq!(second[0].start_offset, 0);
    assert_eq!(second[0].position_increment, 1);
}

/// A tokenizer that counts how many tokens were pulled from it.
struct CountingTokenizer {
    pulled: Arc<AtomicUsize>,
}

impl Tokenizer for CountingTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let pulled = Arc::clone(&self.pulled);
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        Ok(Box::new(words.into_iter().enumerate().map(move |(i, w)| {
            pulled.fetch_add(1, Ordering::SeqCst);
            Token::new(w, i)
        })))
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[test]
fn test_pipeline_is_lazy() -> Result<()> {
    let pulled = Arc::new(AtomicUsize::new(0));
    let analyzer = PipelineAnalyzer::new(Arc::new(CountingTokenizer {
        pulled: Arc::clone(&pulled),
    }))
    .add_filter(Arc::new(LowercaseFilter::new()))
    .add_filter(Arc::new(StopFilter::new()))
    .add_filter(Arc::new(StemFilter::new()));

    let text = "и кошка ".repeat(1000);
    let mut stream = analyzer.analyze(&text)?;
    assert_eq!(pulled.load(Ordering::SeqCst), 0);

    let first = stream.next().map(|t| t.text);
    assert_eq!(first.as_deref(), Some("кошк"));
    assert_eq!(pulled.load(Ordering::SeqCst), 2);

    Ok(())
}

#[test]
fn test_concurrent_analysis() -> Result<()> {
    let analyzer = Arc::new(RussianAnalyzer::new());
    let inputs = ["И кошка сидела на окне", "Собаки бегали по двору", "бегать"];

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let analyzer = Arc::clone(&analyzer);
            let input = inputs[i % inputs.len()];
            std::thread::spawn(move || -> Result<(usize, Vec<Token>)> {
                Ok((i, analyzer.analyze(input)?.collect()))
            })
        })
        .collect();

    for handle in handles {
        let (i, tokens) = handle.join().unwrap()?;
        let expected: Vec<Token> = analyzer.analyze(inputs[i % inputs.len()])?.collect();
        assert_eq!(tokens, expected);
    }

    Ok(())
}
