//! Command implementations for Lexiphrase CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::token_filter::dictionary_words::{
    DictionaryWordsConfig, DictionaryWordsFilter,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::MatcherSettings;
use crate::dictionary::loader;
use crate::dictionary::word_set::WordSet;
use crate::error::{LexiphraseError, Result};

/// Execute a CLI command.
pub fn execute_command(args: LexiphraseArgs) -> Result<()> {
    match &args.command {
        Command::Compile(compile_args) => compile_dictionary(compile_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect_dictionary(inspect_args.clone(), &args),
    }
}

/// Compile a word list into a word set file.
fn compile_dictionary(args: CompileArgs, cli_args: &LexiphraseArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Compiling word list: {}", args.dictionary.display());
    }

    if args.output.exists() && !args.force {
        return Err(LexiphraseError::invalid_argument(
            "Output file already exists. Use --force to overwrite.",
        ));
    }

    let start_time = Instant::now();
    let word_set = loader::load_word_list(&args.dictionary, &StandardAnalyzer::new())?;
    word_set.save(&args.output)?;
    let duration = start_time.elapsed();

    output_result(
        "Word set compiled successfully",
        &CompileResult {
            source: args.dictionary.to_string_lossy().to_string(),
            output: args.output.to_string_lossy().to_string(),
            keys: word_set.len(),
            canonical_texts: word_set.word_count(),
            file_size_bytes: fs::metadata(&args.output)?.len(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Run the dictionary matcher over the given text or input file.
fn analyze_text(args: AnalyzeArgs, cli_args: &LexiphraseArgs) -> Result<()> {
    let settings = match &args.config {
        Some(path) => MatcherSettings::from_file(path)?,
        None => MatcherSettings::default(),
    }
    .with_overrides(args.dictionary.clone(), args.emit_all);

    let texts: Vec<String> = match (&args.text, &args.input) {
        (Some(text), _) => vec![text.clone()],
        (None, Some(path)) => fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect(),
        (None, None) => {
            return Err(LexiphraseError::invalid_argument(
                "either --text or --input is required",
            ));
        }
    };

    let word_set = Arc::new(open_word_set(settings.dictionary.as_deref())?);
    let filter = DictionaryWordsFilter::new(
        DictionaryWordsConfig::new(word_set)
            .with_emit_all_matches(settings.emit_all_matches),
    );
    let analyzer = StandardAnalyzer::with_filter(Arc::new(filter));
    if cli_args.verbosity() > 1 {
        println!("Pipeline: {}", analyzer.inner().describe());
    }

    let start_time = Instant::now();
    let lines = texts
        .par_iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| analyze_line(&analyzer, index + 1, text, args.matches_only))
        .collect::<Result<Vec<_>>>()?;
    let duration = start_time.elapsed();

    let total_tokens: usize = lines.iter().map(|line| line.tokens.len()).sum();
    let total_matches = lines
        .iter()
        .flat_map(|line| &line.tokens)
        .filter(|token| token.token_type == "<DICTIONARY>")
        .count();

    log::info!(
        "analyzed {} lines: {} tokens, {} dictionary matches",
        lines.len(),
        total_tokens,
        total_matches
    );

    output_result(
        "Analysis completed",
        &AnalysisResults {
            lines,
            total_tokens,
            total_matches,
            emit_all_matches: settings.emit_all_matches,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Analyze a single line.
fn analyze_line(
    analyzer: &dyn Analyzer,
    line: usize,
    text: &str,
    matches_only: bool,
) -> Result<LineAnalysis> {
    let tokens = analyzer
        .analyze(text)?
        .filter(|token| !matches_only || token.is_dictionary_match())
        .map(|token| TokenRecord::from(&token))
        .collect();

    Ok(LineAnalysis {
        line,
        text: text.to_string(),
        tokens,
    })
}

/// Open the configured dictionary, or an empty word set when none is set.
fn open_word_set(path: Option<&Path>) -> Result<WordSet> {
    match path {
        Some(path) => loader::open(path, &StandardAnalyzer::new()),
        None => {
            log::warn!("no dictionary configured; tokens pass through unchanged");
            WordSet::empty()
        }
    }
}

/// Show dictionary statistics.
fn inspect_dictionary(args: InspectArgs, cli_args: &LexiphraseArgs) -> Result<()> {
    let word_set = loader::open(&args.dictionary, &StandardAnalyzer::new())?;

    let entries = args.entries.then(|| {
        word_set
            .entries()
            .into_iter()
            .map(|(key, text)| DictionaryEntry {
                key: key.to_string(),
                text,
            })
            .collect::<Vec<_>>()
    });

    output_result(
        "Dictionary loaded",
        &DictionaryStats {
            path: args.dictionary.to_string_lossy().to_string(),
            keys: word_set.len(),
            canonical_texts: word_set.word_count(),
            automaton_size_bytes: word_set.size_in_bytes() as u64,
            entries,
        },
        cli_args,
    )?;

    Ok(())
}
