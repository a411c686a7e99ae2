//! Loading word lists into a [`WordSet`].
//!
//! Two source formats are understood:
//!
//! - a `.json` file holding an array of surface strings:
//!   ```json
//!   ["U", "U盘", "AU"]
//!   ```
//! - any other file: one surface phrase per line; blank lines and lines
//!   starting with `#` are skipped.
//!
//! Each phrase is analyzed with the caller's analyzer, which must be the same
//! pipeline used at match time. Phrases that analyze to an already seen key
//! are skipped with a warning so the builder never sees a duplicate.

use std::fs;
use std::path::Path;

use crate::analysis::analyzer::Analyzer;
use crate::dictionary::analyzed_key::analyze_key;
use crate::dictionary::word_set::{WordSet, WordSetBuilder};
use crate::error::{LexiphraseError, Result};

/// Statistics of a word list load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Phrases added to the builder
    pub added: usize,
    /// Phrases whose analyzed key was already present
    pub duplicates: usize,
    /// Phrases that analyzed to no tokens
    pub empty: usize,
}

/// Parse the phrases of a word list without analyzing them.
pub fn parse_word_list(content: &str, json: bool) -> Result<Vec<String>> {
    if json {
        let phrases: Vec<String> = serde_json::from_str(content).map_err(|e| {
            LexiphraseError::dictionary(format!("Failed to parse word list JSON: {e}"))
        })?;
        return Ok(phrases);
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Analyze `phrases` and add them to `builder`, skipping duplicate keys.
pub fn add_phrases<I, S>(
    builder: &mut WordSetBuilder,
    analyzer: &dyn Analyzer,
    phrases: I,
) -> Result<LoadReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = LoadReport::default();

    for phrase in phrases {
        let phrase = phrase.as_ref();
        let Some(key) = analyze_key(analyzer, phrase)? else {
            log::warn!("skipping dictionary entry {phrase:?}: no tokens after analysis");
            report.empty += 1;
            continue;
        };
        if builder.contains_key(key.as_str()) {
            log::warn!("skipping dictionary entry {phrase:?}: duplicate of key \"{key}\"");
            report.duplicates += 1;
            continue;
        }
        builder.add(&key, phrase)?;
        report.added += 1;
    }

    Ok(report)
}

/// Load and compile the word list at `path`.
pub fn load_word_list<P: AsRef<Path>>(path: P, analyzer: &dyn Analyzer) -> Result<WordSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        LexiphraseError::dictionary(format!(
            "Failed to read word list file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let phrases = parse_word_list(&content, json)?;
    let mut builder = WordSetBuilder::new();
    let report = add_phrases(&mut builder, analyzer, &phrases)?;
    log::debug!(
        "loaded word list {} with {} analyzer: {} added, {} duplicates, {} empty",
        path.display(),
        analyzer.name(),
        report.added,
        report.duplicates,
        report.empty
    );

    builder.build()
}

/// Open a dictionary: a compiled word set (`.bin`) or a word list.
pub fn open<P: AsRef<Path>>(path: P, analyzer: &dyn Analyzer) -> Result<WordSet> {
    let path = path.as_ref();
    let compiled = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bin"));
    if compiled {
        WordSet::load(path)
    } else {
        load_word_list(path, analyzer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::standard::StandardAnalyzer;

    #[test]
    fn test_parse_lines() {
        let phrases = parse_word_list("# brands\nU盘\n\n  New York  \n", false).unwrap();
        assert_eq!(phrases, vec!["U盘", "New York"]);
    }

    #[test]
    fn test_parse_json() {
        let phrases = parse_word_list(r#"["U", "U盘", "AU"]"#, true).unwrap();
        assert_eq!(phrases, vec!["U", "U盘", "AU"]);

        assert!(parse_word_list("{not json", true).is_err());
    }

    #[test]
    fn test_add_phrases_skips_duplicates() {
        let analyzer = StandardAnalyzer::new();
        let mut builder = WordSetBuilder::new();

        let report =
            add_phrases(&mut builder, &analyzer, ["U盘", "u盘", "Ｕ盘", "...", "AU"]).unwrap();

        assert_eq!(
            report,
            LoadReport {
                added: 2,
                duplicates: 2,
                empty: 1,
            }
        );

        let word_set = builder.build().unwrap();
        // First entry wins.
        assert_eq!(word_set.get("u\u{0}盘\u{1}"), Some("U盘"));
    }
}
