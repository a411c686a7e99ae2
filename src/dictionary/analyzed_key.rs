//! Encoding of dictionary entries as analyzed keys.
//!
//! An analyzed key is the sequence of normalized token texts of a dictionary
//! entry, joined by [`SEPARATOR`] and terminated by [`END`]:
//!
//! ```text
//! "U盘"        → ["u", "盘"]            → "u\u{0}盘\u{1}"
//! "New York"   → ["new", "york"]        → "new\u{0}york\u{1}"
//! ```
//!
//! Both reserved symbols are control characters that the analysis pipeline
//! never emits inside token text.

use std::fmt;

use crate::analysis::analyzer::Analyzer;
use crate::error::{LexiphraseError, Result};

/// Joins the tokens of a multi-token key.
pub const SEPARATOR: char = '\u{0}';

/// Terminates every key.
pub const END: char = '\u{1}';

/// A separator/end encoded dictionary key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnalyzedKey(String);

impl AnalyzedKey {
    /// Build a key from already normalized token texts.
    ///
    /// Returns `None` when there are no tokens.
    ///
    /// ```
    /// use lexiphrase::dictionary::analyzed_key::AnalyzedKey;
    ///
    /// let key = AnalyzedKey::from_tokens(["new", "york"]).unwrap();
    /// assert_eq!(key.as_str(), "new\u{0}york\u{1}");
    /// assert_eq!(key.tokens().collect::<Vec<_>>(), vec!["new", "york"]);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for token in tokens {
            if !key.is_empty() {
                key.push(SEPARATOR);
            }
            key.push_str(token.as_ref());
        }
        if key.is_empty() {
            return None;
        }
        key.push(END);
        Some(AnalyzedKey(key))
    }

    /// Wrap an already encoded key without checking it.
    pub fn from_encoded<S: Into<String>>(encoded: S) -> Self {
        AnalyzedKey(encoded.into())
    }

    /// The encoded key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The normalized token texts the key was built from.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0
            .strip_suffix(END)
            .unwrap_or(&self.0)
            .split(SEPARATOR)
    }

    /// Number of tokens in the key.
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}

impl AsRef<str> for AnalyzedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalyzedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Run `surface` through `analyzer` and encode the resulting tokens.
///
/// Returns `Ok(None)` when the text analyzes to no tokens at all, and an
/// analysis error when any token is empty or contains a reserved symbol.
pub fn analyze_key(analyzer: &dyn Analyzer, surface: &str) -> Result<Option<AnalyzedKey>> {
    let mut texts = Vec::new();
    for token in analyzer.analyze(surface)? {
        if token.is_empty() {
            return Err(LexiphraseError::analysis(format!(
                "term: {surface} analyzed to a zero-length token"
            )));
        }
        if contains_reserved(&token.text) {
            return Err(LexiphraseError::analysis(format!(
                "term: {surface} analyzed to a token containing a reserved symbol"
            )));
        }
        texts.push(token.text);
    }
    Ok(AnalyzedKey::from_tokens(texts))
}

/// Whether `text` contains [`SEPARATOR`] or [`END`].
pub fn contains_reserved(text: &str) -> bool {
    text.contains([SEPARATOR, END])
}

/// Whether an encoded key has an empty token: a leading or trailing
/// separator, or two separators in a row.
///
/// Only used for assertions.
pub fn has_holes(key: &str) -> bool {
    let body = key.strip_suffix(END).unwrap_or(key);
    body.starts_with(SEPARATOR)
        || body.ends_with(SEPARATOR)
        || body.contains("\u{0}\u{0}")
}
