//! Matcher settings shared by the CLI subcommands.
//!
//! Settings come from an optional JSON file:
//!
//! ```json
//! {
//!   "dictionary": "brands.txt",
//!   "emit_all_matches": false
//! }
//! ```
//!
//! Missing fields fall back to their defaults, and command line flags take
//! precedence over file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LexiphraseError, Result};

/// Settings of a dictionary words matcher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
    /// Word list (`.json`, one-per-line text) or compiled word set (`.bin`)
    pub dictionary: Option<PathBuf>,

    /// Emit every recognized phrase instead of only the longest
    pub emit_all_matches: bool,
}

impl MatcherSettings {
    /// Read settings from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexiphraseError::invalid_config(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut settings: MatcherSettings = serde_json::from_str(&content).map_err(|e| {
            LexiphraseError::invalid_config(format!(
                "failed to parse settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Dictionary paths are relative to the settings file.
        if let Some(dictionary) = settings.dictionary.take() {
            settings.dictionary = Some(match path.parent() {
                Some(parent) if dictionary.is_relative() => parent.join(dictionary),
                _ => dictionary,
            });
        }

        Ok(settings)
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, dictionary: Option<PathBuf>, emit_all_matches: bool) -> Self {
        if dictionary.is_some() {
            self.dictionary = dictionary;
        }
        self.emit_all_matches |= emit_all_matches;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings: MatcherSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, MatcherSettings::default());
        assert!(!settings.emit_all_matches);
    }

    #[test]
    fn test_from_file_resolves_dictionary() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"dictionary": "words.txt", "emit_all_matches": true}}"#).unwrap();

        let settings = MatcherSettings::from_file(file.path()).unwrap();
        let parent = file.path().parent().unwrap();
        assert_eq!(settings.dictionary, Some(parent.join("words.txt")));
        assert!(settings.emit_all_matches);
    }

    #[test]
    fn test_from_file_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = MatcherSettings::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));

        assert!(MatcherSettings::from_file("/nonexistent/settings.json").is_err());
    }

    #[test]
    fn test_overrides() {
        let settings = MatcherSettings {
            dictionary: Some(PathBuf::from("a.txt")),
            emit_all_matches: false,
        };

        let kept = settings.clone().with_overrides(None, false);
        assert_eq!(kept, settings);

        let overridden = settings.with_overrides(Some(PathBuf::from("b.bin")), true);
        assert_eq!(overridden.dictionary, Some(PathBuf::from("b.bin")));
        assert!(overridden.emit_all_matches);
    }
}
