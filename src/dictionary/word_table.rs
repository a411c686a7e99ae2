//! Deduplicating table of canonical texts.
//!
//! Every distinct canonical text gets a stable ordinal, assigned in insertion
//! order. The automaton stores ordinals, not texts, so two keys that map to
//! the same surface form share one table entry.

use ahash::AHashMap;

/// Append-only canonical text table keyed by ordinal.
#[derive(Clone, Debug, Default)]
pub struct WordTable {
    words: Vec<String>,
    ordinals: AHashMap<String, u64>,
}

impl WordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from texts listed in ordinal order.
    ///
    /// A repeated text keeps its first ordinal in the lookup index.
    pub fn from_words(words: Vec<String>) -> Self {
        let mut ordinals = AHashMap::with_capacity(words.len());
        for (ordinal, word) in words.iter().enumerate() {
            ordinals.entry(word.clone()).or_insert(ordinal as u64);
        }
        WordTable { words, ordinals }
    }

    /// Insert `word` and return its ordinal, reusing the existing one if the
    /// text is already present.
    pub fn add(&mut self, word: &str) -> u64 {
        if let Some(&ordinal) = self.ordinals.get(word) {
            return ordinal;
        }
        let ordinal = self.words.len() as u64;
        self.words.push(word.to_string());
        self.ordinals.insert(word.to_string(), ordinal);
        ordinal
    }

    /// Canonical text for `ordinal`.
    pub fn get(&self, ordinal: u64) -> Option<&str> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| self.words.get(index))
            .map(String::as_str)
    }

    /// Ordinal of `word`, if present.
    pub fn ordinal(&self, word: &str) -> Option<u64> {
        self.ordinals.get(word).copied()
    }

    /// Number of distinct texts.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All texts in ordinal order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
