//! Compiled dictionary: a shared automaton over analyzed keys plus the
//! canonical text table its outputs point into.
//!
//! The automaton is an `fst` transducer. Each code point of an analyzed key is
//! walked as its UTF-8 bytes, and byte order matches code point order, so the
//! lexicographically sorted keys the builder feeds to `fst` are sorted by code
//! point as well. The output accumulated along an accepting path is the
//! ordinal of the entry's canonical text.
//!
//! # Examples
//!
//! ```
//! use lexiphrase::analysis::analyzer::standard::StandardAnalyzer;
//! use lexiphrase::dictionary::word_set::WordSet;
//!
//! let analyzer = StandardAnalyzer::new();
//! let mut builder = WordSet::builder();
//! builder.add_phrase(&analyzer, "U盘").unwrap();
//! builder.add_phrase(&analyzer, "New York").unwrap();
//! let word_set = builder.build().unwrap();
//!
//! assert_eq!(word_set.len(), 2);
//! assert_eq!(word_set.get("new\u{0}york\u{1}"), Some("New York"));
//!
//! // Walk "u", then the separator, then "盘" and the end symbol.
//! let cursor = word_set.step_token(word_set.start(), "u").unwrap();
//! let cursor = word_set.step_separator(cursor).unwrap();
//! let cursor = word_set.step_token(cursor, "盘").unwrap();
//! assert_eq!(word_set.match_end(cursor), Some("U盘"));
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use fst::Streamer;
use fst::raw::{Builder, Fst, Output};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::dictionary::analyzed_key::{self, AnalyzedKey, END, SEPARATOR};
use crate::dictionary::cursor::{Cursor, combine};
use crate::dictionary::word_table::WordTable;
use crate::error::{LexiphraseError, Result};

const FORMAT_VERSION: u32 = 1;

/// Immutable compiled dictionary.
///
/// `WordSet` holds no interior mutability, so a single instance can be shared
/// through an `Arc` by any number of matchers on any number of threads.
pub struct WordSet {
    fst: Fst<Vec<u8>>,
    words: WordTable,
}

/// On-disk layout of a compiled word set.
#[derive(Serialize, Deserialize)]
struct WordSetFile {
    version: u32,
    fst: Vec<u8>,
    words: Vec<String>,
}

impl WordSet {
    /// Start building a new word set.
    pub fn builder() -> WordSetBuilder {
        WordSetBuilder::new()
    }

    /// A word set without entries. Matching against it never completes.
    pub fn empty() -> Result<Self> {
        WordSetBuilder::new().build()
    }

    /// Cursor at the initial state.
    pub fn start(&self) -> Cursor {
        Cursor::new(self.fst.root().addr(), Output::zero())
    }

    fn step_byte(&self, cursor: Cursor, input: u8) -> Option<Cursor> {
        let node = self.fst.node(cursor.addr);
        let index = node.find_input(input)?;
        let transition = node.transition(index);
        Some(Cursor::new(
            transition.addr,
            combine(cursor.output, transition.out),
        ))
    }

    /// Follow the transition for one code point.
    pub fn step_char(&self, cursor: Cursor, c: char) -> Option<Cursor> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf)
            .bytes()
            .try_fold(cursor, |cursor, byte| self.step_byte(cursor, byte))
    }

    /// Follow the transitions for every code point of a token text.
    ///
    /// Returns `None` as soon as a code point has no outgoing transition.
    pub fn step_token(&self, cursor: Cursor, text: &str) -> Option<Cursor> {
        text.chars()
            .try_fold(cursor, |cursor, c| self.step_char(cursor, c))
    }

    /// Follow the separator transition, i.e. continue into the next token of
    /// a longer key.
    pub fn step_separator(&self, cursor: Cursor) -> Option<Cursor> {
        self.step_byte(cursor, SEPARATOR as u8)
    }

    /// Follow the end transition and return the ordinal of the canonical text
    /// of the key that ends here.
    pub fn step_end(&self, cursor: Cursor) -> Option<u64> {
        let cursor = self.step_byte(cursor, END as u8)?;
        let node = self.fst.node(cursor.addr);
        if !node.is_final() {
            return None;
        }
        Some(combine(cursor.output, node.final_output()).value())
    }

    /// Canonical text of the key ending at `cursor`, if any.
    pub fn match_end(&self, cursor: Cursor) -> Option<&str> {
        self.step_end(cursor).and_then(|ordinal| self.word(ordinal))
    }

    /// Canonical text for `ordinal`.
    pub fn word(&self, ordinal: u64) -> Option<&str> {
        self.words.get(ordinal)
    }

    /// Canonical text for an encoded analyzed key.
    pub fn get(&self, analyzed_key: &str) -> Option<&str> {
        let output = self.fst.get(analyzed_key.as_bytes())?;
        self.word(output.value())
    }

    /// Number of analyzed keys.
    pub fn len(&self) -> usize {
        self.fst.len()
    }

    /// Whether the word set has no keys.
    pub fn is_empty(&self) -> bool {
        self.fst.len() == 0
    }

    /// Number of distinct canonical texts.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Size of the automaton in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.fst.size()
    }

    /// All keys with their canonical texts, in key order.
    pub fn entries(&self) -> Vec<(AnalyzedKey, String)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut stream = self.fst.stream();
        while let Some((key, output)) = stream.next() {
            let key = AnalyzedKey::from_encoded(String::from_utf8_lossy(key));
            let word = self.word(output.value()).unwrap_or_default().to_string();
            entries.push((key, word));
        }
        entries
    }

    /// Serialize the compiled word set.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let file = WordSetFile {
            version: FORMAT_VERSION,
            fst: self.fst.as_bytes().to_vec(),
            words: self.words.words().to_vec(),
        };
        Ok(bincode::serialize(&file)?)
    }

    /// Deserialize a word set written by [`WordSet::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let file: WordSetFile = bincode::deserialize(bytes)?;
        if file.version != FORMAT_VERSION {
            return Err(LexiphraseError::dictionary(format!(
                "unsupported word set format version {} (expected {})",
                file.version, FORMAT_VERSION
            )));
        }

        // Fst::new only checks the header and footer; the checksum covers the nodes.
        let fst = Fst::new(file.fst)?;
        fst.verify()?;

        let word_set = WordSet {
            fst,
            words: WordTable::from_words(file.words),
        };

        let mut stream = word_set.fst.stream();
        while let Some((_, output)) = stream.next() {
            if word_set.word(output.value()).is_none() {
                return Err(LexiphraseError::dictionary(format!(
                    "word set refers to missing canonical text {}",
                    output.value()
                )));
            }
        }

        Ok(word_set)
    }

    /// Write the compiled word set to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path.as_ref(), self.to_bytes()?)?;
        log::debug!(
            "saved word set with {} keys to {}",
            self.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Read a compiled word set from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref()).map_err(|e| {
            LexiphraseError::dictionary(format!(
                "Failed to read word set file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordSet")
            .field("keys", &self.len())
            .field("words", &self.word_count())
            .field("fst_bytes", &self.size_in_bytes())
            .finish()
    }
}

/// Collects dictionary entries and compiles them into a [`WordSet`].
///
/// Call [`add`](Self::add) for every entry, then [`build`](Self::build).
/// `build` consumes the builder; there is no incremental rebuild.
#[derive(Debug, Default)]
pub struct WordSetBuilder {
    /// analyzed key → canonical text ordinal
    working_set: AHashMap<String, u64>,
    words: WordTable,
}

impl WordSetBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one dictionary entry.
    ///
    /// `analyzed_key` must be encoded as described in
    /// [`analyzed_key`](crate::dictionary::analyzed_key). Adding a key that is
    /// already present replaces its canonical text; callers are expected to
    /// deduplicate keys beforehand.
    pub fn add<K, T>(&mut self, analyzed_key: K, canonical_text: T) -> Result<()>
    where
        K: AsRef<str>,
        T: AsRef<str>,
    {
        let key = analyzed_key.as_ref();
        let text = canonical_text.as_ref();
        if key.is_empty() {
            return Err(LexiphraseError::invalid_argument(
                "analyzed key length must be > 0 (got 0)",
            ));
        }
        if text.is_empty() {
            return Err(LexiphraseError::invalid_argument(
                "canonical text length must be > 0 (got 0)",
            ));
        }
        debug_assert!(key.ends_with(END), "analyzed key is not terminated: {key:?}");
        debug_assert!(!analyzed_key::has_holes(key), "input has holes: {key:?}");

        let ordinal = self.words.add(text);
        if let Some(previous) = self.working_set.insert(key.to_string(), ordinal)
            && previous != ordinal
        {
            log::warn!(
                "analyzed key {} added twice; replacing {:?} with {:?}",
                AnalyzedKey::from_encoded(key),
                self.words.get(previous).unwrap_or_default(),
                text
            );
        }
        Ok(())
    }

    /// Analyze `surface` with `analyzer` and register it as its own canonical
    /// text. Returns the analyzed key.
    pub fn add_phrase(&mut self, analyzer: &dyn Analyzer, surface: &str) -> Result<AnalyzedKey> {
        let key = analyzed_key::analyze_key(analyzer, surface)?.ok_or_else(|| {
            LexiphraseError::invalid_argument(format!("term: {surface} analyzed to no tokens"))
        })?;
        self.add(&key, surface)?;
        Ok(key)
    }

    /// Whether `analyzed_key` has been added.
    pub fn contains_key(&self, analyzed_key: &str) -> bool {
        self.working_set.contains_key(analyzed_key)
    }

    /// Number of distinct keys added so far.
    pub fn len(&self) -> usize {
        self.working_set.len()
    }

    /// Whether no key has been added.
    pub fn is_empty(&self) -> bool {
        self.working_set.is_empty()
    }

    /// Compile the automaton.
    pub fn build(self) -> Result<WordSet> {
        let mut entries: Vec<(String, u64)> = self.working_set.into_iter().collect();
        // fst insertion requires keys in lexicographic order.
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut builder = Builder::memory();
        for (key, ordinal) in &entries {
            builder.insert(key.as_bytes(), *ordinal)?;
        }
        let fst = Fst::new(builder.into_inner()?)?;

        log::debug!(
            "compiled word set: {} keys, {} canonical texts, {} automaton bytes",
            entries.len(),
            self.words.len(),
            fst.size()
        );

        Ok(WordSet {
            fst,
            words: self.words,
        })
    }
}
