//! Dictionary words filter: streaming recognition of multi-token phrases.
//!
//! The filter walks a compiled [`WordSet`] for every position of the input
//! at once. Each arriving token opens a new *match thread* anchored at its
//! start offset, and every live thread opened earlier is advanced by the
//! token's code points. A thread that reaches the end symbol of a key records
//! a completed match; a thread that cannot follow the token (or the separator
//! after it) dies. Nothing is looked ahead: tokens are pulled from upstream
//! only when no output is ready.
//!
//! ```text
//! dictionary: "u\0盘\1" → U盘
//!
//! input:   u[0,1]      盘[1,2]
//! thread@0 [u] ──u──▶ sep ──盘──▶ end: U盘[0,2] (pos_len=2), dead
//! thread@1             [盘] ──盘──▶ no transition, dead
//!
//! longest-only output: U盘[0,2], 盘[1,2]
//! ```
//!
//! Every thread starts with the token it is anchored on, so tokens that take
//! part in no phrase pass through unchanged. In longest-only mode a thread
//! surfaces just its last record once it is dead, which replaces the anchor
//! token with the longest phrase starting there. In emit-all mode every
//! record surfaces, shortest first.
//!
//! Two neighbouring tokens belong to the same phrase only when they touch,
//! or when exactly one character separates them and one of them is
//! [`TokenType::Alphanum`] (a single space between words). A wider gap kills
//! every live thread. A token overlapping its predecessor is not fed to the
//! existing threads at all. The end of the input also kills every thread, so
//! all pending records are flushed.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexiphrase::analysis::analyzer::Analyzer;
//! use lexiphrase::analysis::analyzer::standard::StandardAnalyzer;
//! use lexiphrase::analysis::token_filter::dictionary_words::DictionaryWordsFilter;
//! use lexiphrase::dictionary::word_set::WordSet;
//!
//! let mut builder = WordSet::builder();
//! for word in ["U", "U盘", "AU"] {
//!     builder.add_phrase(&StandardAnalyzer::new(), word).unwrap();
//! }
//! let filter = DictionaryWordsFilter::from_word_set(Arc::new(builder.build().unwrap()));
//!
//! let analyzer = StandardAnalyzer::with_filter(Arc::new(filter));
//! let texts: Vec<_> = analyzer.analyze("A U 盘").unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(texts, vec!["a", "U盘", "盘"]);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::dictionary::analyzed_key;
use crate::dictionary::cursor::Cursor;
use crate::dictionary::word_set::WordSet;
use crate::error::Result;

/// Options of the dictionary words filter.
#[derive(Clone, Debug)]
pub struct DictionaryWordsConfig {
    /// The compiled dictionary
    pub word_set: Arc<WordSet>,

    /// Emit every recognized phrase per start position instead of only the
    /// longest one (default: false)
    pub emit_all_matches: bool,
}

impl DictionaryWordsConfig {
    /// Longest-only configuration for `word_set`.
    pub fn new(word_set: Arc<WordSet>) -> Self {
        DictionaryWordsConfig {
            word_set,
            emit_all_matches: false,
        }
    }

    /// Select the emission policy.
    pub fn with_emit_all_matches(mut self, emit_all_matches: bool) -> Self {
        self.emit_all_matches = emit_all_matches;
        self
    }
}

/// Token filter that lays dictionary phrases over the tokens they span.
#[derive(Clone, Debug)]
pub struct DictionaryWordsFilter {
    config: DictionaryWordsConfig,
}

impl DictionaryWordsFilter {
    /// Create a filter from a full configuration.
    pub fn new(config: DictionaryWordsConfig) -> Self {
        DictionaryWordsFilter { config }
    }

    /// Create a longest-only filter for `word_set`.
    pub fn from_word_set(word_set: Arc<WordSet>) -> Self {
        Self::new(DictionaryWordsConfig::new(word_set))
    }

    /// Get the configuration.
    pub fn config(&self) -> &DictionaryWordsConfig {
        &self.config
    }

    /// Wrap `tokens` in a matching stream without boxing it.
    pub fn stream(&self, tokens: TokenStream) -> DictionaryWordsStream {
        DictionaryWordsStream::new(tokens, self.config.clone())
    }
}

impl Filter for DictionaryWordsFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(self.stream(tokens)))
    }

    fn name(&self) -> &'static str {
        "dictionary_words"
    }
}

/// How a token relates to the one before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Continuity {
    /// Starts where the previous token ended (or is the first token).
    Adjacent,
    /// One character apart, with an alphanumeric token on either side.
    Bridged,
    /// Starts before the previous token ended.
    Overlap,
    /// Any other gap.
    Break,
}

impl Continuity {
    fn classify(last_end_offset: Option<usize>, last_token_type: TokenType, token: &Token) -> Self {
        let Some(last_end_offset) = last_end_offset else {
            return Continuity::Adjacent;
        };

        if token.start_offset < last_end_offset {
            Continuity::Overlap
        } else if token.start_offset == last_end_offset {
            Continuity::Adjacent
        } else if token.start_offset - last_end_offset == 1
            && (last_token_type == TokenType::Alphanum || token.token_type == TokenType::Alphanum)
        {
            Continuity::Bridged
        } else {
            Continuity::Break
        }
    }
}

/// A record waiting to be emitted by its thread: the anchor token itself or
/// a completed match.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingToken {
    text: String,
    token_type: TokenType,
    end_offset: usize,
    position_increment: usize,
    position_length: usize,
}

impl PendingToken {
    fn passthrough(input: &Token) -> Self {
        PendingToken {
            text: input.text.clone(),
            token_type: input.token_type,
            end_offset: input.end_offset,
            position_increment: input.position_increment,
            position_length: input.position_length,
        }
    }

    fn into_token(self, start_offset: usize) -> Token {
        Token::with_offsets(self.text, start_offset, self.end_offset)
            .with_token_type(self.token_type)
            .with_position_increment(self.position_increment)
            .with_position_length(self.position_length)
    }
}

/// One in-flight attempt to recognize a phrase starting at `start_offset`.
#[derive(Debug)]
struct MatchThread {
    start_offset: usize,
    position_increment: usize,
    /// Position length of the tokens consumed so far.
    position_length: usize,
    /// `None` once the thread can no longer be extended.
    cursor: Option<Cursor>,
    records: VecDeque<PendingToken>,
}

impl MatchThread {
    fn open(word_set: &WordSet, anchor: &Token) -> Self {
        log::trace!(
            "match thread opened at {} on {:?}",
            anchor.start_offset,
            anchor.text
        );
        let mut records = VecDeque::with_capacity(2);
        records.push_back(PendingToken::passthrough(anchor));
        MatchThread {
            start_offset: anchor.start_offset,
            position_increment: anchor.position_increment,
            position_length: 0,
            cursor: Some(word_set.start()),
            records,
        }
    }

    fn is_dead(&self) -> bool {
        self.cursor.is_none()
    }

    fn kill(&mut self) {
        if self.cursor.take().is_some() {
            log::trace!("match thread at {} cut off", self.start_offset);
        }
    }

    /// Feed one more token to the thread.
    fn advance(&mut self, word_set: &WordSet, input: &Token) {
        let Some(cursor) = self.cursor else {
            return;
        };

        let Some(after_token) = word_set.step_token(cursor, &input.text) else {
            log::trace!(
                "match thread at {} died on {:?}",
                self.start_offset,
                input.text
            );
            self.cursor = None;
            return;
        };

        let position_length = self.position_length + input.position_length;

        if let Some(word) = word_set.match_end(after_token) {
            self.records.push_back(PendingToken {
                text: word.to_string(),
                token_type: TokenType::Dictionary,
                end_offset: input.end_offset,
                position_increment: self.position_increment,
                position_length,
            });
        }

        self.cursor = word_set.step_separator(after_token);
        if self.cursor.is_some() {
            self.position_length = position_length;
        }
    }
}

/// Pull-based iterator running the dictionary matcher over a token stream.
pub struct DictionaryWordsStream {
    input: TokenStream,
    input_exhausted: bool,
    word_set: Arc<WordSet>,
    emit_all_matches: bool,
    threads: VecDeque<MatchThread>,
    last_end_offset: Option<usize>,
    last_token_type: TokenType,
}

impl DictionaryWordsStream {
    /// Start matching `input` against the configured word set.
    pub fn new(input: TokenStream, config: DictionaryWordsConfig) -> Self {
        DictionaryWordsStream {
            input,
            input_exhausted: false,
            word_set: config.word_set,
            emit_all_matches: config.emit_all_matches,
            threads: VecDeque::new(),
            last_end_offset: None,
            last_token_type: TokenType::Other,
        }
    }

    /// Number of threads still queued, dead or alive.
    pub fn pending_threads(&self) -> usize {
        self.threads.len()
    }

    /// Pop the next record that the emission policy allows to surface.
    fn next_ready(&mut self) -> Option<Token> {
        while let Some(front) = self.threads.front_mut() {
            if front.records.is_empty() {
                if front.is_dead() {
                    self.threads.pop_front();
                    continue;
                }
                return None;
            }

            if self.emit_all_matches {
                let start_offset = front.start_offset;
                return front
                    .records
                    .pop_front()
                    .map(|record| record.into_token(start_offset));
            }

            if !front.is_dead() {
                return None;
            }
            let longest = front.records.pop_back();
            front.records.clear();
            return longest.map(|record| record.into_token(front.start_offset));
        }
        None
    }

    fn consume(&mut self, input: Token) {
        debug_assert!(
            !analyzed_key::contains_reserved(&input.text),
            "token text contains a reserved symbol: {:?}",
            input.text
        );

        let continuity =
            Continuity::classify(self.last_end_offset, self.last_token_type, &input);
        self.last_end_offset = Some(input.end_offset);
        self.last_token_type = input.token_type;

        match continuity {
            Continuity::Overlap => {}
            Continuity::Break => self.threads.iter_mut().for_each(MatchThread::kill),
            Continuity::Adjacent | Continuity::Bridged => {
                for thread in self.threads.iter_mut() {
                    thread.advance(&self.word_set, &input);
                }
            }
        }

        let mut thread = MatchThread::open(&self.word_set, &input);
        thread.advance(&self.word_set, &input);
        self.threads.push_back(thread);
    }
}

impl Iterator for DictionaryWordsStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.next_ready() {
                return Some(token);
            }
            if self.input_exhausted {
                return None;
            }
            match self.input.next() {
                Some(token) => self.consume(token),
                None => {
                    self.input_exhausted = true;
                    self.threads.iter_mut().for_each(MatchThread::kill);
                }
            }
        }
    }
}

impl std::fmt::Debug for DictionaryWordsStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryWordsStream")
            .field("emit_all_matches", &self.emit_all_matches)
            .field("threads", &self.threads.len())
            .field("input_exhausted", &self.input_exhausted)
            .finish()
    }
}
