//! Token types and utilities for text analysis.
//!
//! This module defines the data structures that flow through the analysis
//! pipeline: the [`Token`] itself, its [`TokenType`] classification and the
//! [`TokenStream`] alias for a boxed iterator of tokens.
//!
//! # Token Graphs
//!
//! Tokens carry `position_increment` and `position_length`, so a filter can
//! lay a token over several upstream positions. The dictionary words filter
//! uses this to report a recognized phrase:
//!
//! ```text
//! Input: "new york city"
//! Dictionary: "new york city"
//!
//! Token Graph:
//!   Position 0: "new york city" (pos_inc=1, pos_len=3)  ← spans 3 positions
//!   Position 1: "york"          (pos_inc=1, pos_len=1)
//!   Position 2: "city"          (pos_inc=1, pos_len=1)
//! ```
//!
//! # Examples
//!
//! ```
//! use lexiphrase::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 6, 11).with_token_type(TokenType::Alphanum);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.position_increment, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Offsets are measured in characters (Unicode scalar values) of the
/// original text, so the gap between two tokens separated by one space is
/// exactly one regardless of script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Token type classification
    pub token_type: TokenType,

    /// The character offset where this token starts in the original text
    pub start_offset: usize,

    /// The character offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1 (default): Normal increment, next position
    /// - 0: Same position as previous token
    /// - >1: Skip positions (e.g., for removed stop words)
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    ///
    /// A dictionary match over "new york" has a position length of 2.
    pub position_length: usize,
}

/// Token type classification for different kinds of tokens.
///
/// The dictionary matcher only distinguishes [`TokenType::Alphanum`] from the
/// rest (a one-character gap is bridged when either neighbour is
/// alphanumeric) and tags its own output with [`TokenType::Dictionary`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text (Latin and other alphabetic scripts)
    Alphanum,
    /// Numeric values
    Num,
    /// CJK ideographs
    Cjk,
    /// Katakana characters (Japanese)
    Katakana,
    /// Hiragana characters (Japanese)
    Hiragana,
    /// Hangul characters (Korean)
    Hangul,
    /// Punctuation marks
    Punctuation,
    /// Phrase recognized by the dictionary words filter
    Dictionary,
    /// Other/unknown token types
    #[default]
    Other,
}

impl TokenType {
    /// The conventional name of this type, as shown by diagnostic output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Alphanum => "<ALPHANUM>",
            TokenType::Num => "<NUM>",
            TokenType::Cjk => "<IDEOGRAPHIC>",
            TokenType::Katakana => "<KATAKANA>",
            TokenType::Hiragana => "<HIRAGANA>",
            TokenType::Hangul => "<HANGUL>",
            TokenType::Punctuation => "<PUNCTUATION>",
            TokenType::Dictionary => "<DICTIONARY>",
            TokenType::Other => "<OTHER>",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Create a new token with the given text and zero offsets.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::with_offsets(text, 0, 0)
    }

    /// Create a new token with text and character offsets.
    pub fn with_offsets<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            token_type: TokenType::Other,
            start_offset,
            end_offset,
            position_increment: 1,
            position_length: 1,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the position length.
    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }

    /// Whether this token was produced by a dictionary match.
    pub fn is_dictionary_match(&self) -> bool {
        self.token_type == TokenType::Dictionary
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
