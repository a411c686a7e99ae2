//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. They can
//! rewrite tokens (case and width folding) or re-time the stream entirely, as
//! the dictionary words filter does when it lays recognized phrases over the
//! tokens they span.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`width_fold::WidthFoldFilter`] - Folds full-width and half-width forms
//! - [`dictionary_words::DictionaryWordsFilter`] - Recognizes dictionary phrases
//!
//! # Examples
//!
//! ```
//! use lexiphrase::analysis::token_filter::Filter;
//! use lexiphrase::analysis::token_filter::lowercase::LowercaseFilter;
//! use lexiphrase::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello"), Token::new("WORLD")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Width Fold → Dictionary Words → consumer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. The trait
/// requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// ```
/// use lexiphrase::analysis::token::{Token, TokenStream};
/// use lexiphrase::analysis::token_filter::Filter;
/// use lexiphrase::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         Ok(Box::new(tokens.map(|t| {
///             let reversed: String = t.text.chars().rev().collect();
///             t.with_text(reversed)
///         })))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod dictionary_words;
pub mod lowercase;
pub mod width_fold;
