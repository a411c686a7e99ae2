//! Analyzers combine a tokenizer and a chain of filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! Dictionaries must be analyzed with the same pipeline that feeds the
//! dictionary words filter at match time, byte for byte. The
//! [`standard::StandardAnalyzer`] is the pipeline used for both sides by
//! default.
//!
//! # Available Implementations
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`standard::StandardAnalyzer`] - Unicode words, lowercased and width folded

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that one analyzer can serve several
/// matcher instances running on different threads.
///
/// # Examples
///
/// ```
/// use lexiphrase::analysis::analyzer::Analyzer;
/// use lexiphrase::analysis::analyzer::standard::StandardAnalyzer;
///
/// let analyzer = StandardAnalyzer::new();
/// let tokens: Vec<_> = analyzer.analyze("The Quick ｆｏｘ").unwrap().collect();
///
/// assert_eq!(tokens[0].text, "the");
/// assert_eq!(tokens[2].text, "fox");
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod pipeline;
pub mod standard;
