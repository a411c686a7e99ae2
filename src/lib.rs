//! # Lexiphrase
//!
//! Streaming recognition of multi-token dictionary phrases in token streams.
//!
//! ## Features
//!
//! - Compiled dictionaries backed by a finite state transducer
//! - Single pass matching with no lookahead beyond the current token
//! - Longest-only or emit-all match policies
//! - Unicode aware analysis pipeline shared by dictionaries and text
//! - Compiled dictionaries persisted to disk and shared across threads

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::standard::StandardAnalyzer;
    pub use crate::analysis::token::{Token, TokenStream, TokenType};
    pub use crate::analysis::token_filter::Filter;
    pub use crate::analysis::token_filter::dictionary_words::{
        DictionaryWordsConfig, DictionaryWordsFilter,
    };
    pub use crate::dictionary::word_set::{WordSet, WordSetBuilder};
    pub use crate::error::{LexiphraseError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
