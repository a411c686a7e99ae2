//! Text analysis module for Lexiphrase.
//!
//! Tokenizers, token filters and analyzers that produce the normalized token
//! streams the dictionary matcher consumes, plus the matcher itself as the
//! [`token_filter::dictionary_words`] filter.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
