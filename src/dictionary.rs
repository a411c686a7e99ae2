//! Dictionary compilation.
//!
//! A dictionary is a list of phrases, each normalized into an
//! [`analyzed_key::AnalyzedKey`] and compiled, together with its canonical
//! text, into a [`word_set::WordSet`]: a deterministic automaton that shares
//! prefixes across all entries.
//!
//! # Components
//!
//! - [`analyzed_key`] - Separator/end encoding of normalized token sequences
//! - [`word_table`] - Deduplicated canonical texts keyed by ordinal
//! - [`cursor`] - Copyable positions inside the automaton
//! - [`word_set`] - The compiled automaton and its builder
//! - [`loader`] - Word list files and compiled word set files

pub mod analyzed_key;
pub mod cursor;
pub mod loader;
pub mod word_set;
pub mod word_table;
