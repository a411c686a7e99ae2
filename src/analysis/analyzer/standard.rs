//! Standard analyzer used to normalize dictionaries and matcher input.
//!
//! # Pipeline
//!
//! 1. UnicodeWordTokenizer (Unicode word boundaries, ideographs split)
//! 2. LowercaseFilter
//! 3. WidthFoldFilter
//!
//! # Examples
//!
//! ```
//! use lexiphrase::analysis::analyzer::Analyzer;
//! use lexiphrase::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("A U 盘").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "a");
//! assert_eq!(tokens[1].text, "u");
//! assert_eq!(tokens[2].text, "盘");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::width_fold::WidthFoldFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Unicode word tokenization followed by case and width folding.
#[derive(Clone)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(WidthFoldFilter::new()));

        StandardAnalyzer { inner: analyzer }
    }

    /// Create a standard analyzer with one more filter at the end of the chain.
    ///
    /// This is how a dictionary words filter is attached for matching.
    pub fn with_filter(filter: Arc<dyn Filter>) -> Self {
        let mut analyzer = Self::new();
        analyzer.inner = analyzer.inner.add_filter(filter);
        analyzer
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
