//! Tokenizer followed by an ordered chain of filters.
//!
//! Dictionaries and the text they are matched against must go through the
//! same normalization, so the usual shape is a normalization chain for
//! building keys and the same chain with a
//! [`DictionaryWordsFilter`](crate::analysis::token_filter::dictionary_words::DictionaryWordsFilter)
//! appended for matching.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexiphrase::analysis::analyzer::Analyzer;
//! use lexiphrase::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use lexiphrase::analysis::token_filter::width_fold::WidthFoldFilter;
//! use lexiphrase::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
//!     .add_filter(Arc::new(WidthFoldFilter::new()));
//!
//! let texts: Vec<_> = analyzer.analyze("ＵＳＢ 盘").unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(texts, vec!["USB", "盘"]);
//! assert_eq!(analyzer.describe(), "unicode_word > width_fold");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Analyzer built from a tokenizer and filters applied in insertion order.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter to the end of the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Names of the stages, tokenizer first.
    pub fn stage_names(&self) -> Vec<&'static str> {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|filter| filter.name()))
            .collect()
    }

    /// Whether a filter named `name` is part of the chain.
    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.iter().any(|filter| filter.name() == name)
    }

    /// One-line summary such as `unicode_word > lowercase > width_fold`.
    pub fn describe(&self) -> String {
        self.stage_names().join(" > ")
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("stages", &self.stage_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::width_fold::WidthFoldFilter;
    use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;

    fn normalizer() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(WidthFoldFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
    }

    #[test]
    fn test_filters_run_in_order() {
        let tokens: Vec<Token> = normalizer().analyze("Ｕ盘 Hello").unwrap().collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["u", "盘", "hello"]);
    }

    #[test]
    fn test_tokenizer_only() {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));
        let texts: Vec<_> = analyzer.analyze("New York").unwrap().map(|t| t.text).collect();
        assert_eq!(texts, vec!["New", "York"]);
    }

    #[test]
    fn test_stages() {
        let analyzer = normalizer();

        assert_eq!(analyzer.name(), "pipeline");
        assert_eq!(
            analyzer.stage_names(),
            vec!["unicode_word", "width_fold", "lowercase"]
        );
        assert!(analyzer.has_filter("lowercase"));
        assert!(!analyzer.has_filter("dictionary_words"));
        assert_eq!(analyzer.describe(), "unicode_word > width_fold > lowercase");
    }
}
