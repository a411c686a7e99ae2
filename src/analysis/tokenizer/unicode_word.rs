//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and drops segments
//! without any alphanumeric character (whitespace, punctuation). CJK
//! ideographs have no word-break property, so each ideograph becomes a token
//! of its own, which is what dictionary phrases like "U盘" are matched over.
//!
//! # Examples
//!
//! ```
//! use lexiphrase::analysis::tokenizer::Tokenizer;
//! use lexiphrase::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world! U盘").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "U");
//! assert_eq!(tokens[3].text, "盘");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Offsets are character offsets into the input text.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Detect token type based on character content.
    ///
    /// - Digits (with inner `.`/`,`) → Num
    /// - All Hiragana → Hiragana
    /// - All Katakana → Katakana
    /// - Contains Hangul → Hangul
    /// - Contains CJK → Cjk
    /// - Alphanumeric → Alphanum
    /// - All punctuation → Punctuation
    /// - Otherwise → Other
    fn detect_token_type(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().any(|c| c.is_numeric())
            && word.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
        {
            return TokenType::Num;
        }

        if word.chars().all(|c| matches!(c, '\u{3040}'..='\u{309F}')) {
            return TokenType::Hiragana;
        }

        if word
            .chars()
            .all(|c| matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9F}'))
        {
            return TokenType::Katakana;
        }

        if word
            .chars()
            .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}'))
        {
            return TokenType::Hangul;
        }

        if word.chars().any(is_ideograph) {
            return TokenType::Cjk;
        }

        if word
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '\'' | '.' | '’'))
        {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

fn is_ideograph(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2CEAF}'   // CJK Extension C-E
    )
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut chars_seen = 0;
        let mut tokens = Vec::new();

        for word in text.split_word_bounds() {
            let start_offset = chars_seen;
            chars_seen += word.chars().count();

            // Only keep actual words (not whitespace or punctuation)
            if word.chars().any(|c| c.is_alphanumeric()) {
                tokens.push(
                    Token::with_offsets(word, start_offset, chars_seen)
                        .with_token_type(Self::detect_token_type(word)),
                );
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 12));
    }

    #[test]
    fn test_character_offsets_and_types() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("A U 盘").unwrap().collect();

        let summary: Vec<_> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.start_offset, t.end_offset, t.token_type))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("A", 0, 1, TokenType::Alphanum),
                ("U", 2, 3, TokenType::Alphanum),
                ("盘", 4, 5, TokenType::Cjk),
            ]
        );
    }

    #[test]
    fn test_ideographs_are_split() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<String> = tokenizer
            .tokenize("u盘是个好东西")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["u", "盘", "是", "个", "好", "东", "西"]);
    }

    #[test]
    fn test_numbers() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("version 3.14").unwrap().collect();

        assert_eq!(tokens[1].text, "3.14");
        assert_eq!(tokens[1].token_type, TokenType::Num);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
