//! Width folding filter for CJK text.
//!
//! Folds the variant-width forms that appear in East Asian text so that a
//! dictionary key typed with one width matches input typed with the other:
//!
//! - full-width ASCII variants (`Ｕ`, `１`) → basic Latin (`U`, `1`)
//! - the ideographic space → ASCII space
//! - half-width katakana (`ｶ`) → full-width katakana (`カ`), composing a
//!   following half-width voiced sound mark into the preceding kana (`ｶﾞ` → `ガ`)
//!
//! # Examples
//!
//! ```
//! use lexiphrase::analysis::token_filter::Filter;
//! use lexiphrase::analysis::token_filter::width_fold::WidthFoldFilter;
//! use lexiphrase::analysis::token::Token;
//!
//! let filter = WidthFoldFilter::new();
//! let tokens = vec![Token::new("ｕ"), Token::new("ｶﾞｲﾄﾞ")];
//! let folded: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(folded[0].text, "u");
//! assert_eq!(folded[1].text, "ガイド");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Full-width katakana for U+FF65..=U+FF9F.
const HALFWIDTH_KANA: [char; 59] = [
    '\u{30FB}', '\u{30F2}', '\u{30A1}', '\u{30A3}', '\u{30A5}', '\u{30A7}', '\u{30A9}', '\u{30E3}',
    '\u{30E5}', '\u{30E7}', '\u{30C3}', '\u{30FC}', '\u{30A2}', '\u{30A4}', '\u{30A6}', '\u{30A8}',
    '\u{30AA}', '\u{30AB}', '\u{30AD}', '\u{30AF}', '\u{30B1}', '\u{30B3}', '\u{30B5}', '\u{30B7}',
    '\u{30B9}', '\u{30BB}', '\u{30BD}', '\u{30BF}', '\u{30C1}', '\u{30C4}', '\u{30C6}', '\u{30C8}',
    '\u{30CA}', '\u{30CB}', '\u{30CC}', '\u{30CD}', '\u{30CE}', '\u{30CF}', '\u{30D2}', '\u{30D5}',
    '\u{30D8}', '\u{30DB}', '\u{30DE}', '\u{30DF}', '\u{30E0}', '\u{30E1}', '\u{30E2}', '\u{30E4}',
    '\u{30E6}', '\u{30E8}', '\u{30E9}', '\u{30EA}', '\u{30EB}', '\u{30EC}', '\u{30ED}', '\u{30EF}',
    '\u{30F3}', '\u{3099}', '\u{309A}',
];

const VOICED_MARK: char = '\u{3099}';
const SEMI_VOICED_MARK: char = '\u{309A}';

/// A filter that folds full-width and half-width character variants.
#[derive(Clone, Debug, Default)]
pub struct WidthFoldFilter;

impl WidthFoldFilter {
    /// Create a new width folding filter.
    pub fn new() -> Self {
        WidthFoldFilter
    }

    /// Fold the width variants in `text`.
    pub fn fold(text: &str) -> String {
        let mut folded = String::with_capacity(text.len());
        for c in text.chars() {
            let mapped = fold_char(c);
            if matches!(mapped, VOICED_MARK | SEMI_VOICED_MARK) {
                if let Some(prev) = folded.chars().last()
                    && let Some(composed) = compose(prev, mapped)
                {
                    folded.pop();
                    folded.push(composed);
                    continue;
                }
            }
            folded.push(mapped);
        }
        folded
    }
}

fn fold_char(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        '\u{3000}' => ' ',
        '\u{FF65}'..='\u{FF9F}' => HALFWIDTH_KANA[(c as u32 - 0xFF65) as usize],
        _ => c,
    }
}

/// Compose a katakana with a (semi-)voiced sound mark, if such a kana exists.
fn compose(base: char, mark: char) -> Option<char> {
    let code = base as u32;
    let voiceable = matches!(code, 0x30AB..=0x30C1 if code % 2 == 1)
        || matches!(code, 0x30C4 | 0x30C6 | 0x30C8);
    let h_row = matches!(code, 0x30CF | 0x30D2 | 0x30D5 | 0x30D8 | 0x30DB);

    match mark {
        VOICED_MARK if voiceable || h_row => char::from_u32(code + 1),
        VOICED_MARK if base == '\u{30A6}' => Some('\u{30F4}'),
        SEMI_VOICED_MARK if h_row => char::from_u32(code + 2),
        _ => None,
    }
}

impl Filter for WidthFoldFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let folded = Self::fold(&token.text);
            token.with_text(folded)
        })))
    }

    fn name(&self) -> &'static str {
        "width_fold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_fullwidth_ascii() {
        assert_eq!(WidthFoldFilter::fold("ＵＳＢ１２３"), "USB123");
        assert_eq!(WidthFoldFilter::fold("a\u{3000}b"), "a b");
    }

    #[test]
    fn test_halfwidth_katakana() {
        assert_eq!(WidthFoldFilter::fold("ｱｲｳ"), "アイウ");
        assert_eq!(WidthFoldFilter::fold("ﾊﾟﾋﾞ"), "パビ");
        assert_eq!(WidthFoldFilter::fold("ｳﾞ"), "ヴ");
    }

    #[test]
    fn test_dangling_voiced_mark_is_kept() {
        assert_eq!(WidthFoldFilter::fold("ｱﾞ"), "ア\u{3099}");
    }

    #[test]
    fn test_other_text_untouched() {
        assert_eq!(WidthFoldFilter::fold("u盘"), "u盘");
    }

    #[test]
    fn test_filter() {
        let filter = WidthFoldFilter::new();
        let tokens = vec![Token::with_offsets("Ｕ", 0, 1)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result[0].text, "U");
        assert_eq!(result[0].end_offset, 1);
        assert_eq!(filter.name(), "width_fold");
    }
}
