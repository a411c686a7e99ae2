//! Integration tests for the dictionary words filter running behind the
//! standard analyzer.

use std::sync::Arc;
use std::thread;

use lexiphrase::prelude::*;

fn word_set(words: &[&str]) -> Result<Arc<WordSet>> {
    let analyzer = StandardAnalyzer::new();
    let mut builder = WordSet::builder();
    for word in words {
        builder.add_phrase(&analyzer, word)?;
    }
    Ok(Arc::new(builder.build()?))
}

fn matcher(word_set: &Arc<WordSet>, emit_all: bool) -> StandardAnalyzer {
    let config = DictionaryWordsConfig::new(word_set.clone()).with_emit_all_matches(emit_all);
    StandardAnalyzer::with_filter(Arc::new(DictionaryWordsFilter::new(config)))
}

fn texts(analyzer: &StandardAnalyzer, text: &str) -> Result<Vec<String>> {
    Ok(analyzer.analyze(text)?.map(|t| t.text).collect())
}

#[test]
fn test_adjacent_cjk_phrase() -> Result<()> {
    let words = word_set(&["U", "U盘", "AU"])?;
    let tokens: Vec<Token> = matcher(&words, false).analyze("U盘")?.collect();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "U盘");
    assert_eq!(tokens[0].token_type, TokenType::Dictionary);
    assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 2));
    assert_eq!(tokens[0].position_length, 2);
    assert_eq!(tokens[1].text, "盘");
    assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (1, 2));

    Ok(())
}

#[test]
fn test_phrase_bridged_by_single_space() -> Result<()> {
    let words = word_set(&["U", "U盘", "AU"])?;
    let tokens: Vec<Token> = matcher(&words, false).analyze("A U 盘")?.collect();

    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.start_offset, t.end_offset, t.position_length))
        .collect();
    assert_eq!(
        summary,
        vec![("a", 0, 1, 1), ("U盘", 2, 5, 2), ("盘", 4, 5, 1)]
    );
    assert_eq!(tokens[1].token_type, TokenType::Dictionary);

    Ok(())
}

#[test]
fn test_emit_all_reports_every_record() -> Result<()> {
    let words = word_set(&["U", "U盘", "AU"])?;
    assert_eq!(
        texts(&matcher(&words, true), "A U 盘")?,
        vec!["a", "u", "U", "U盘", "盘"]
    );
    Ok(())
}

#[test]
fn test_phrase_inside_sentence() -> Result<()> {
    let words = word_set(&["U", "U盘", "AU"])?;
    assert_eq!(
        texts(&matcher(&words, false), "u盘是个好东西")?,
        vec!["U盘", "盘", "是", "个", "好", "东", "西"]
    );
    Ok(())
}

#[test]
fn test_double_space_breaks_phrase() -> Result<()> {
    let words = word_set(&["U", "U盘", "AU"])?;
    let tokens: Vec<Token> = matcher(&words, false).analyze("U  盘")?.collect();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "U");
    assert!(tokens[0].is_dictionary_match());
    assert_eq!(tokens[1].text, "盘");
    assert!(!tokens[1].is_dictionary_match());

    Ok(())
}

#[test]
fn test_normalized_input_matches() -> Result<()> {
    let words = word_set(&["U盘", "New York"])?;
    let analyzer = matcher(&words, false);

    assert_eq!(texts(&analyzer, "Ｕ盘")?, vec!["U盘", "盘"]);
    assert_eq!(texts(&analyzer, "NEW YORK")?, vec!["New York", "york"]);

    Ok(())
}

#[test]
fn test_every_entry_matches_itself() -> Result<()> {
    let entries = ["U", "U盘", "AU", "New York", "New York City", "是个"];
    let words = word_set(&entries)?;
    let analyzer = matcher(&words, false);

    for entry in entries {
        let first = analyzer.analyze(entry)?.next().unwrap();
        assert_eq!(first.text, entry);
        assert_eq!(first.token_type, TokenType::Dictionary);
        assert_eq!(first.start_offset, 0);
        assert_eq!(first.end_offset, entry.chars().count());
    }

    Ok(())
}

#[test]
fn test_prefix_consistency() -> Result<()> {
    let words = word_set(&["New York", "New York City"])?;

    assert_eq!(
        texts(&matcher(&words, true), "new york city")?,
        vec!["new", "New York", "New York City", "york", "city"]
    );
    assert_eq!(
        texts(&matcher(&words, false), "new york city")?,
        vec!["New York City", "york", "city"]
    );

    Ok(())
}

#[test]
fn test_threads_do_not_interfere() -> Result<()> {
    let words = word_set(&["A B C", "B D"])?;
    assert_eq!(
        texts(&matcher(&words, false), "a b d")?,
        vec!["a", "B D", "d"]
    );
    Ok(())
}

#[test]
fn test_empty_dictionary_is_transparent() -> Result<()> {
    let empty = Arc::new(WordSet::empty()?);
    let plain = StandardAnalyzer::new();

    for text in ["U盘", "A U 盘", "new york city", ""] {
        let expected: Vec<Token> = plain.analyze(text)?.collect();
        let actual: Vec<Token> = matcher(&empty, false).analyze(text)?.collect();
        assert_eq!(actual, expected);
    }

    Ok(())
}

#[test]
fn test_shared_word_set_across_threads() -> Result<()> {
    let words = word_set(&["U", "U盘", "AU", "New York", "New York City"])?;
    let expected = texts(&matcher(&words, false), "A U 盘 and new york city")?;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let words = words.clone();
            thread::spawn(move || {
                let analyzer = matcher(&words, false);
                (0..50)
                    .map(|_| texts(&analyzer, "A U 盘 and new york city"))
                    .collect::<Result<Vec<_>>>()
            })
        })
        .collect();

    for handle in handles {
        for output in handle.join().unwrap()? {
            assert_eq!(output, expected);
        }
    }

    Ok(())
}
