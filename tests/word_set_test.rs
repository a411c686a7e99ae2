//! Integration tests for compiling, persisting and loading word sets.

use std::fs;
use std::sync::Arc;

use lexiphrase::dictionary::loader;
use lexiphrase::prelude::*;
use tempfile::TempDir;

fn analyze_with(word_set: WordSet, text: &str) -> Result<Vec<Token>> {
    let filter = DictionaryWordsFilter::from_word_set(Arc::new(word_set));
    Ok(StandardAnalyzer::with_filter(Arc::new(filter))
        .analyze(text)?
        .collect())
}

#[test]
fn test_save_and_load_round_trip() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.bin");

    let analyzer = StandardAnalyzer::new();
    let mut builder = WordSet::builder();
    for word in ["U", "U盘", "AU", "New York"] {
        builder.add_phrase(&analyzer, word)?;
    }
    let word_set = builder.build()?;
    word_set.save(&path)?;

    let loaded = WordSet::load(&path)?;
    assert_eq!(loaded.len(), word_set.len());
    assert_eq!(loaded.word_count(), word_set.word_count());
    assert_eq!(loaded.entries(), word_set.entries());

    assert_eq!(
        analyze_with(loaded, "A U 盘")?,
        analyze_with(word_set, "A U 盘")?
    );

    Ok(())
}

#[test]
fn test_load_rejects_corrupt_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.bin");

    let analyzer = StandardAnalyzer::new();
    let mut builder = WordSet::builder();
    for word in ["U", "U盘", "AU", "New York", "New York City", "是个"] {
        builder.add_phrase(&analyzer, word)?;
    }
    let word_set = builder.build()?;
    word_set.save(&path)?;
    let saved = fs::read(&path)?;

    // Damage the automaton section: after the u32 version and u64 length.
    let middle = 12 + word_set.size_in_bytes() / 2;
    for index in [13, middle, 12 + word_set.size_in_bytes() - 1] {
        let mut damaged = saved.clone();
        damaged[index] ^= 0x5A;
        fs::write(&path, &damaged)?;

        let err = WordSet::load(&path).unwrap_err();
        assert!(matches!(err, LexiphraseError::Automaton(_)), "{err}");
    }

    fs::write(&path, b"\x01\x02\x03")?;
    assert!(WordSet::load(&path).is_err());
    assert!(WordSet::load(temp_dir.path().join("missing.bin")).is_err());

    Ok(())
}

#[test]
fn test_load_line_word_list() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    fs::write(&path, "# products\nU盘\nu盘\n\nNew York City\n")?;

    let word_set = loader::load_word_list(&path, &StandardAnalyzer::new())?;
    assert_eq!(word_set.len(), 2);
    assert_eq!(word_set.get("u\u{0}盘\u{1}"), Some("U盘"));

    let tokens = analyze_with(word_set, "new york city")?;
    assert_eq!(tokens[0].text, "New York City");
    assert_eq!(tokens[0].position_length, 3);

    Ok(())
}

#[test]
fn test_load_json_word_list() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.json");
    fs::write(&path, r#"["U", "U盘", "AU"]"#)?;

    let word_set = loader::load_word_list(&path, &StandardAnalyzer::new())?;
    let keys: Vec<String> = word_set
        .entries()
        .into_iter()
        .map(|(key, _)| key.to_string())
        .collect();
    assert_eq!(keys, vec!["au", "u 盘", "u"]);

    Ok(())
}

#[test]
fn test_open_by_extension() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let list = temp_dir.path().join("words.txt");
    let compiled = temp_dir.path().join("words.bin");
    fs::write(&list, "U盘\nAU\n")?;

    let analyzer = StandardAnalyzer::new();
    loader::open(&list, &analyzer)?.save(&compiled)?;

    let from_list = loader::open(&list, &analyzer)?;
    let from_compiled = loader::open(&compiled, &analyzer)?;
    assert_eq!(from_list.entries(), from_compiled.entries());

    Ok(())
}
