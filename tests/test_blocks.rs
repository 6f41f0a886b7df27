//! Tests for [`guesslang::blocks`]

use guesslang::blocks::block_of;

/// Test 1: ASCII letters live in Basic Latin.
#[test]
fn test_basic_latin() {
    assert_eq!(block_of('a'), Some("Basic Latin"));
    assert_eq!(block_of('Z'), Some("Basic Latin"));
}

/// Test 2: Latin-1 Supplement and the Latin Extended-A/B blocks are all
/// reported as the aggregate "Extended Latin" run.
#[test]
fn test_extended_latin_aggregate() {
    for c in ['é', 'ß', 'ñ', 'ł', 'ő', 'ǒ'] {
        assert_eq!(block_of(c), Some("Extended Latin"), "char {c:?}");
    }
}

/// Test 3: the Vietnamese diacritic range keeps its own block name.
#[test]
fn test_latin_extended_additional_not_merged() {
    assert_eq!(block_of('ệ'), Some("Latin Extended Additional"));
    assert_eq!(block_of('ạ'), Some("Latin Extended Additional"));
}

/// Test 4: standard names pass through for non-Latin scripts.
#[test]
fn test_standard_block_names() {
    assert_eq!(block_of('я'), Some("Cyrillic"));
    assert_eq!(block_of('α'), Some("Greek and Coptic"));
    assert_eq!(block_of('한'), Some("Hangul Syllables"));
    assert_eq!(block_of('あ'), Some("Hiragana"));
    assert_eq!(block_of('ア'), Some("Katakana"));
    assert_eq!(block_of('中'), Some("CJK Unified Ideographs"));
    assert_eq!(block_of('ש'), Some("Hebrew"));
    assert_eq!(block_of('ก'), Some("Thai"));
    assert_eq!(block_of('ह'), Some("Devanagari"));
}

/// Test 5: Myanmar is reported as "Burmese", matching the singleton table.
#[test]
fn test_myanmar_as_burmese() {
    assert_eq!(block_of('က'), Some("Burmese"));
}
