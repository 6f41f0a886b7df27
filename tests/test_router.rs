//! Tests for [`guesslang::router`]
//!
//! Script sets are produced the way the guesser produces them — via
//! `find_runs` over normalized text — so these tests exercise the real
//! decision order, not hand-built sets.

use guesslang::config::UNKNOWN;
use guesslang::model::build_ordered_model;
use guesslang::normalize::normalize;
use guesslang::profile::find_runs;
use guesslang::repository::ModelRepository;
use guesslang::router::identify;

fn route(text: &str, repo: &ModelRepository) -> String {
    let normalized = normalize(text);
    let scripts = find_runs(&normalized);
    identify(&normalized, &scripts, repo)
}

/// Test 1: samples under three characters are UNKNOWN before any routing.
#[test]
fn test_too_short_is_unknown() {
    let repo = ModelRepository::new();
    assert_eq!(route("", &repo), UNKNOWN);
    assert_eq!(route("ab", &repo), UNKNOWN);
    assert_eq!(route("中文", &repo), UNKNOWN);
}

/// Test 2: Hangul short-circuits to "ko" with no models loaded.
#[test]
fn test_hangul_is_korean() {
    let repo = ModelRepository::new();
    assert_eq!(route("안녕하세요", &repo), "ko");
}

/// Test 3: Greek and Coptic short-circuits to "el".
#[test]
fn test_greek_is_el() {
    let repo = ModelRepository::new();
    assert_eq!(route("ελληνική γλώσσα", &repo), "el");
}

/// Test 4: kana short-circuits to "ja".
#[test]
fn test_kana_is_japanese() {
    let repo = ModelRepository::new();
    assert_eq!(route("こんにちは", &repo), "ja");
    assert_eq!(route("カタカナ", &repo), "ja");
}

/// Test 5: Han ideographs short-circuit to "zh".
#[test]
fn test_han_is_chinese() {
    let repo = ModelRepository::new();
    assert_eq!(route("中文中文中文", &repo), "zh");
}

/// Test 6: singleton scripts resolve without trigram models.
#[test]
fn test_singleton_scripts() {
    let repo = ModelRepository::new();
    assert_eq!(route("שלום עולם", &repo), "he");
    assert_eq!(route("สวัสดีครับ", &repo), "th");
    assert_eq!(route("Բարեւ Ձեզ", &repo), "hy");
    assert_eq!(route("ქართული ენა", &repo), "ka");
    assert_eq!(route("தமிழ் மொழி", &repo), "ta");
}

/// Test 7: Latin Extended Additional (Vietnamese diacritics) → "vi".
#[test]
fn test_latin_extended_additional_is_vietnamese() {
    let repo = ModelRepository::new();
    assert_eq!(route("ạảấầẩẫậắằẳ", &repo), "vi");
}

/// Test 8: Cyrillic delegates to the trigram scorer.
#[test]
fn test_cyrillic_delegates() {
    let sample = "это довольно длинный пример текста на русском языке";

    let mut repo = ModelRepository::new();
    repo.insert_ranked("ru", &build_ordered_model(&normalize(sample)));
    repo.insert_ranked(
        "uk",
        &build_ordered_model(&normalize("це зовсім інший текст українською мовою")),
    );

    assert_eq!(route(sample, &repo), "ru");
}

/// Test 9: Cyrillic below the 20-char scorer floor → UNKNOWN even with models.
#[test]
fn test_short_cyrillic_is_unknown() {
    let mut repo = ModelRepository::new();
    repo.insert_ranked("ru", &build_ordered_model(&normalize("привет")));

    assert_eq!(route("привет", &repo), UNKNOWN);
}

/// Test 10: delegation with an empty repository → UNKNOWN.
#[test]
fn test_delegation_without_models_is_unknown() {
    let repo = ModelRepository::new();
    assert_eq!(
        route("это довольно длинный пример текста на русском языке", &repo),
        UNKNOWN
    );
}

/// Test 11: an Extended Latin win for "pt" re-delegates between the two
/// Portuguese regional variants, preserving the variant's spelling.
#[test]
fn test_portuguese_variant_redelegation() {
    // Pure diacritics keep the sample 100% Extended Latin.
    let sample = "ãéõçáíóúâêôàãéõçáíóú";
    let sample_model = build_ordered_model(&normalize(sample));

    let mut repo = ModelRepository::new();
    repo.insert_ranked("pt", &sample_model);
    repo.insert_ranked(
        "es",
        &build_ordered_model(&normalize("texto distinto en español con eñes y acentos")),
    );
    repo.insert_ranked("pt_br", &sample_model);
    repo.insert_ranked(
        "pt_pt",
        &build_ordered_model(&normalize("um texto bastante diferente deste aqui")),
    );

    assert_eq!(route(sample, &repo), "pt_BR");
}

/// Test 12: an unrecognised script falls through to UNKNOWN.
#[test]
fn test_unrecognised_script_is_unknown() {
    let repo = ModelRepository::new();
    // Runic is alphabetic but appears in no routing rule.
    assert_eq!(route("ᚠᚢᚦᚠᚢᚦᚠᚢᚦ", &repo), UNKNOWN);
}
