//! Script routing: from a sample's relevant Unicode blocks to a language
//! code, a delegated trigram comparison, or no match.
//!
//! The decision logic is a priority-ordered rule list, not a set — script
//! sets can overlap (Basic Latin co-occurs with nearly everything), and
//! reordering the rules changes behavior. The order here must be preserved.

use std::collections::HashSet;

use crate::config::UNKNOWN;
use crate::repository::ModelRepository;
use crate::scorer::check;

/// Languages written in unadorned ASCII Latin.
pub const BASIC_LATIN: &[&str] = &[
    "en", "ceb", "ha", "so", "tlh", "id", "haw", "la", "sw", "eu", "nr", "nso", "zu", "xh", "ss",
    "st", "tn", "ts",
];

/// Languages whose orthography needs Latin letters with diacritics.
pub const EXTENDED_LATIN: &[&str] = &[
    "cs", "af", "pl", "hr", "ro", "sk", "sl", "tr", "hu", "az", "et", "sq", "ca", "es", "fr", "de",
    "nl", "it", "da", "is", "nb", "sv", "fi", "lv", "pt", "ve", "lt", "tl", "cy",
];

/// Languages written in Cyrillic.
pub const CYRILLIC: &[&str] = &["ru", "uk", "kk", "uz", "mn", "sr", "mk", "bg", "ky"];

/// Languages written in Arabic script.
pub const ARABIC: &[&str] = &["ar", "fa", "ps", "ur"];

/// Languages written in Devanagari.
pub const DEVANAGARI: &[&str] = &["hi", "ne"];

/// Portuguese regional variants, disambiguated after "pt" wins.
pub const PT_VARIANTS: &[&str] = &["pt_BR", "pt_PT"];

/// What a matched rule resolves to.
enum Action {
    /// The script determines the language outright.
    Direct(&'static str),
    /// Several languages share the script; trigram comparison decides.
    Delegate(&'static [&'static str]),
}

/// Ordered script-family rules, checked before the singleton table. A rule
/// fires when any of its blocks is present.
const SCRIPT_RULES: &[(&[&str], Action)] = &[
    (
        &["Hangul Syllables", "Hangul Jamo", "Hangul Compatibility Jamo"],
        Action::Direct("ko"),
    ),
    (&["Greek and Coptic"], Action::Direct("el")),
    (
        &["Katakana", "Hiragana", "Katakana Phonetic Extensions"],
        Action::Direct("ja"),
    ),
    (
        &[
            "CJK Unified Ideographs",
            "Bopomofo",
            "Bopomofo Extended",
            "Kangxi Radicals",
        ],
        Action::Direct("zh"),
    ),
    (&["Cyrillic"], Action::Delegate(CYRILLIC)),
    (
        &[
            "Arabic",
            "Arabic Presentation Forms-A",
            "Arabic Presentation Forms-B",
        ],
        Action::Delegate(ARABIC),
    ),
    (&["Devanagari"], Action::Delegate(DEVANAGARI)),
];

/// Scripts used by exactly one language, in fixed priority order.
///
/// Greek appears here as well as in [`SCRIPT_RULES`]; the earlier rule always
/// wins, but the entry is kept so the table matches its upstream lineage.
const SINGLETONS: &[(&str, &str)] = &[
    ("Armenian", "hy"),
    ("Hebrew", "he"),
    ("Bengali", "bn"),
    ("Gurmukhi", "pa"),
    ("Greek", "el"),
    ("Gujarati", "gu"),
    ("Oriya", "or"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Kannada", "kn"),
    ("Malayalam", "ml"),
    ("Sinhala", "si"),
    ("Thai", "th"),
    ("Lao", "lo"),
    ("Tibetan", "bo"),
    ("Burmese", "my"),
    ("Georgian", "ka"),
    ("Mongolian", "mn-Mong"),
    ("Khmer", "km"),
];

/// Resolve a normalized sample and its relevant script set to a language code.
///
/// Samples shorter than three characters cannot form a trigram and return
/// [`UNKNOWN`] immediately. First matching rule wins.
pub fn identify(
    sample: &str,
    scripts: &HashSet<&'static str>,
    repository: &ModelRepository,
) -> String {
    if sample.chars().count() < 3 {
        return UNKNOWN.to_string();
    }

    for (blocks, action) in SCRIPT_RULES {
        if blocks.iter().any(|b| scripts.contains(b)) {
            return match action {
                Action::Direct(code) => (*code).to_string(),
                Action::Delegate(candidates) => check(sample, candidates, repository),
            };
        }
    }

    for (block, code) in SINGLETONS {
        if scripts.contains(block) {
            return (*code).to_string();
        }
    }

    // Latin Extended Additional carries the Vietnamese diacritic range.
    if scripts.contains("Latin Extended Additional") {
        return "vi".to_string();
    }

    if scripts.contains("Extended Latin") {
        let latin_lang = check(sample, EXTENDED_LATIN, repository);
        if latin_lang == "pt" {
            return check(sample, PT_VARIANTS, repository);
        }
        return latin_lang;
    }

    if scripts.contains("Basic Latin") {
        let all_latin: Vec<&str> = BASIC_LATIN
            .iter()
            .chain(EXTENDED_LATIN.iter())
            .copied()
            .collect();
        return check(sample, &all_latin, repository);
    }

    UNKNOWN.to_string()
}
