//! Unicode block classification for single characters.
//!
//! Wraps the `unicode-blocks` lookup and remaps a handful of standard block
//! names into the coarser vocabulary the script router speaks: the Latin
//! supplement/extension blocks collapse into `"Extended Latin"` (so that
//! diacritic-bearing Latin text is tallied as one run), and `Myanmar` is
//! reported as `"Burmese"` to match the router's singleton table. All other
//! blocks keep their standard Unicode names.
//!
//! Note that `"Latin Extended Additional"` (U+1E00–U+1EFF, the Vietnamese
//! diacritic range) is deliberately *not* folded into Extended Latin — the
//! router keys a dedicated rule on it.

/// Latin blocks reported as the aggregate `"Extended Latin"` run.
const EXTENDED_LATIN_BLOCKS: &[&str] = &[
    "Latin-1 Supplement",
    "Latin Extended-A",
    "Latin Extended-B",
    "IPA Extensions",
    "Latin Extended-C",
    "Latin Extended-D",
    "Latin Extended-E",
];

/// Return the (possibly remapped) Unicode block name for `c`.
///
/// `None` for unassigned code points; callers skip those.
pub fn block_of(c: char) -> Option<&'static str> {
    let name = unicode_blocks::find_unicode_block(c)?.name();

    if EXTENDED_LATIN_BLOCKS.contains(&name) {
        return Some("Extended Latin");
    }
    if name == "Myanmar" {
        return Some("Burmese");
    }

    Some(name)
}
