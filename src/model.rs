//! Trigram model construction.
//!
//! A model is an ordered sequence of trigrams ranked by descending frequency;
//! absolute counts are discarded, only rank order survives. Ranks are only
//! meaningful relative to the text the model was built from — two models are
//! comparable solely through the scorer's distance metric.

use std::collections::HashMap;

/// Build the ordered trigram model of `text`.
///
/// Lower-cases the text, slides a 3-character window over the char sequence,
/// and returns the distinct trigrams sorted by descending occurrence count,
/// ties broken by ascending lexicographic order. Texts shorter than three
/// characters yield an empty model.
pub fn build_ordered_model(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    if chars.len() < 3 {
        return Vec::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for window in chars.windows(3) {
        let trigram: String = window.iter().collect();
        *counts.entry(trigram).or_insert(0) += 1;
    }

    let mut ordered: Vec<(String, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ordered.into_iter().map(|(trigram, _)| trigram).collect()
}

/// Convert an ordered model into a trigram → rank lookup map, the in-memory
/// shape the repository stores for reference models.
pub fn rank_map(ordered: &[String]) -> HashMap<String, usize> {
    ordered
        .iter()
        .enumerate()
        .map(|(rank, trigram)| (trigram.clone(), rank))
        .collect()
}
