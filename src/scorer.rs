//! Rank-distance scoring between a sample's trigram model and per-language
//! reference models.

use std::collections::HashMap;

use crate::config::{MAX_GRAMS, MIN_LENGTH, UNKNOWN};
use crate::model::build_ordered_model;
use crate::repository::ModelRepository;

/// Rank distance between an ordered sample model and a reference rank map.
///
/// Only the first [`MAX_GRAMS`] sample trigrams are examined. Trigrams with
/// two consecutive whitespace characters are skipped — a normalization
/// artifact, not genuine content. A trigram found at reference rank `j` while
/// at sample rank `i` contributes `|i − j|`; a trigram absent from the
/// reference contributes the full [`MAX_GRAMS`] penalty. Lower is better.
pub fn distance(sample_model: &[String], known_model: &HashMap<String, usize>) -> usize {
    let mut dist = 0usize;

    for (i, trigram) in sample_model.iter().take(MAX_GRAMS).enumerate() {
        if has_double_space(trigram) {
            continue;
        }
        match known_model.get(trigram) {
            Some(&rank) => dist += i.abs_diff(rank),
            None => dist += MAX_GRAMS,
        }
    }

    dist
}

/// Score `sample` against each candidate language and return the closest.
///
/// Samples shorter than [`MIN_LENGTH`] characters carry too little signal and
/// return [`UNKNOWN`]. Candidate lookup is case-insensitive; candidates with
/// no loaded model are silently skipped, and if none remain the result is
/// [`UNKNOWN`]. Ties on distance break toward the lexicographically smaller
/// candidate code, so the result is independent of candidate order.
pub fn check(sample: &str, candidates: &[&str], repository: &ModelRepository) -> String {
    if sample.chars().count() < MIN_LENGTH {
        return UNKNOWN.to_string();
    }

    let sample_model = build_ordered_model(sample);

    let mut scores: Vec<(usize, &str)> = Vec::new();
    for &candidate in candidates {
        if let Some(known) = repository.get(candidate) {
            scores.push((distance(&sample_model, known), candidate));
        }
    }

    match scores.into_iter().min() {
        Some((_, best)) => best.to_string(),
        None => UNKNOWN.to_string(),
    }
}

/// Two consecutive whitespace characters anywhere in the trigram.
fn has_double_space(trigram: &str) -> bool {
    let mut prev_space = false;
    for c in trigram.chars() {
        let space = c.is_whitespace();
        if space && prev_space {
            return true;
        }
        prev_space = space;
    }
    false
}
