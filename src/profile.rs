//! Script profiling: which Unicode blocks dominate a sample.

use std::collections::{HashMap, HashSet};

use crate::blocks::block_of;
use crate::config::{BASIC_LATIN_PCT, RELEVANT_RUN_PCT};

/// Tally alphabetic characters per Unicode block and return the relevant runs.
///
/// Operates on normalized text, but defensively skips any non-alphabetic
/// character anyway. A block is relevant when it accounts for ≥ 40% of all
/// alphabetic characters, or it is `"Basic Latin"` at ≥ 15% (both thresholds
/// checked independently, so several blocks may qualify). Percentages use
/// integer division. No alphabetic characters at all → empty set.
pub fn find_runs(text: &str) -> HashSet<&'static str> {
    let mut run_types: HashMap<&'static str, usize> = HashMap::new();
    let mut total = 0usize;

    for c in text.chars() {
        if !c.is_alphabetic() {
            continue;
        }
        let Some(block) = block_of(c) else {
            continue;
        };
        *run_types.entry(block).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return HashSet::new();
    }

    run_types
        .into_iter()
        .filter_map(|(block, count)| {
            let pct = count * 100 / total;
            if pct >= RELEVANT_RUN_PCT || (block == "Basic Latin" && pct >= BASIC_LATIN_PCT) {
                Some(block)
            } else {
                None
            }
        })
        .collect()
}
