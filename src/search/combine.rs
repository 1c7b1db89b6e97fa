//! Duplicate-match combiner.
//!
//! The edit-path walk reports one candidate per edit path, so a term that
//! is reachable along several paths appears several times with varying
//! costs. The combiner folds that multiset down to one match per term,
//! keeping the cheapest, and fixes the output order.

use rustc_hash::FxHashMap;

use super::Match;

/// Collapse raw candidates to one match per term with the minimum edit
/// count. Ties keep the incumbent, so repeated equal-cost candidates are
/// absorbed without effect. The result is sorted ascending by term.
pub(super) fn combine<V>(raw: Vec<Match<V>>) -> Vec<Match<V>> {
    let mut best: FxHashMap<String, Match<V>> = FxHashMap::default();

    for candidate in raw {
        match best.get_mut(candidate.term.as_str()) {
            Some(existing) => {
                if candidate.edits < existing.edits {
                    *existing = candidate;
                }
            }
            None => {
                best.insert(candidate.term.clone(), candidate);
            }
        }
    }

    let mut matches: Vec<Match<V>> = best.into_values().collect();
    matches.sort_by(|a, b| a.term.cmp(&b.term));
    matches
}
