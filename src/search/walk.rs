//! Recursive edit-path enumerator.
//!
//! The walk descends the trie and the query in lockstep. Each step either
//! consumes a query unit against a matching edge for free, or spends one
//! edit on a deletion, substitution, insertion, or adjacent transposition.
//! Branches whose edit count would exceed the budget are never entered, so
//! the explored region is a narrow band around the query rather than the
//! whole trie.

use smallvec::SmallVec;

use super::Match;
use crate::trie::node::Node;
use crate::trie::unit::CharUnit;
use crate::trie::value::TermValue;

/// Scratch buffer for the units accumulated along the current trie path.
///
/// Inline capacity covers typical word lengths plus a few trailing inserts
/// without touching the heap.
pub(super) type Path<U> = SmallVec<[U; 24]>;

/// Enumerate every way to transform the remaining query into a stored term
/// using at most `max - edits` further edits, pushing one candidate per
/// discovered edit path into `out`.
///
/// The same term may be reached along several edit paths with different
/// costs; the combiner keeps the cheapest.
pub(super) fn walk<U: CharUnit, V: TermValue>(
    node: &Node<U, V>,
    path: &mut Path<U>,
    remaining: &[U],
    edits: usize,
    max: usize,
    out: &mut Vec<Match<V>>,
) {
    debug_assert!(edits <= max);

    let Some((&head, tail)) = remaining.split_first() else {
        // Query exhausted. The path so far is a candidate if it spells a
        // term; anything deeper is reachable only by inserting the units
        // along the way, one edit each.
        if let Some(value) = node.value() {
            out.push(Match {
                term: U::render(path),
                edits,
                value: value.clone(),
            });
        }
        if edits < max {
            for (unit, child) in node.edges() {
                path.push(*unit);
                walk(child, path, &[], edits + 1, max, out);
                path.pop();
            }
        }
        return;
    };

    if edits == max {
        // Budget saturated: only exact consumption can still reach a term.
        if let Some(child) = node.child(head) {
            path.push(head);
            walk(child, path, tail, edits, max, out);
            path.pop();
        }
        return;
    }

    // Delete: drop the head of the query.
    walk(node, path, tail, edits + 1, max, out);

    // Transpose: swap the two leading query units when they differ.
    if let Some((&second, rest)) = tail.split_first() {
        if second != head {
            let mut swapped: SmallVec<[U; 24]> = SmallVec::with_capacity(remaining.len());
            swapped.push(second);
            swapped.push(head);
            swapped.extend_from_slice(rest);
            walk(node, path, &swapped, edits + 1, max, out);
        }
    }

    for (unit, child) in node.edges() {
        path.push(*unit);
        if *unit == head {
            // No-change: consume the head against the matching edge.
            walk(child, path, tail, edits, max, out);
        } else {
            // Substitute: replace the head by this edge's unit. Any unit
            // that is not an edge walks off the trie and cannot reach a
            // term, so no other substitutions exist.
            walk(child, path, tail, edits + 1, max, out);
        }
        // Insert: take this edge without consuming any query unit.
        walk(child, path, remaining, edits + 1, max, out);
        path.pop();
    }
}
