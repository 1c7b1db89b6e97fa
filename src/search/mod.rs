//! Approximate-match search over the trie.
//!
//! The search enumerates every way to transform a query into some stored
//! term with at most a budgeted number of edits, by walking the trie and
//! the query together, then collapses the resulting multiset of candidates
//! to one [`Match`] per term.

mod combine;
mod walk;

use crate::trie::node::Node;
use crate::trie::unit::CharUnit;
use crate::trie::value::TermValue;

/// A stored term found within the edit budget of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<V> {
    /// The stored term.
    pub term: String,
    /// Minimum number of edits transforming the query into `term`.
    pub edits: usize,
    /// The value stored under `term`.
    pub value: V,
}

/// Run the full search: enumerate edit paths from the root, then combine
/// duplicates. Results are sorted ascending by term.
pub(crate) fn run<U: CharUnit, V: TermValue>(
    root: &Node<U, V>,
    query: &[U],
    max_edits: usize,
) -> Vec<Match<V>> {
    let mut found = Vec::new();
    let mut path = walk::Path::new();
    walk::walk(root, &mut path, query, 0, max_edits, &mut found);
    combine::combine(found)
}
