//! Character unit abstraction for trie edges.
//!
//! A trie is parameterized over the unit its edges are labelled with. Edit
//! distance is measured in those units, so the choice fixes the semantics of
//! a single edit: at byte level ([`u8`]) one edit moves one UTF-8 byte, at
//! character level ([`char`]) one edit moves one Unicode scalar value.
//! Mixing units within one trie is impossible by construction, since the
//! unit is part of the trie's type.

use std::fmt::Debug;
use std::hash::Hash;

/// A single comparable unit along a trie edge.
///
/// The search algorithm depends only on equality and total ordering of
/// units; ordering is what keeps each node's edge list sorted and the
/// traversal deterministic.
///
/// Implemented for [`u8`] (byte-level, fastest, treats a multi-byte UTF-8
/// sequence as several units) and [`char`] (character-level, correct
/// Unicode semantics at a small cost in edge width).
pub trait CharUnit:
    Copy + Clone + Eq + Ord + Hash + Debug + Send + Sync + 'static
{
    /// Split a string into its units.
    fn units(s: &str) -> Vec<Self>;

    /// Reassemble units into a string.
    ///
    /// For `u8` this decodes lossily (invalid sequences become U+FFFD);
    /// for `char` it is lossless.
    fn render(units: &[Self]) -> String;

    /// Iterate over the units of a string without collecting them.
    fn stream(s: &str) -> Box<dyn Iterator<Item = Self> + '_>;
}

impl CharUnit for u8 {
    #[inline]
    fn units(s: &str) -> Vec<Self> {
        s.as_bytes().to_vec()
    }

    #[inline]
    fn render(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }

    #[inline]
    fn stream(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.bytes())
    }
}

impl CharUnit for char {
    #[inline]
    fn units(s: &str) -> Vec<Self> {
        s.chars().collect()
    }

    #[inline]
    fn render(units: &[Self]) -> String {
        units.iter().collect()
    }

    #[inline]
    fn stream(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.chars())
    }
}
