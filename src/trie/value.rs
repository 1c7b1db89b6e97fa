//! Marker trait for values stored under trie terms.
//!
//! The trie never inspects the values it stores; it only clones them into
//! query results and hands out references on exact lookup. `TermValue`
//! captures exactly that contract, so a trie value can be shared freely
//! across threads alongside the trie itself.

use smallvec::{Array, SmallVec};
use std::collections::HashSet;
use std::hash::Hash;

/// Types that can be stored under a term.
///
/// Values are opaque to the trie: `Clone` lets the approximate search emit
/// them into match records, `Send + Sync` lets a trie be shared by
/// concurrent readers.
///
/// Implementations are provided for the unit type, the primitive scalars,
/// strings, and the common owned collections. Custom types opt in with an
/// empty impl:
///
/// ```rust
/// use fuzzytrie::trie::value::TermValue;
///
/// #[derive(Clone)]
/// struct Entry {
///     frequency: u64,
/// }
///
/// impl TermValue for Entry {}
/// ```
pub trait TermValue: Clone + Send + Sync + 'static {}

impl TermValue for () {}

macro_rules! impl_scalar_term_value {
    ($($t:ty),*) => {
        $(impl TermValue for $t {})*
    };
}

impl_scalar_term_value!(u8, u16, u32, u64, u128, usize);
impl_scalar_term_value!(i8, i16, i32, i64, i128, isize);
impl_scalar_term_value!(f32, f64, bool, char);

impl TermValue for String {}
impl TermValue for &'static str {}

impl<T: TermValue> TermValue for Vec<T> {}

impl<T: TermValue + Eq + Hash> TermValue for HashSet<T> {}

impl<T: TermValue> TermValue for Option<T> {}

impl<A> TermValue for SmallVec<A>
where
    A: Array + Send + Sync + 'static,
    A::Item: TermValue,
{
}
