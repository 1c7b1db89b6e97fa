//! Property-based tests for the distance functions.
//!
//! `standard_distance` and `damerau_distance` are metrics; the restricted
//! `transposition_distance` drops the triangle inequality (a transposition
//! followed by an insertion inside the pair can be cheaper than any single
//! restricted alignment) but keeps the other properties.

use fuzzytrie::distance::{damerau_distance, standard_distance, transposition_distance};
use proptest::prelude::*;

fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn identity(a in arb_string()) {
        prop_assert_eq!(standard_distance(&a, &a), 0);
        prop_assert_eq!(transposition_distance(&a, &a), 0);
        prop_assert_eq!(damerau_distance(&a, &a), 0);
    }

    #[test]
    fn zero_distance_means_equal(a in arb_string(), b in arb_string()) {
        if damerau_distance(&a, &b) == 0 {
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn symmetry(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(standard_distance(&a, &b), standard_distance(&b, &a));
        prop_assert_eq!(transposition_distance(&a, &b), transposition_distance(&b, &a));
        prop_assert_eq!(damerau_distance(&a, &b), damerau_distance(&b, &a));
    }

    #[test]
    fn standard_triangle_inequality(a in arb_string(), b in arb_string(), c in arb_string()) {
        prop_assert!(
            standard_distance(&a, &c) <= standard_distance(&a, &b) + standard_distance(&b, &c)
        );
    }

    #[test]
    fn damerau_triangle_inequality(a in arb_string(), b in arb_string(), c in arb_string()) {
        prop_assert!(
            damerau_distance(&a, &c) <= damerau_distance(&a, &b) + damerau_distance(&b, &c)
        );
    }

    #[test]
    fn variants_are_ordered(a in arb_string(), b in arb_string()) {
        let unrestricted = damerau_distance(&a, &b);
        let restricted = transposition_distance(&a, &b);
        let plain = standard_distance(&a, &b);
        prop_assert!(unrestricted <= restricted);
        prop_assert!(restricted <= plain);
    }

    #[test]
    fn bounded_by_longer_length(a in arb_string(), b in arb_string()) {
        let longest = a.chars().count().max(b.chars().count());
        prop_assert!(standard_distance(&a, &b) <= longest);
        prop_assert!(damerau_distance(&a, &b) <= longest);
    }
}
