//! Property-based tests for the boolean algebra of specifications

use proptest::prelude::*;
use specula::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

/// A pool of leaves over text candidates.
fn leaf(index: usize) -> BoxedSpecification {
    match index % 8 {
        0 => CharacterSetSpecification::decimal_digits().boxed(),
        1 => CharacterSetSpecification::letters().boxed(),
        2 => CharacterSetSpecification::containing_any(CharacterSet::Whitespace).boxed(),
        3 => CountSpecification::between(2, 4).unwrap().boxed(),
        4 => CountSpecification::at_most(1).boxed(),
        5 => RegularExpressionSpecification::new("0.*0").unwrap().boxed(),
        6 => RegularExpressionSpecification::new("^[a-m]").unwrap().boxed(),
        _ => predicate(|s: &String| s.len() % 2 == 0).boxed(),
    }
}

proptest! {
    #[test]
    fn prop_de_morgan_and(a in 0usize..8, b in 0usize..8, text in "[0-9a-z ]{0,8}") {
        let lhs = leaf(a).and(leaf(b)).not();
        let rhs = leaf(a).not().or(leaf(b).not());
        prop_assert_eq!(lhs.is_satisfied_by(&text), rhs.is_satisfied_by(&text));
    }

    #[test]
    fn prop_de_morgan_or(a in 0usize..8, b in 0usize..8, text in "[0-9a-z ]{0,8}") {
        let lhs = leaf(a).or(leaf(b)).not();
        let rhs = leaf(a).not().and(leaf(b).not());
        prop_assert_eq!(lhs.is_satisfied_by(&text), rhs.is_satisfied_by(&text));
    }

    #[test]
    fn prop_double_negation_is_identity(a in 0usize..8, text in "[0-9a-z ]{0,8}") {
        prop_assert_eq!(
            leaf(a).not().not().is_satisfied_by(&text),
            leaf(a).is_satisfied_by(&text)
        );
    }

    #[test]
    fn prop_evaluation_is_idempotent(
        a in 0usize..8,
        b in 0usize..8,
        c in 0usize..8,
        text in "[0-9a-z ]{0,8}"
    ) {
        let tree = leaf(a).and(leaf(b).or(leaf(c).not()));
        let first = tree.is_satisfied_by(&text);
        for _ in 0..3 {
            prop_assert_eq!(tree.is_satisfied_by(&text), first);
        }
    }

    #[test]
    fn prop_and_or_match_boolean_operators(a in 0usize..8, b in 0usize..8, text in "[0-9a-z ]{0,8}") {
        let x = leaf(a).is_satisfied_by(&text);
        let y = leaf(b).is_satisfied_by(&text);
        prop_assert_eq!(leaf(a).and(leaf(b)).is_satisfied_by(&text), x && y);
        prop_assert_eq!(leaf(a).or(leaf(b)).is_satisfied_by(&text), x || y);
    }

    #[test]
    fn prop_leaves_reject_incompatible_types(a in 0usize..8, n in any::<i64>(), f in any::<f64>()) {
        let spec = leaf(a);
        prop_assert!(!spec.is_satisfied_by(&n));
        prop_assert!(!spec.is_satisfied_by(&f));
        prop_assert!(!spec.is_satisfied_by(&None::<String>));
    }

    #[test]
    fn prop_count_matches_grapheme_count(min in 0usize..6, width in 0usize..6, text in "\\PC{0,12}") {
        let spec = CountSpecification::between(min, min + width).unwrap();
        let n = text.graphemes(true).count();
        prop_assert_eq!(spec.is_satisfied_by(&text), min <= n && n <= min + width);
    }

    #[test]
    fn prop_inverted_bounds_always_fail(min in 1usize..100, gap in 1usize..100) {
        let max = min.saturating_sub(gap);
        prop_assume!(max < min);
        prop_assert!(CountSpecification::between(min, max).is_err());
    }
}
