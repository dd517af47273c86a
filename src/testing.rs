//! Testing utilities for specifications
//!
//! Assertion macros that report the failing expression, not just `false`.
//!
//! # Example
//!
//! ```rust
//! use specula::prelude::*;
//! use specula::{assert_not_satisfied, assert_satisfied};
//!
//! let digits = CharacterSetSpecification::decimal_digits();
//! assert_satisfied!(digits, "123");
//! assert_not_satisfied!(digits, "12a");
//! ```

/// Assert that a candidate satisfies a specification.
///
/// # Example
///
/// ```rust
/// use specula::{assert_satisfied, CountSpecification};
///
/// assert_satisfied!(CountSpecification::exactly(2), "ab");
/// ```
#[macro_export]
macro_rules! assert_satisfied {
    ($spec:expr, $candidate:expr) => {
        if !$crate::Specification::is_satisfied_by(&$spec, &$candidate) {
            panic!(
                "Expected `{}` to satisfy `{}`",
                stringify!($candidate),
                stringify!($spec)
            );
        }
    };
}

/// Assert that a candidate does not satisfy a specification.
///
/// # Example
///
/// ```rust
/// use specula::{assert_not_satisfied, CountSpecification};
///
/// assert_not_satisfied!(CountSpecification::exactly(2), "abc");
/// assert_not_satisfied!(CountSpecification::exactly(2), 42_i32);
/// ```
#[macro_export]
macro_rules! assert_not_satisfied {
    ($spec:expr, $candidate:expr) => {
        if $crate::Specification::is_satisfied_by(&$spec, &$candidate) {
            panic!(
                "Expected `{}` not to satisfy `{}`",
                stringify!($candidate),
                stringify!($spec)
            );
        }
    };
}

/// Assert how many candidates a specification selects.
///
/// # Example
///
/// ```rust
/// use specula::{assert_selects, CountSpecification};
///
/// let words = vec!["a", "bb", "cc", "ddd"];
/// assert_selects!(CountSpecification::exactly(2), &words, 2);
/// ```
#[macro_export]
macro_rules! assert_selects {
    ($spec:expr, $candidates:expr, $expected:expr) => {
        let selected = $crate::SpecificationExt::select(&$spec, $candidates).len();
        assert_eq!(
            selected,
            $expected,
            "`{}` selected {} candidates, expected {}",
            stringify!($spec),
            selected,
            $expected
        );
    };
}
