//! # Specula
//!
//! Composable specifications for Rust.
//!
//! A specification is a reusable rule over candidate values. Small leaf rules
//! combine with `and`, `or` and `not` into trees that replace inline
//! conditional logic in validation and filtering code.
//!
//! ## Quick Example
//!
//! ```rust
//! use specula::prelude::*;
//!
//! // The string must be all digits, 2 to 4 characters long,
//! // and must not contain two zeroes.
//! let only_digits = CharacterSetSpecification::decimal_digits();
//! let between_2_and_4 = CountSpecification::between(2, 4)?;
//! let two_zeroes = RegularExpressionSpecification::new("0.*0")?;
//!
//! let spec = only_digits.and(between_2_and_4).and(two_zeroes.not());
//!
//! assert!(spec.is_satisfied_by(&"42"));
//! assert!(spec.is_satisfied_by(&"0123"));
//! assert!(!spec.is_satisfied_by(&"ice"));
//! assert!(!spec.is_satisfied_by(&"1010"));
//! assert!(!spec.is_satisfied_by(&1010)); // not text
//! # Ok::<(), specula::SpecError>(())
//! ```
//!
//! ## Candidates
//!
//! Candidates are passed as `&dyn Any`. A leaf that cannot inspect the
//! candidate's type reports `false` instead of failing, so any tree can be
//! evaluated against any value. Configuration mistakes such as an invalid
//! pattern are reported by the constructors as [`SpecError`].
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for rejected configuration and for
//!   candidates a leaf could not inspect.
//! - `proptest`: `Arbitrary` for [`CharacterSet`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod candidate;
mod error;
pub mod specification;
pub mod testing;

// Re-exports
pub use candidate::Countable;
pub use error::SpecError;
pub use specification::{
    lambda, predicate, BoxedSpecification, CharacterSet, CharacterSetSpecification,
    CountSpecification, LambdaSpecification, PredicateSpecification,
    RegularExpressionSpecification, Specification, SpecificationExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::SpecError;
    pub use crate::specification::prelude::*;
}
