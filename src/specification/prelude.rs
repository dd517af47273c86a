//! Specification prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use specula::prelude::*;
//!
//! let short_word = CharacterSetSpecification::letters().and(CountSpecification::at_most(4));
//! assert!(short_word.is_satisfied_by(&"ice"));
//! ```

// Core traits
pub use super::combinators::{BoxedSpecification, Specification, SpecificationExt};

// Composites
pub use super::combinators::{
    all_of, any_of, none_of, AndSpecification, NotSpecification, OrSpecification,
};

// Leaves
pub use super::character_set::{CharacterSet, CharacterSetSpecification};
pub use super::count::CountSpecification;
pub use super::lambda::{lambda, predicate, LambdaSpecification, PredicateSpecification};
pub use super::pattern::RegularExpressionSpecification;
