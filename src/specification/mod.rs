//! Composable specifications
//!
//! A specification answers one question about a candidate: does it satisfy
//! the rule? Specifications combine with `and`, `or` and `not` into trees
//! that are built once and evaluated any number of times.
//!
//! # Leaves
//!
//! - [`LambdaSpecification`] / [`PredicateSpecification`]: any `Fn(&T) -> bool`
//! - [`CharacterSetSpecification`]: character-set membership over text
//! - [`RegularExpressionSpecification`]: pattern match over text
//! - [`CountSpecification`]: inclusive length or element-count range
//!
//! # Example
//!
//! ```rust
//! use specula::specification::*;
//!
//! let only_digits = CharacterSetSpecification::decimal_digits();
//! let two_to_four = CountSpecification::between(2, 4).unwrap();
//! let two_zeroes = RegularExpressionSpecification::new("0.*0").unwrap();
//!
//! let spec = only_digits.and(two_to_four).and(two_zeroes.not());
//! assert!(spec.is_satisfied_by(&"0123"));
//! assert!(!spec.is_satisfied_by(&"1010"));
//! ```
//!
//! # Filtering
//!
//! ```rust
//! use specula::specification::*;
//!
//! struct Movie {
//!     title: &'static str,
//!     budget: f64,
//! }
//!
//! let movies = vec![
//!     Movie { title: "Alien", budget: 11.0 },
//!     Movie { title: "Alien 3", budget: 50.0 },
//!     Movie { title: "Prometheus", budget: 130.0 },
//! ];
//! let cheap_or_huge = predicate(|m: &Movie| m.budget < 20.0)
//!     .or(predicate(|m: &Movie| m.budget > 70.0));
//! let titles: Vec<_> = cheap_or_huge.select(&movies).iter().map(|m| m.title).collect();
//! assert_eq!(titles, vec!["Alien", "Prometheus"]);
//! ```

mod character_set;
mod combinators;
mod count;
mod lambda;
mod pattern;

pub mod prelude;

// Re-export core traits
pub use combinators::{BoxedSpecification, Specification, SpecificationExt};

// Re-export combinator types
pub use combinators::{
    all_of, any_of, none_of, AllOf, AndSpecification, AnyOf, NoneOf, NotSpecification,
    OrSpecification,
};

// Re-export leaves
pub use character_set::{CharacterSet, CharacterSetSpecification};
pub use count::CountSpecification;
pub use lambda::{lambda, predicate, LambdaSpecification, PredicateSpecification};
pub use pattern::RegularExpressionSpecification;
