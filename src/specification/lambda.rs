//! Typed predicate leaves
//!
//! Wrap any `Fn(&T) -> bool` as a specification. The candidate is narrowed to
//! `T` before the predicate runs; candidates of another type are rejected.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use super::combinators::Specification;
use crate::candidate::mismatch;

/// Specification backed by a predicate over candidates of type `T`.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let adult = LambdaSpecification::lambda(|age: &u32| *age >= 18);
/// assert!(adult.is_satisfied_by(&21_u32));
/// assert!(!adult.is_satisfied_by(&12_u32));
/// assert!(!adult.is_satisfied_by(&"21")); // not a u32
/// ```
pub struct LambdaSpecification<T, F> {
    lambda: F,
    _candidate: PhantomData<fn(&T)>,
}

/// Alias of [`LambdaSpecification`] for the `PredicateSpecification::new`
/// construction style.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// struct Movie {
///     budget: f64,
/// }
///
/// let blockbuster = PredicateSpecification::new(|m: &Movie| m.budget > 70.0);
/// assert!(blockbuster.is_satisfied_by(&Movie { budget: 130.0 }));
/// assert!(!blockbuster.is_satisfied_by(&Movie { budget: 11.0 }));
/// ```
pub type PredicateSpecification<T, F> = LambdaSpecification<T, F>;

impl<T, F> LambdaSpecification<T, F>
where
    T: Any,
    F: Fn(&T) -> bool + Send + Sync,
{
    /// Wrap a predicate.
    pub fn new(lambda: F) -> Self {
        Self {
            lambda,
            _candidate: PhantomData,
        }
    }

    /// Wrap a predicate. Same as [`LambdaSpecification::new`].
    pub fn lambda(lambda: F) -> Self {
        Self::new(lambda)
    }

    /// Whether the candidate has the type this predicate expects.
    ///
    /// The predicate itself is not run.
    pub fn accepts(&self, candidate: &dyn Any) -> bool {
        candidate.is::<T>()
    }

    /// Name of the expected candidate type.
    pub fn candidate_type(&self) -> &'static str {
        type_name::<T>()
    }
}

impl<T, F> Specification for LambdaSpecification<T, F>
where
    T: Any,
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        match candidate.downcast_ref::<T>() {
            Some(value) => (self.lambda)(value),
            None => mismatch("LambdaSpecification", type_name::<T>()),
        }
    }
}

impl<T, F: Clone> Clone for LambdaSpecification<T, F> {
    fn clone(&self) -> Self {
        Self {
            lambda: self.lambda.clone(),
            _candidate: PhantomData,
        }
    }
}

impl<T, F: Copy> Copy for LambdaSpecification<T, F> {}

impl<T, F> fmt::Debug for LambdaSpecification<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LambdaSpecification<{}>", type_name::<T>())
    }
}

/// Create a specification from a predicate over `T`.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let even = lambda(|n: &i64| n % 2 == 0);
/// assert!(even.is_satisfied_by(&4_i64));
/// assert!(!even.is_satisfied_by(&4_i32)); // wrong integer type
/// ```
pub fn lambda<T, F>(f: F) -> LambdaSpecification<T, F>
where
    T: Any,
    F: Fn(&T) -> bool + Send + Sync,
{
    LambdaSpecification::new(f)
}

/// Create a specification from a predicate over `T`. Same as [`lambda`].
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let shouting = predicate(|s: &String| s.chars().all(|c| !c.is_lowercase()));
/// assert!(shouting.is_satisfied_by(&String::from("HEY")));
/// assert!(!shouting.is_satisfied_by(&String::from("hey")));
/// ```
pub fn predicate<T, F>(f: F) -> PredicateSpecification<T, F>
where
    T: Any,
    F: Fn(&T) -> bool + Send + Sync,
{
    PredicateSpecification::new(f)
}
