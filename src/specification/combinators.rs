//! Core specification trait and logical combinators
//!
//! This module provides the foundational `Specification` trait, the
//! `SpecificationExt` extension that makes every specification combinable,
//! and the composite node types those combinators build.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A composable rule over a candidate of any type.
///
/// The candidate is passed type-erased. A specification that cannot inspect
/// the candidate's run-time type reports `false`, so every specification can
/// be evaluated against every candidate.
///
/// Evaluation takes `&self` and implementors are `Send + Sync`: a tree can
/// be evaluated repeatedly, from several threads, with the same result.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let short_digits = CharacterSetSpecification::decimal_digits()
///     .and(CountSpecification::at_most(3));
/// assert!(short_digits.is_satisfied_by(&"123"));
/// assert!(!short_digits.is_satisfied_by(&"1234"));
/// assert!(!short_digits.is_satisfied_by(&123));
/// ```
pub trait Specification: Send + Sync {
    /// Check if the candidate satisfies this specification.
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool;
}

impl<S: Specification + ?Sized> Specification for &S {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<S: Specification + ?Sized> Specification for Arc<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

/// A type-erased specification tree.
pub type BoxedSpecification = Box<dyn Specification>;

/// Extension trait for specification combinators.
///
/// Blanket-implemented for every [`Specification`], so leaves and composites
/// combine uniformly. Each combinator consumes its operands and returns a new
/// node; the operands are never modified.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let positive = lambda(|n: &i32| *n > 0);
/// let even = lambda(|n: &i32| n % 2 == 0);
/// let odd_or_negative = positive.and(even).not();
/// assert!(odd_or_negative.is_satisfied_by(&3));
/// assert!(odd_or_negative.is_satisfied_by(&-4));
/// assert!(!odd_or_negative.is_satisfied_by(&4));
/// ```
pub trait SpecificationExt: Specification + Sized {
    /// Combine with AND logic, `self` on the left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// let teen = lambda(|n: &u8| *n >= 13).and(lambda(|n: &u8| *n <= 19));
    /// assert!(teen.is_satisfied_by(&15_u8));
    /// assert!(!teen.is_satisfied_by(&20_u8));
    /// ```
    fn and<S: Specification>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }

    /// Combine with OR logic, `self` on the left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// let extreme = lambda(|n: &i32| *n < 0).or(lambda(|n: &i32| *n > 100));
    /// assert!(extreme.is_satisfied_by(&-5));
    /// assert!(extreme.is_satisfied_by(&150));
    /// assert!(!extreme.is_satisfied_by(&50));
    /// ```
    fn or<S: Specification>(self, other: S) -> OrSpecification<Self, S> {
        OrSpecification::new(self, other)
    }

    /// Invert the specification.
    ///
    /// Note that the inversion covers type mismatches too: a negated typed
    /// leaf is satisfied by candidates of any other type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// let not_empty = CountSpecification::exactly(0).not();
    /// assert!(not_empty.is_satisfied_by(&"x"));
    /// assert!(!not_empty.is_satisfied_by(&""));
    /// ```
    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }

    /// Erase the concrete type of this tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// let rules: Vec<BoxedSpecification> = vec![
    ///     CharacterSetSpecification::letters().boxed(),
    ///     CountSpecification::at_least(2).boxed(),
    /// ];
    /// assert!(rules.iter().all(|r| r.is_satisfied_by(&"ok")));
    /// ```
    fn boxed(self) -> BoxedSpecification
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Keep the candidates that satisfy this specification, in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// let words = vec!["a", "abc", "ab", "abcd"];
    /// let picked = CountSpecification::between(2, 3).unwrap().select(&words);
    /// assert_eq!(picked, vec![&"abc", &"ab"]);
    /// ```
    fn select<'c, T, I>(&self, candidates: I) -> Vec<&'c T>
    where
        T: Any,
        I: IntoIterator<Item = &'c T>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.is_satisfied_by(*candidate))
            .collect()
    }
}

impl<S: Specification> SpecificationExt for S {}

/// AND combinator - both children must be satisfied.
#[derive(Clone, Copy, Debug)]
pub struct AndSpecification<L, R> {
    left: L,
    right: R,
}

impl<L, R> AndSpecification<L, R> {
    /// Create a conjunction of two specifications.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// The left child.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The right child.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L: Specification, R: Specification> Specification for AndSpecification<L, R> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

/// OR combinator - either child must be satisfied.
#[derive(Clone, Copy, Debug)]
pub struct OrSpecification<L, R> {
    left: L,
    right: R,
}

impl<L, R> OrSpecification<L, R> {
    /// Create a disjunction of two specifications.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// The left child.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The right child.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L: Specification, R: Specification> Specification for OrSpecification<L, R> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }
}

/// NOT combinator - inverts the child.
#[derive(Clone, Copy, Debug)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    /// Create the negation of a specification.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The negated child.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Specification> Specification for NotSpecification<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

/// Satisfied when every child is satisfied.
///
/// An empty list is satisfied.
#[derive(Clone, Default)]
pub struct AllOf<S>(pub Vec<S>);

impl<S: Specification> Specification for AllOf<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        self.0.iter().all(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when all of the given ones are.
///
/// Children share one type; box them to mix kinds.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let password = all_of(vec![
///     CountSpecification::at_least(8).boxed(),
///     CharacterSetSpecification::containing_any(CharacterSet::DecimalDigits).boxed(),
///     CharacterSetSpecification::containing_any(CharacterSet::Uppercase).boxed(),
/// ]);
/// assert!(password.is_satisfied_by(&"Hunter2024"));
/// assert!(!password.is_satisfied_by(&"hunter2024"));
/// ```
pub fn all_of<S: Specification>(specifications: Vec<S>) -> AllOf<S> {
    AllOf(specifications)
}

/// Satisfied when at least one child is satisfied.
///
/// An empty list is not satisfied.
#[derive(Clone, Default)]
pub struct AnyOf<S>(pub Vec<S>);

impl<S: Specification> Specification for AnyOf<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        self.0.iter().any(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when any of the given ones is.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let empty_or_four = any_of(vec![
///     CountSpecification::exactly(0),
///     CountSpecification::exactly(4),
/// ]);
/// assert!(empty_or_four.is_satisfied_by(&""));
/// assert!(empty_or_four.is_satisfied_by(&"1234"));
/// assert!(!empty_or_four.is_satisfied_by(&"12"));
/// ```
pub fn any_of<S: Specification>(specifications: Vec<S>) -> AnyOf<S> {
    AnyOf(specifications)
}

/// Satisfied when no child is satisfied.
///
/// Equivalent to `any_of(...).not()`.
#[derive(Clone, Default)]
pub struct NoneOf<S>(pub Vec<S>);

impl<S: Specification> Specification for NoneOf<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        !self.0.iter().any(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when none of the given ones is.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let clean = none_of(vec![
///     RegularExpressionSpecification::new("(?i)drop table").unwrap(),
///     RegularExpressionSpecification::new("--").unwrap(),
/// ]);
/// assert!(clean.is_satisfied_by(&"select 1"));
/// assert!(!clean.is_satisfied_by(&"1; DROP TABLE users"));
/// ```
pub fn none_of<S: Specification>(specifications: Vec<S>) -> NoneOf<S> {
    NoneOf(specifications)
}

macro_rules! debug_list {
    ($($name:ident),*) => {
        $(
            impl<S> fmt::Debug for $name<S> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}({} specifications)", stringify!($name), self.0.len())
                }
            }
        )*
    };
}

debug_list!(AllOf, AnyOf, NoneOf);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specification::lambda;

    fn gt(bound: i32) -> impl Specification + Copy {
        lambda(move |n: &i32| *n > bound)
    }

    fn lt(bound: i32) -> impl Specification + Copy {
        lambda(move |n: &i32| *n < bound)
    }

    #[test]
    fn test_and() {
        let s = gt(0).and(lt(10));
        assert!(s.is_satisfied_by(&5));
        assert!(!s.is_satisfied_by(&0));
        assert!(!s.is_satisfied_by(&10));
    }

    #[test]
    fn test_or() {
        let s = lt(0).or(gt(100));
        assert!(s.is_satisfied_by(&-5));
        assert!(s.is_satisfied_by(&150));
        assert!(!s.is_satisfied_by(&50));
    }

    #[test]
    fn test_not() {
        let s = gt(0).not();
        assert!(s.is_satisfied_by(&-5));
        assert!(s.is_satisfied_by(&0));
        assert!(!s.is_satisfied_by(&5));
    }

    #[test]
    fn test_combinators_leave_operands_usable() {
        let positive = gt(0);
        let small = lt(10);
        let both = positive.and(small);
        let either = positive.or(small);
        assert!(both.is_satisfied_by(&5));
        assert!(either.is_satisfied_by(&50));
        assert!(positive.is_satisfied_by(&1));
    }

    #[test]
    fn test_children_accessors() {
        let s = gt(0).and(lt(10));
        assert!(s.left().is_satisfied_by(&100));
        assert!(s.right().is_satisfied_by(&-100));
        let n = gt(0).not();
        assert!(n.inner().is_satisfied_by(&1));
    }

    #[test]
    fn test_complex_chain() {
        // (0 < x < 10) or (x > 100), negated
        let s = gt(0).and(lt(10)).or(gt(100)).not();
        assert!(s.is_satisfied_by(&0));
        assert!(s.is_satisfied_by(&50));
        assert!(!s.is_satisfied_by(&5));
        assert!(!s.is_satisfied_by(&150));
    }

    #[test]
    fn test_mismatched_candidate_is_rejected_by_composites() {
        let s = gt(0).and(lt(10));
        assert!(!s.is_satisfied_by(&"5"));
        assert!(!gt(0).or(lt(10)).is_satisfied_by(&5_i64));
    }

    #[test]
    fn test_reference_box_and_arc_forward() {
        let s = gt(0);
        assert!((&s).is_satisfied_by(&1));
        let boxed: BoxedSpecification = s.boxed();
        assert!(boxed.is_satisfied_by(&1));
        let shared: Arc<dyn Specification> = Arc::new(s);
        assert!(shared.is_satisfied_by(&1));
        assert!(shared.clone().and(lt(5)).is_satisfied_by(&3));
    }

    #[test]
    fn test_boxed_tree_mixes_kinds() {
        let tree = gt(0).boxed().and(lt(10).not().boxed()).boxed();
        assert!(tree.is_satisfied_by(&10));
        assert!(!tree.is_satisfied_by(&9));
    }

    #[test]
    fn test_all_of() {
        let s = all_of(vec![gt(0), gt(-10), gt(-100)]);
        assert!(s.is_satisfied_by(&50));
        assert!(!s.is_satisfied_by(&-50));
        assert!(all_of(Vec::<BoxedSpecification>::new()).is_satisfied_by(&1));
    }

    #[test]
    fn test_any_of() {
        let s = any_of(vec![lt(0).boxed(), gt(100).boxed()]);
        assert!(s.is_satisfied_by(&-1));
        assert!(s.is_satisfied_by(&101));
        assert!(!s.is_satisfied_by(&50));
        assert!(!any_of(Vec::<BoxedSpecification>::new()).is_satisfied_by(&1));
    }

    #[test]
    fn test_none_of() {
        let s = none_of(vec![lt(0).boxed(), gt(100).boxed()]);
        assert!(s.is_satisfied_by(&50));
        assert!(!s.is_satisfied_by(&-1));
        assert!(none_of(Vec::<BoxedSpecification>::new()).is_satisfied_by(&1));
    }

    #[test]
    fn test_select_preserves_order() {
        let values = vec![12_i32, 3, -1, 7, 40, 0];
        let picked = gt(0).and(lt(10)).select(&values);
        assert_eq!(picked, vec![&3, &7]);
    }

    #[test]
    fn test_list_debug() {
        let s = any_of(vec![gt(0), gt(1)]);
        assert_eq!(format!("{:?}", s), "AnyOf(2 specifications)");
    }
}
