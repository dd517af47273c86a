//! Length and element-count ranges

use std::any::{type_name, Any};
use std::fmt;

use super::combinators::Specification;
use crate::candidate::{count_as, count_of, mismatch, Countable};
use crate::error::SpecError;

type Counter = fn(&dyn Any) -> Option<usize>;

/// Specification satisfied when a candidate's count lies in `min..=max`.
///
/// Text is counted in grapheme clusters. `Vec`, `VecDeque`, `BTreeSet`,
/// `HashSet` and static slices of the common element types are counted by
/// element (see [`count_of`](crate::candidate::count_of)).
///
/// Fixed-size arrays, collections of your own element types and maps are not
/// counted out of the box: a `[i32; 3]` or a `Vec<Movie>` candidate does not
/// satisfy any count until its type is registered with
/// [`counting`](CountSpecification::counting).
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let spec = CountSpecification::between(2, 4).unwrap();
/// assert!(spec.is_satisfied_by(&"42"));
/// assert!(!spec.is_satisfied_by(&"too long"));
/// assert!(spec.is_satisfied_by(&vec![1_i32, 2, 3]));
/// assert!(!spec.is_satisfied_by(&3_i32));
/// ```
#[derive(Clone)]
pub struct CountSpecification {
    min: usize,
    max: usize,
    counters: Vec<(&'static str, Counter)>,
}

impl CountSpecification {
    /// Count between `min` and `max`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::InvalidBounds`] when `min > max`.
    pub fn between(min: usize, max: usize) -> Result<Self, SpecError> {
        if min > max {
            return Err(SpecError::invalid_bounds(min, max));
        }
        Ok(Self::range(min, max))
    }

    /// Count of exactly `count`.
    pub fn exactly(count: usize) -> Self {
        Self::range(count, count)
    }

    /// Count of at least `min`.
    pub fn at_least(min: usize) -> Self {
        Self::range(min, usize::MAX)
    }

    /// Count of at most `max`.
    pub fn at_most(max: usize) -> Self {
        Self::range(0, max)
    }

    fn range(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            counters: Vec::new(),
        }
    }

    /// Also count candidates of type `C`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// struct Movie;
    ///
    /// let cast = vec![Movie, Movie];
    /// let rgb = [255_u8, 128, 0];
    /// let spec = CountSpecification::at_most(5);
    /// assert!(!spec.is_satisfied_by(&cast));
    /// assert!(!spec.is_satisfied_by(&rgb));
    ///
    /// let spec = spec.counting::<Vec<Movie>>().counting::<[u8; 3]>();
    /// assert!(spec.is_satisfied_by(&cast));
    /// assert!(spec.is_satisfied_by(&rgb));
    /// ```
    pub fn counting<C: Countable + Any>(mut self) -> Self {
        self.counters.push((type_name::<C>(), count_as::<C> as Counter));
        self
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> usize {
        self.max
    }

    fn count(&self, candidate: &dyn Any) -> Option<usize> {
        count_of(candidate).or_else(|| {
            self.counters
                .iter()
                .find_map(|(_, counter)| counter(candidate))
        })
    }
}

impl fmt::Debug for CountSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountSpecification")
            .field("min", &self.min)
            .field("max", &self.max)
            .field(
                "counting",
                &self.counters.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Specification for CountSpecification {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        match self.count(candidate) {
            Some(n) => self.min <= n && n <= self.max,
            None => mismatch("CountSpecification", "countable"),
        }
    }
}
