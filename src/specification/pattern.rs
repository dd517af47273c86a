//! Regular-expression matching over text candidates

use std::any::Any;

use regex::{Regex, RegexBuilder};

use super::combinators::Specification;
use crate::candidate::{as_text, mismatch};
use crate::error::SpecError;

/// Specification satisfied by text the pattern matches.
///
/// Matching is unanchored: the pattern may match anywhere in the candidate
/// unless it carries its own `^` or `$` anchors.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let two_zeroes = RegularExpressionSpecification::new("0.*0").unwrap();
/// assert!(two_zeroes.is_satisfied_by(&"1010"));
/// assert!(!two_zeroes.is_satisfied_by(&"0123"));
/// assert!(!two_zeroes.is_satisfied_by(&1010));
/// ```
#[derive(Clone, Debug)]
pub struct RegularExpressionSpecification {
    regex: Regex,
}

impl RegularExpressionSpecification {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::InvalidPattern`] if the pattern does not compile.
    ///
    /// ```rust
    /// use specula::{RegularExpressionSpecification, SpecError};
    ///
    /// let err = RegularExpressionSpecification::new("(unclosed").unwrap_err();
    /// assert!(matches!(err, SpecError::InvalidPattern { .. }));
    /// ```
    pub fn new(pattern: &str) -> Result<Self, SpecError> {
        Regex::new(pattern)
            .map(Self::from_regex)
            .map_err(|e| SpecError::invalid_pattern(pattern, e))
    }

    /// Compile `pattern`, ignoring case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// let scott = RegularExpressionSpecification::case_insensitive("ridley scott").unwrap();
    /// assert!(scott.is_satisfied_by(&"Ridley Scott"));
    /// ```
    pub fn case_insensitive(pattern: &str) -> Result<Self, SpecError> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(Self::from_regex)
            .map_err(|e| SpecError::invalid_pattern(pattern, e))
    }

    /// Use an already compiled regex.
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// The pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Specification for RegularExpressionSpecification {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        match as_text(candidate) {
            Some(text) => self.regex.is_match(text),
            None => mismatch("RegularExpressionSpecification", "text"),
        }
    }
}
