//! Configuration errors raised while building specifications.
//!
//! Evaluation never fails: a candidate that a specification cannot inspect
//! simply does not satisfy it. Construction is where malformed configuration
//! is rejected, so every fallible constructor returns `Result<_, SpecError>`.

use std::fmt;

/// Error returned when a specification is constructed with invalid
/// configuration.
///
/// # Examples
///
/// ```rust
/// use specula::{CountSpecification, SpecError};
///
/// let err = CountSpecification::between(5, 2).unwrap_err();
/// assert_eq!(err, SpecError::InvalidBounds { min: 5, max: 2 });
/// assert_eq!(err.to_string(), "invalid count bounds: min 5 is greater than max 2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SpecError {
    /// A count range whose lower bound exceeds its upper bound.
    InvalidBounds {
        /// Requested inclusive lower bound.
        min: usize,
        /// Requested inclusive upper bound.
        max: usize,
    },
    /// A regular expression that failed to compile.
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The compiler's diagnostic.
        source: regex::Error,
    },
    /// A character set name that does not resolve to a known set.
    UnknownCharacterSet(String),
}

impl SpecError {
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(pattern, error = %source, "rejected regular expression");
        SpecError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }

    pub(crate) fn invalid_bounds(min: usize, max: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(min, max, "rejected count bounds");
        SpecError::InvalidBounds { min, max }
    }

    pub(crate) fn unknown_character_set(name: &str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(name, "rejected character set name");
        SpecError::UnknownCharacterSet(name.to_string())
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::InvalidBounds { min, max } => write!(
                f,
                "invalid count bounds: min {} is greater than max {}",
                min, max
            ),
            SpecError::InvalidPattern { pattern, source } => {
                write!(f, "invalid regular expression {:?}: {}", pattern, source)
            }
            SpecError::UnknownCharacterSet(name) => {
                write!(f, "unknown character set {:?}", name)
            }
        }
    }
}

impl std::error::Error for SpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpecError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}
