//! Character-set membership over text candidates

use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::combinators::Specification;
use crate::candidate::{as_text, mismatch};
use crate::error::SpecError;

/// A set of characters, either one of the named sets or a custom one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharacterSet {
    /// Decimal digits in any script (Unicode category `Nd`), such as `7`,
    /// `٣` or the fullwidth `１`.
    DecimalDigits,
    /// ASCII digits `0` through `9` only.
    AsciiDigits,
    /// Alphabetic characters.
    Letters,
    /// Alphabetic or numeric characters.
    Alphanumerics,
    /// Whitespace characters.
    Whitespace,
    /// Lowercase characters.
    Lowercase,
    /// Uppercase characters.
    Uppercase,
    /// ASCII punctuation.
    Punctuation,
    /// An explicit set of characters.
    Custom(BTreeSet<char>),
}

impl CharacterSet {
    /// Build a custom set from the given characters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::CharacterSet;
    ///
    /// let hex = CharacterSet::custom("0123456789abcdef".chars());
    /// assert!(hex.contains('c'));
    /// assert!(!hex.contains('g'));
    /// ```
    pub fn custom<I: IntoIterator<Item = char>>(chars: I) -> Self {
        CharacterSet::Custom(chars.into_iter().collect())
    }

    /// Whether `c` belongs to this set.
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterSet::DecimalDigits => is_decimal_digit(c),
            CharacterSet::AsciiDigits => c.is_ascii_digit(),
            CharacterSet::Letters => c.is_alphabetic(),
            CharacterSet::Alphanumerics => c.is_alphanumeric(),
            CharacterSet::Whitespace => c.is_whitespace(),
            CharacterSet::Lowercase => c.is_lowercase(),
            CharacterSet::Uppercase => c.is_uppercase(),
            CharacterSet::Punctuation => c.is_ascii_punctuation(),
            CharacterSet::Custom(chars) => chars.contains(&c),
        }
    }

    /// Canonical name; `"custom"` for custom sets.
    pub fn name(&self) -> &'static str {
        match self {
            CharacterSet::DecimalDigits => "decimal-digits",
            CharacterSet::AsciiDigits => "ascii-digits",
            CharacterSet::Letters => "letters",
            CharacterSet::Alphanumerics => "alphanumerics",
            CharacterSet::Whitespace => "whitespace",
            CharacterSet::Lowercase => "lowercase",
            CharacterSet::Uppercase => "uppercase",
            CharacterSet::Punctuation => "punctuation",
            CharacterSet::Custom(_) => "custom",
        }
    }
}

/// Membership in Unicode general category `Nd`.
fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    static ND: OnceLock<Option<Regex>> = OnceLock::new();
    let mut buf = [0; 4];
    ND.get_or_init(|| Regex::new(r"^\p{Nd}$").ok())
        .as_ref()
        .is_some_and(|nd| nd.is_match(c.encode_utf8(&mut buf)))
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a named set.
///
/// Case is ignored, as are `-`, `_` and spaces, so `"decimalDigits"`,
/// `"decimal-digits"` and `"Decimal Digits"` are the same name.
impl FromStr for CharacterSet {
    type Err = SpecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "decimaldigits" | "decimaldigit" | "digits" | "digit" => {
                Ok(CharacterSet::DecimalDigits)
            }
            "asciidigits" | "asciidigit" => Ok(CharacterSet::AsciiDigits),
            "letters" | "letter" | "alphabetic" => Ok(CharacterSet::Letters),
            "alphanumerics" | "alphanumeric" => Ok(CharacterSet::Alphanumerics),
            "whitespace" | "whitespaces" => Ok(CharacterSet::Whitespace),
            "lowercase" | "lowercaseletters" => Ok(CharacterSet::Lowercase),
            "uppercase" | "uppercaseletters" => Ok(CharacterSet::Uppercase),
            "punctuation" | "punctuationcharacters" => Ok(CharacterSet::Punctuation),
            _ => Err(SpecError::unknown_character_set(name)),
        }
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for CharacterSet {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        prop_oneof![
            Just(CharacterSet::DecimalDigits),
            Just(CharacterSet::AsciiDigits),
            Just(CharacterSet::Letters),
            Just(CharacterSet::Alphanumerics),
            Just(CharacterSet::Whitespace),
            Just(CharacterSet::Lowercase),
            Just(CharacterSet::Uppercase),
            Just(CharacterSet::Punctuation),
            prop::collection::btree_set(any::<char>(), 0..16).prop_map(CharacterSet::Custom),
        ]
        .boxed()
    }
}

/// Specification over the characters of a text candidate.
///
/// In the default mode every character must belong to the set, which the
/// empty string satisfies vacuously. With
/// [`containing_any`](CharacterSetSpecification::containing_any) one member
/// character is enough, and the empty string does not satisfy it.
///
/// # Example
///
/// ```rust
/// use specula::prelude::*;
///
/// let digits = CharacterSetSpecification::decimal_digits();
/// assert!(digits.is_satisfied_by(&"2024"));
/// assert!(!digits.is_satisfied_by(&"20x4"));
/// assert!(digits.is_satisfied_by(&""));
/// assert!(!digits.is_satisfied_by(&2024));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSetSpecification {
    set: CharacterSet,
    require_all: bool,
}

impl CharacterSetSpecification {
    /// Every character of the candidate must be in `set`.
    pub fn new(set: CharacterSet) -> Self {
        Self {
            set,
            require_all: true,
        }
    }

    /// At least one character of the candidate must be in `set`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// let has_space = CharacterSetSpecification::containing_any(CharacterSet::Whitespace);
    /// assert!(has_space.is_satisfied_by(&"too long"));
    /// assert!(!has_space.is_satisfied_by(&"short"));
    /// assert!(!has_space.is_satisfied_by(&""));
    /// ```
    pub fn containing_any(set: CharacterSet) -> Self {
        Self {
            set,
            require_all: false,
        }
    }

    /// Every character must be in the named set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specula::prelude::*;
    ///
    /// let digits = CharacterSetSpecification::named("decimalDigits").unwrap();
    /// assert!(digits.is_satisfied_by(&"42"));
    /// assert!(CharacterSetSpecification::named("emoji").is_err());
    /// ```
    pub fn named(name: &str) -> Result<Self, SpecError> {
        Ok(Self::new(name.parse()?))
    }

    /// Every character must be a decimal digit, in any script.
    pub fn decimal_digits() -> Self {
        Self::new(CharacterSet::DecimalDigits)
    }

    /// Every character must be alphabetic.
    pub fn letters() -> Self {
        Self::new(CharacterSet::Letters)
    }

    /// Every character must be alphanumeric.
    pub fn alphanumerics() -> Self {
        Self::new(CharacterSet::Alphanumerics)
    }

    /// Every character must be whitespace.
    pub fn whitespace() -> Self {
        Self::new(CharacterSet::Whitespace)
    }

    /// The configured set.
    pub fn set(&self) -> &CharacterSet {
        &self.set
    }

    /// Whether every character must match.
    pub fn requires_all(&self) -> bool {
        self.require_all
    }

    fn check(&self, text: &str) -> bool {
        if self.require_all {
            text.chars().all(|c| self.set.contains(c))
        } else {
            text.chars().any(|c| self.set.contains(c))
        }
    }
}

impl Specification for CharacterSetSpecification {
    #[inline]
    fn is_satisfied_by(&self, candidate: &dyn Any) -> bool {
        match as_text(candidate) {
            Some(text) => self.check(text),
            None => mismatch("CharacterSetSpecification", "text"),
        }
    }
}
