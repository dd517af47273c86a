//! Capability checks over type-erased candidates.
//!
//! Specifications receive their candidate as `&dyn Any`. The leaves that work
//! on text or on lengths use the helpers here to view a candidate as `&str` or
//! as a count, and report `None` for anything they cannot inspect.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

/// A value with a length or element count.
///
/// Implement this for your own collection and register it with
/// [`CountSpecification::counting`](crate::CountSpecification::counting) to
/// make it countable.
///
/// # Example
///
/// ```rust
/// use specula::Countable;
///
/// struct Playlist(Vec<&'static str>);
///
/// impl Countable for Playlist {
///     fn count(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// assert_eq!(Playlist(vec!["a", "b"]).count(), 2);
/// ```
pub trait Countable {
    /// Number of elements, or of grapheme clusters for text.
    fn count(&self) -> usize;
}

impl Countable for str {
    fn count(&self) -> usize {
        self.graphemes(true).count()
    }
}

impl Countable for String {
    fn count(&self) -> usize {
        self.as_str().count()
    }
}

impl<T> Countable for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<T> Countable for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for BTreeSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Countable for HashSet<T, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Countable for BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Countable for HashMap<K, V, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

/// View a candidate as text.
///
/// Recognises `String`, `&'static str`, `Box<str>`, `Arc<str>`, `Rc<str>` and
/// `Cow<'static, str>`.
///
/// # Example
///
/// ```rust
/// use specula::candidate::as_text;
///
/// assert_eq!(as_text(&String::from("abc")), Some("abc"));
/// assert_eq!(as_text(&"abc"), Some("abc"));
/// assert_eq!(as_text(&42_i32), None);
/// ```
pub fn as_text(candidate: &dyn Any) -> Option<&str> {
    if let Some(s) = candidate.downcast_ref::<String>() {
        return Some(s.as_str());
    }
    if let Some(s) = candidate.downcast_ref::<&'static str>() {
        return Some(*s);
    }
    if let Some(s) = candidate.downcast_ref::<Box<str>>() {
        return Some(&**s);
    }
    if let Some(s) = candidate.downcast_ref::<Arc<str>>() {
        return Some(&**s);
    }
    if let Some(s) = candidate.downcast_ref::<Rc<str>>() {
        return Some(&**s);
    }
    if let Some(s) = candidate.downcast_ref::<Cow<'static, str>>() {
        return Some(&**s);
    }
    None
}

macro_rules! count_sequences {
    ($candidate:expr; $($elem:ty),* $(,)?) => {
        $(
            if let Some(v) = $candidate.downcast_ref::<Vec<$elem>>() {
                return Some(v.len());
            }
            if let Some(v) = $candidate.downcast_ref::<&'static [$elem]>() {
                return Some(v.len());
            }
            if let Some(v) = $candidate.downcast_ref::<VecDeque<$elem>>() {
                return Some(v.len());
            }
            if let Some(v) = $candidate.downcast_ref::<BTreeSet<$elem>>() {
                return Some(v.len());
            }
            if let Some(v) = $candidate.downcast_ref::<HashSet<$elem>>() {
                return Some(v.len());
            }
        )*
    };
}

/// View a candidate as a count.
///
/// Text is counted in extended grapheme clusters, so `"e\u{301}"` counts as
/// one. `Vec`, `VecDeque`, `BTreeSet`, `HashSet` and `&'static` slices are
/// counted by element for the common element types: `String`,
/// `&'static str`, `char`, `bool`, the primitive integers and floats, and
/// `Box<dyn Any + Send + Sync>`.
///
/// Anything else is `None`, including fixed-size arrays such as `[i32; 3]`,
/// collections of your own element types such as `Vec<Movie>`, and maps.
/// Register those on the specification with
/// [`CountSpecification::counting`](crate::CountSpecification::counting).
///
/// # Example
///
/// ```rust
/// use specula::candidate::count_of;
///
/// assert_eq!(count_of(&"héllo"), Some(5));
/// assert_eq!(count_of(&"e\u{301}"), Some(1));
/// assert_eq!(count_of(&vec![1_i32, 2, 3]), Some(3));
/// assert_eq!(count_of(&3.5_f64), None);
/// ```
pub fn count_of(candidate: &dyn Any) -> Option<usize> {
    if let Some(text) = as_text(candidate) {
        return Some(text.count());
    }
    count_sequences!(candidate;
        String, &'static str, char, bool,
        u8, u16, u32, u64, u128, usize,
        i8, i16, i32, i64, i128, isize,
        f32, f64,
        Box<dyn Any + Send + Sync>,
    );
    None
}

/// Count a candidate of exactly type `C`.
pub(crate) fn count_as<C: Countable + Any>(candidate: &dyn Any) -> Option<usize> {
    candidate.downcast_ref::<C>().map(Countable::count)
}

/// Record that a leaf rejected a candidate it could not inspect.
#[inline]
pub(crate) fn mismatch(specification: &'static str, expected: &'static str) -> bool {
    #[cfg(feature = "tracing")]
    tracing::trace!(specification, expected, "candidate type not accepted");
    #[cfg(not(feature = "tracing"))]
    let _ = (specification, expected);
    false
}
