use crate::types::alloc_type::{String, Vec};
use crate::types::error_formatter::ErrorFormatBuilder;
use crate::types::{Error, ErrorVec, Outcome};
use core::fmt::{self, Display};
use smallvec::smallvec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, non-empty sequence of [`Error`]s carried by a failed [`Outcome`].
///
/// Insertion order is preserved and duplicates are kept. There is no way to
/// build an empty `Errors`, which is what lets `Outcome` guarantee that a
/// failure always has at least one reason.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Errors};
///
/// let mut errors = Errors::new("missing name");
/// errors.push("missing email");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.message(), "missing name\nmissing email");
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Error>", into = "Vec<Error>")
)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Errors {
    items: ErrorVec<Error>,
}

#[allow(clippy::len_without_is_empty)]
impl Errors {
    /// Creates a sequence holding a single error.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Error>,
    {
        Self { items: smallvec![error.into()] }
    }

    /// Collects errors from an iterator, or returns `None` if it yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Errors};
    ///
    /// assert!(Errors::try_from_iter(Vec::<Error>::new()).is_none());
    ///
    /// let errors = Errors::try_from_iter(["a", "b"].map(Error::from)).unwrap();
    /// assert_eq!(errors.messages().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        let items: ErrorVec<Error> = iter.into_iter().collect();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Appends one error at the end.
    #[inline]
    pub fn push<E>(&mut self, error: E)
    where
        E: Into<Error>,
    {
        self.items.push(error.into());
    }

    /// Appends every error from an iterator, in order.
    #[inline]
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Error>,
    {
        self.items.extend(iter);
    }

    /// Concatenates `other` after `self`, keeping both orders.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Errors;
    ///
    /// let joined = Errors::new("a").append(Errors::new("b"));
    /// assert_eq!(joined.message(), "a\nb");
    /// ```
    #[inline]
    pub fn append(mut self, other: Errors) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Number of errors. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The earliest error in the sequence.
    #[inline]
    pub fn first(&self) -> &Error {
        &self.items[0]
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.items
    }

    /// Iterates over the message of each error, in order.
    #[inline]
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(Error::message)
    }

    /// All messages joined with a newline.
    pub fn message(&self) -> String {
        self.messages().collect::<Vec<_>>().join("\n")
    }

    /// Returns a builder for rendering the sequence with a custom layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Errors;
    ///
    /// let errors = Errors::new("a").append(Errors::new("b"));
    /// assert_eq!(errors.fmt().compact().to_string(), "a | b");
    /// ```
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self.as_slice())
    }

    /// Transforms each error in place of the original, keeping order and count.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        Self { items: self.items.into_iter().map(f).collect() }
    }

    /// Re-wraps a copy of this sequence as a failed `Outcome<U>`.
    ///
    /// The returned outcome owns its own list; `self` is left untouched.
    #[inline]
    pub fn fail_as<U>(&self) -> Outcome<U> {
        Outcome::Failure(self.clone())
    }

    /// Moves this sequence into a failed `Outcome<U>`.
    #[inline]
    pub fn into_outcome<U>(self) -> Outcome<U> {
        Outcome::Failure(self)
    }

    /// Consumes the sequence and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<Error> {
        self.items
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.fmt(), f)
    }
}

impl core::error::Error for Errors {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(self.first())
    }
}

impl From<Error> for Errors {
    #[inline]
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl TryFrom<Vec<Error>> for Errors {
    type Error = EmptyErrors;

    fn try_from(items: Vec<Error>) -> Result<Self, Self::Error> {
        Self::try_from_iter(items).ok_or(EmptyErrors)
    }
}

impl From<Errors> for Vec<Error> {
    fn from(errors: Errors) -> Self {
        errors.items.into_vec()
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returned when building [`Errors`] from a list that holds no errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyErrors;

impl Display for EmptyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error sequence must contain at least one error")
    }
}

impl core::error::Error for EmptyErrors {}
