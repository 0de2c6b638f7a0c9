use crate::types::alloc_type::{Cow, String, ToString};
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single, immutable failure reason described by its message.
///
/// Two errors are equal when their messages are equal; there is no other
/// identity. Messages built from `&'static str` are stored without allocating.
///
/// # Examples
///
/// ```
/// use outcome_rail::Error;
///
/// let err = Error::new("user not found");
/// assert_eq!(err.message(), "user not found");
/// assert_eq!(err, Error::from("user not found"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    message: Cow<'static, str>,
}

impl Error {
    /// Creates an error from a text message. Empty text is allowed.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into() }
    }

    /// Creates an error from any [`core::error::Error`], using its full description.
    ///
    /// The message is the error's `Display` output followed by every
    /// `source()` in its chain, joined with `": "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let parse = "x1".parse::<u8>().unwrap_err();
    /// let err = Error::from_std_error(&parse);
    /// assert_eq!(err.message(), "invalid digit found in string");
    /// ```
    pub fn from_std_error<E>(error: &E) -> Self
    where
        E: core::error::Error + ?Sized,
    {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { message: Cow::Owned(message) }
    }

    /// Returns the message text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning its message as an owned `String`.
    #[inline]
    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for Error {}

impl From<&'static str> for Error {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Cow<'static, str>> for Error {
    #[inline]
    fn from(message: Cow<'static, str>) -> Self {
        Self::new(message)
    }
}
