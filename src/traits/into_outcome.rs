//! Extension traits for entering the outcome style from `Result` and `Option`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionExt};
//!
//! let port = "8080".parse::<u16>().into_outcome();
//! assert_eq!(port.into_value(), Some(8080));
//!
//! let host = None::<&str>.ok_or_fail("host not configured");
//! assert_eq!(host.fail_message(), "host not configured");
//! ```

use crate::traits::IntoError;
use crate::types::{Error, Outcome};

/// Converts a `Result` whose error is a [`core::error::Error`] into an [`Outcome`].
///
/// The error is described with [`Error::from_std_error`], so its source chain
/// ends up in the message.
pub trait IntoOutcome<T> {
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: core::error::Error,
{
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::from_error(Error::from_std_error(&error)),
        }
    }
}

/// Converts an `Option` into an [`Outcome`], failing on `None`.
pub trait OptionExt<T> {
    /// Fails with `message` when `None`.
    fn ok_or_fail<M: IntoError>(self, message: M) -> Outcome<T>;

    /// Fails with the error produced by `f` when `None`.
    ///
    /// The closure is only called on `None`.
    fn ok_or_fail_with<M, F>(self, f: F) -> Outcome<T>
    where
        M: IntoError,
        F: FnOnce() -> M;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_fail<M: IntoError>(self, message: M) -> Outcome<T> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::fail(message),
        }
    }

    #[inline]
    fn ok_or_fail_with<M, F>(self, f: F) -> Outcome<T>
    where
        M: IntoError,
        F: FnOnce() -> M,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::fail(f()),
        }
    }
}
