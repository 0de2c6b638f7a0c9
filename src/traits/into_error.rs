//! Trait for converting values into an [`Error`].
//!
//! This is the adaptation point for caller error types: anything that
//! implements [`IntoError`] can be passed wherever the crate accepts a
//! failure reason, such as [`Outcome::fail`](crate::Outcome::fail).
//!
//! # Implementations
//!
//! - `&'static str`, `String`, `Cow<'static, str>` - used as the message
//! - `Error` - identity conversion
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{traits::IntoError, Error};
//!
//! let e1 = "simple message".into_error();
//! let e2 = String::from("owned message").into_error();
//! let e3 = Error::new("already an error").into_error();
//!
//! assert_eq!(e1.message(), "simple message");
//! assert_eq!(e2.message(), "owned message");
//! assert_eq!(e3.message(), "already an error");
//! ```
use crate::types::alloc_type::{Cow, String};
use crate::types::Error;

/// Converts a type into an [`Error`].
///
/// # Implementing for Custom Types
///
/// Richer domain errors keep their own fields and adapt into the flat message
/// form only when they enter an outcome:
///
/// ```
/// use outcome_rail::{traits::IntoError, Error, Outcome};
///
/// struct NotFound { table: &'static str, id: u64 }
///
/// impl IntoError for NotFound {
///     fn into_error(self) -> Error {
///         Error::new(format!("{} #{} not found", self.table, self.id))
///     }
/// }
///
/// let outcome = Outcome::<()>::fail(NotFound { table: "users", id: 7 });
/// assert_eq!(outcome.fail_message(), "users #7 not found");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an outcome error",
    label = "this type does not implement `IntoError`",
    note = "implement `IntoError` manually, or build an `Error` with `Error::new` or `Error::from_std_error`"
)]
pub trait IntoError {
    /// Converts `self` into an [`Error`].
    fn into_error(self) -> Error;
}

impl IntoError for String {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self)
    }
}

impl IntoError for &'static str {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self)
    }
}

impl IntoError for Cow<'static, str> {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self)
    }
}

impl IntoError for Error {
    #[inline]
    fn into_error(self) -> Error {
        self
    }
}
