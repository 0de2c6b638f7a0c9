//! Conversion helpers between `Result`, `Option`, and [`Outcome`].
//!
//! These adapters make it straightforward to bring existing fallible code
//! into an outcome pipeline, or to hand an outcome back to code that expects
//! a plain `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome_with(Err::<i32, u16>(404), |code| format!("HTTP {}", code));
//! assert_eq!(outcome.fail_message(), "HTTP 404");
//!
//! let result = outcome_to_result(Outcome::success(7));
//! assert_eq!(result, Ok(7));
//! ```

use crate::traits::IntoError;
use crate::types::{Error, Errors, Outcome};

/// Converts a `Result` into an [`Outcome`], adapting the error with `f`.
///
/// `f` is only called for `Err`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome_with;
///
/// let ok = result_to_outcome_with(Ok::<_, ()>(1), |_| "never");
/// assert!(ok.is_success());
/// ```
#[inline]
pub fn result_to_outcome_with<T, E, M, F>(result: Result<T, E>, f: F) -> Outcome<T>
where
    M: IntoError,
    F: FnOnce(E) -> M,
{
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::fail(f(error)),
    }
}

/// Converts a `Result` whose error already implements [`IntoError`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let failed = result_to_outcome(Err::<(), &str>("missing"));
/// assert_eq!(failed.fail_message(), "missing");
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: IntoError,
{
    result_to_outcome_with(result, |e| e)
}

/// Converts an [`Outcome`] into a `Result` carrying every error.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Errors> {
    outcome.into_result()
}

/// Converts an `Option` into an [`Outcome`], failing with `message` on `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
///
/// assert_eq!(option_to_outcome(Some(3), "absent").into_value(), Some(3));
/// assert_eq!(option_to_outcome(None::<i32>, "absent").fail_message(), "absent");
/// ```
#[inline]
pub fn option_to_outcome<T, M>(option: Option<T>, message: M) -> Outcome<T>
where
    M: IntoError,
{
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::fail(message),
    }
}

/// Builds an outcome from a list of errors: success when the list is empty,
/// a failure with exactly those errors otherwise.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::errors_to_status;
/// use outcome_rail::Error;
///
/// assert!(errors_to_status(Vec::new()).is_success());
/// assert_eq!(errors_to_status(vec![Error::new("x"), Error::new("y")]).error_count(), 2);
/// ```
#[inline]
pub fn errors_to_status<I>(errors: I) -> Outcome<()>
where
    I: IntoIterator<Item = Error>,
{
    match Errors::try_from_iter(errors) {
        Some(errors) => Outcome::Failure(errors),
        None => Outcome::SUCCESS,
    }
}

/// Drops the payload of an outcome, keeping only its errors.
#[inline]
pub fn outcome_to_status<T>(outcome: Outcome<T>) -> Outcome<()> {
    outcome.into_status()
}
