use crate::traits::IntoError;
use crate::types::alloc_type::String;
use crate::types::error_formatter::ErrorFormatBuilder;
use crate::types::{Error, Errors};
use core::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a success carrying a value or a failure carrying one or more errors.
///
/// A failed outcome has no payload at all, so there is no way to read a
/// meaningless value out of it. Use [`Status`] (`Outcome<()>`) when only
/// success or failure matters.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Success(T)` - Contains the success value
/// * `Failure(Errors)` - Contains one or more errors, in the order they occurred
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16> {
///     match raw.parse::<u16>() {
///         Ok(port) => Outcome::success(port),
///         Err(e) => Outcome::from_std_error(&e),
///     }
/// }
///
/// let port = parse_port("8080").then(|p| {
///     if p >= 1024 { Outcome::success(p) } else { Outcome::fail("privileged port") }
/// });
/// assert_eq!(port.into_value(), Some(8080));
///
/// assert!(parse_port("eighty").is_fail());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T> {
    Success(T),
    Failure(Errors),
}

/// An outcome without a payload: success, or a list of errors.
pub type Status = Outcome<()>;

impl Outcome<()> {
    /// The canonical payload-less success.
    pub const SUCCESS: Status = Outcome::Success(());

    /// Concatenates the errors of `self` and `other`, left first.
    ///
    /// Two successes combine into success; otherwise every error from both
    /// sides is kept in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Status};
    ///
    /// let combined = Status::fail("a").combine(Status::fail("b"));
    /// assert_eq!(combined.errors(), [Error::new("a"), Error::new("b")]);
    ///
    /// assert!(Status::SUCCESS.combine(Status::SUCCESS).is_success());
    /// ```
    pub fn combine(self, other: Status) -> Status {
        match (self, other) {
            (Outcome::Success(()), Outcome::Success(())) => Outcome::SUCCESS,
            (Outcome::Failure(e), Outcome::Success(())) | (Outcome::Success(()), Outcome::Failure(e)) => {
                Outcome::Failure(e)
            },
            (Outcome::Failure(left), Outcome::Failure(right)) => Outcome::Failure(left.append(right)),
        }
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome holding `value`.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome with a single error built from `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let failed = Outcome::<i32>::fail("timeout");
    /// assert!(failed.is_fail());
    /// assert_eq!(failed.errors(), [Error::new("timeout")]);
    /// ```
    #[inline]
    pub fn fail<M>(message: M) -> Self
    where
        M: IntoError,
    {
        Self::Failure(Errors::new(message.into_error()))
    }

    /// Creates a failed outcome holding exactly one error.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self::Failure(Errors::new(error))
    }

    /// Creates a failed outcome holding exactly `errors`, order preserved.
    #[inline]
    pub fn from_errors(errors: Errors) -> Self {
        Self::Failure(errors)
    }

    /// Creates a failed outcome from any [`core::error::Error`].
    ///
    /// See [`Error::from_std_error`] for how the message is derived.
    #[inline]
    pub fn from_std_error<E>(error: &E) -> Self
    where
        E: core::error::Error + ?Sized,
    {
        Self::from_error(Error::from_std_error(error))
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_success()
    }

    /// Returns the errors in order; empty when successful.
    #[inline]
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors.as_slice(),
        }
    }

    #[inline]
    pub fn iter_errors(&self) -> core::slice::Iter<'_, Error> {
        self.errors().iter()
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    /// Joins every error message with a newline. Empty when successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// let status = Status::fail("disk full") + Status::fail("quota exceeded");
    /// assert_eq!(status.fail_message(), "disk full\nquota exceeded");
    /// assert_eq!(Status::SUCCESS.fail_message(), "");
    /// ```
    pub fn fail_message(&self) -> String {
        match self {
            Self::Success(_) => String::new(),
            Self::Failure(errors) => errors.message(),
        }
    }

    /// Returns a builder for rendering the errors with a custom layout.
    #[must_use]
    #[inline]
    pub fn fmt_errors(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self.errors())
    }

    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<Errors> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Re-types a failure as `Outcome<U>`, copying its error sequence.
    ///
    /// Returns `None` for a success, which has no errors to carry over.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed = Outcome::<i32>::fail("bad input");
    /// let retyped: Outcome<String> = failed.fail_as().unwrap();
    /// assert_eq!(retyped.errors(), failed.errors());
    ///
    /// assert!(Outcome::success(1).fail_as::<String>().is_none());
    /// ```
    #[inline]
    pub fn fail_as<U>(&self) -> Option<Outcome<U>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors.fail_as()),
        }
    }

    /// Drops the payload, keeping only success or the errors.
    #[inline]
    pub fn into_status(self) -> Status {
        match self {
            Self::Success(_) => Outcome::SUCCESS,
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Like [`into_status`](Self::into_status), but leaves `self` intact.
    #[inline]
    pub fn to_status(&self) -> Status {
        match self {
            Self::Success(_) => Outcome::SUCCESS,
            Self::Failure(errors) => errors.fail_as(),
        }
    }

    /// Runs `next` on the success value; a failure is passed through untouched.
    ///
    /// When `self` is a failure, `next` is never invoked and the same errors
    /// come back typed as `Outcome<U>`. When `self` is a success, the result of
    /// `next` is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::success(21).then(|x| Outcome::success(x * 2));
    /// assert_eq!(doubled, Outcome::success(42));
    ///
    /// let mut called = false;
    /// let skipped = Outcome::<i32>::fail("boom").then(|x| {
    ///     called = true;
    ///     Outcome::success(x)
    /// });
    /// assert!(skipped.is_fail());
    /// assert!(!called);
    /// ```
    #[inline]
    pub fn then<U, F>(self, next: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(errors) => errors.into_outcome(),
        }
    }

    /// Alias for [`then`](Self::then).
    #[inline]
    pub fn and_then<U, F>(self, next: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.then(next)
    }

    /// Transforms the success value, leaving failures unchanged.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Transforms every error, keeping order and count.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let failed = Outcome::<()>::fail("timeout")
    ///     .map_errors(|e| Error::new(format!("db: {}", e)));
    /// assert_eq!(failed.fail_message(), "db: timeout");
    /// ```
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => Self::Failure(errors.map(f)),
        }
    }

    /// Calls `recovery` with the errors of a failure; a success is returned unchanged.
    #[inline]
    pub fn or_else<F>(self, recovery: F) -> Self
    where
        F: FnOnce(Errors) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => recovery(errors),
        }
    }

    /// Calls `f` with a reference to the success value, if any.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the errors of a failure, if any.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Errors),
    {
        if let Self::Failure(errors) = &self {
            f(errors);
        }
        self
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Errors) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => f(errors),
        }
    }

    /// Converts into a standard `Result`, keeping all errors.
    #[inline]
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Leaves the outcome style at a boundary, building the caller's error from the joined message.
    ///
    /// On success the value is returned and `build` is not called. On failure
    /// `build` is called exactly once with [`fail_message`](Self::fail_message)
    /// and its product is returned as `Err`, ready for `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct HttpError { status: u16, body: String }
    ///
    /// fn handler(input: Outcome<String>) -> Result<String, HttpError> {
    ///     let name = input.unwrap_or_raise(|body| HttpError { status: 400, body })?;
    ///     Ok(format!("hello {}", name))
    /// }
    ///
    /// assert_eq!(handler(Outcome::success(String::from("ann"))), Ok(String::from("hello ann")));
    /// assert_eq!(
    ///     handler(Outcome::fail("name missing")),
    ///     Err(HttpError { status: 400, body: String::from("name missing") })
    /// );
    /// ```
    pub fn unwrap_or_raise<F, B>(self, build: B) -> Result<T, F>
    where
        B: FnOnce(String) -> F,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error_count = errors.len(), "raising failed outcome");
                Err(build(errors.message()))
            },
        }
    }

    /// Leaves the outcome style at a boundary, building the caller's error from the full error list.
    ///
    /// Same contract as [`unwrap_or_raise`](Self::unwrap_or_raise), but
    /// `build` receives the ordered [`Errors`].
    pub fn unwrap_or_raise_errors<F, B>(self, build: B) -> Result<T, F>
    where
        B: FnOnce(Errors) -> F,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error_count = errors.len(), "raising failed outcome");
                Err(build(errors))
            },
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<Errors> for Outcome<T> {
    #[inline]
    fn from(errors: Errors) -> Self {
        Self::from_errors(errors)
    }
}

impl<T> From<Outcome<T>> for Result<T, Errors> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Result<T, Errors>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Errors>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(errors) => Self::Failure(errors),
        }
    }
}

impl Add for Outcome<()> {
    type Output = Status;

    #[inline]
    fn add(self, other: Status) -> Status {
        self.combine(other)
    }
}

impl AddAssign for Outcome<()> {
    #[inline]
    fn add_assign(&mut self, other: Status) {
        let current = core::mem::replace(self, Outcome::SUCCESS);
        *self = current.combine(other);
    }
}

impl core::iter::Sum for Outcome<()> {
    fn sum<I: Iterator<Item = Status>>(iter: I) -> Status {
        iter.fold(Outcome::SUCCESS, Status::combine)
    }
}

/// Collects outcomes into a single outcome of a collection.
///
/// Every error from every failed item is kept, in iteration order; the
/// collection is produced only when all items succeeded.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let some: Outcome<Vec<i32>> =
///     vec![Outcome::fail("a"), Outcome::success(2), Outcome::fail("b")].into_iter().collect();
/// assert_eq!(some.fail_message(), "a\nb");
/// ```
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut errors: Option<Errors> = None;
        let collected: C = iter
            .into_iter()
            .filter_map(|item| match item {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(e) => {
                    errors = Some(match errors.take() {
                        Some(acc) => acc.append(e),
                        None => e,
                    });
                    None
                },
            })
            .collect();

        match errors {
            Some(errors) => Outcome::Failure(errors),
            None => Outcome::Success(collected),
        }
    }
}
