//! Macros for building pipelines and failures.
//!
//! - [`macro@crate::compose`] - composes a producer with any number of stages
//!   into a zero-argument function.
//! - [`macro@crate::pipe`] - runs a value through any number of stages.
//! - [`macro@crate::fail`] - builds a failed outcome from a formatted message.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{fail, pipe, Outcome};
//!
//! fn check_len(s: String) -> Outcome<String> {
//!     if s.len() <= 8 { Outcome::success(s) } else { fail!("{} is longer than {}", s, 8) }
//! }
//!
//! let ok = pipe!("rail", |s: &str| Outcome::success(s.to_uppercase()), check_len);
//! assert_eq!(ok.into_value(), Some("RAIL".to_string()));
//!
//! let too_long = pipe!("railroads", |s: &str| Outcome::success(s.to_string()), check_len);
//! assert_eq!(too_long.fail_message(), "railroads is longer than 8");
//! ```

/// Composes a zero-argument producer with one or more stages.
///
/// Expands to a chain of [`compose::bind`](crate::compose::bind) calls, so
/// every argument is evaluated once, up front, and the result is a
/// zero-argument function. Calling it runs the stages left to right and stops
/// at the first failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{compose, Outcome};
///
/// let run = compose!(
///     || Outcome::success(1),
///     |x: i32| Outcome::success(x + 1),
///     |x: i32| Outcome::success(x * 3),
///     |x: i32| Outcome::success(x.to_string()),
/// );
/// assert_eq!(run().into_value(), Some("6".to_string()));
/// ```
#[macro_export]
macro_rules! compose {
    (@bind $acc:expr) => {
        $acc
    };
    (@bind $acc:expr, $next:expr $(, $rest:expr)*) => {
        $crate::compose!(@bind $crate::compose::bind($acc, $next) $(, $rest)*)
    };
    ($start:expr $(, $stage:expr)+ $(,)?) => {
        $crate::compose!(@bind $start $(, $stage)+)
    };
}

/// Runs a value through one or more stages and returns the final outcome.
///
/// Binds the value into the first stage, composes the rest with
/// [`compose!`](crate::compose!), and calls the result immediately.
///
/// # Examples
///
/// ```
/// use outcome_rail::{pipe, Outcome};
///
/// let result = pipe!(
///     3,
///     |v: i32| Outcome::success(v + 1),
///     |v: i32| Outcome::success(v * 2),
///     |v: i32| Outcome::success(v.to_string()),
/// );
/// assert_eq!(result.into_value(), Some("8".to_string()));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr, $first:expr $(, $stage:expr)* $(,)?) => {
        ($crate::compose!(@bind $crate::compose::bind_value($value, $first) $(, $stage)*))()
    };
}

/// Builds a failed [`Outcome`](crate::Outcome) from a formatted message.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let user_id = 42;
/// let failed: Outcome<()> = fail!("user {} not found", user_id);
/// assert_eq!(failed.fail_message(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::from_error($crate::Error::new($crate::types::alloc_type::format!($($arg)*)))
    };
}
