//! Conversion traits at the edges of the outcome style.
//!
//! - [`IntoError`]: adapts message types and caller error types into [`Error`](crate::Error)
//! - [`IntoOutcome`]: turns a `Result` with a standard error into an [`Outcome`](crate::Outcome)
//! - [`OptionExt`]: turns an `Option` into an [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoError, IntoOutcome};
//!
//! let err = "disk full".into_error();
//! assert_eq!(err.message(), "disk full");
//!
//! let parsed = "12".parse::<i32>().into_outcome();
//! assert!(parsed.is_success());
//! ```

pub mod into_error;
pub mod into_outcome;

pub use into_error::IntoError;
pub use into_outcome::{IntoOutcome, OptionExt};
