//! A success-or-errors [`Outcome`] type with short-circuiting pipeline combinators.
//!
//! An [`Outcome<T>`] is either `Success(T)` or `Failure(Errors)`, where
//! [`Errors`] is an ordered, non-empty list of [`Error`] messages. Failures are
//! ordinary values: they travel through a pipeline untouched until the caller
//! inspects them or leaves the outcome style with
//! [`unwrap_or_raise`](Outcome::unwrap_or_raise).
//!
//! # Examples
//!
//! ## Sequential stages
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let total = Outcome::success(20)
//!     .then(|x| Outcome::success(x + 1))
//!     .then(|x| Outcome::success(x * 2));
//!
//! assert_eq!(total.into_value(), Some(42));
//! ```
//!
//! ## Error aggregation
//!
//! ```
//! use outcome_rail::Status;
//!
//! let checks = Status::fail("name is empty") + Status::SUCCESS + Status::fail("age is negative");
//!
//! assert!(checks.is_fail());
//! assert_eq!(checks.fail_message(), "name is empty\nage is negative");
//! ```
//!
//! ## Pipelines
//!
//! ```
//! use outcome_rail::{pipe, Outcome};
//!
//! let calls = std::cell::Cell::new(0);
//! let result: Outcome<i32> = pipe!(
//!     5,
//!     |_: i32| Outcome::success(1),
//!     |_: i32| Outcome::<i32>::fail("x"),
//!     |v: i32| { calls.set(calls.get() + 1); Outcome::success(v) },
//! );
//!
//! assert_eq!(result.fail_message(), "x");
//! assert_eq!(calls.get(), 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Fixed-arity and homogeneous multi-stage pipelines
pub mod compose;
/// Conversions between Result, Option and Outcome
pub mod convert;
/// Pipeline and failure macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits for errors and outcomes
pub mod traits;
/// Outcome, Errors and Error types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    error_formatter::{ErrorFormatConfig, ErrorFormatter},
    EmptyErrors, Error, ErrorVec, Errors, Outcome, Status,
};
