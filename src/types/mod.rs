//! Outcome and error types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Errors, Outcome, Status};
//!
//! let status = Status::fail("a") + Status::SUCCESS + Status::fail("b");
//! assert_eq!(status.error_count(), 2);
//!
//! let typed: Outcome<u8> = Errors::new(Error::new("bad byte")).into_outcome();
//! assert_eq!(typed.fail_message(), "bad byte");
//! ```
use smallvec::SmallVec;

#[doc(hidden)]
pub mod alloc_type;
pub mod error;
pub mod error_formatter;
pub mod errors;
pub mod outcome;

pub use error::*;
pub use errors::*;
pub use outcome::*;

/// SmallVec-backed storage for error sequences.
///
/// Uses inline storage for a single element, which covers the common case
/// of an outcome failing for exactly one reason.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
