//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into_outcome()
//! }
//!
//! let port = load("8080").then(|p| {
//!     if p > 0 { Outcome::success(p) } else { fail!("port {} is reserved", p) }
//! });
//! assert_eq!(port.value(), Some(&8080));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`compose!`], [`pipe!`], [`fail!`]
//! - **Types**: [`Outcome`], [`Status`], [`Error`], [`Errors`]
//! - **Traits**: [`IntoError`], [`IntoOutcome`], [`OptionExt`]
//! - **Functions**: the fixed-arity `compose`/`pipe` helpers and [`pipe_all`]

// Macros
pub use crate::{compose, fail, pipe};

// Core types
pub use crate::types::{Error, Errors, Outcome, Status};

// Traits
pub use crate::traits::{IntoError, IntoOutcome, OptionExt};

// Pipelines
pub use crate::compose::{
    compose3, compose4, compose5, compose6, compose_all, pipe3, pipe4, pipe5, pipe6, pipe_all,
};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTracingExt;
