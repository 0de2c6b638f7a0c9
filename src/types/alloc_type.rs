//! Heap-backed types shared by the rest of the crate.
//!
//! Resolves to `std` when the `std` feature is on and to `alloc` otherwise, so
//! the remaining modules never need their own `cfg` switches.
#[cfg(feature = "std")]
pub use std::{
    borrow::Cow,
    boxed::Box,
    format,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    borrow::Cow,
    boxed::Box,
    format,
    string::{String, ToString},
    vec::Vec,
};
