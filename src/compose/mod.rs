//! Multi-stage pipelines built from fallible stages.
//!
//! A stage is a function from the previous stage's success value to a new
//! [`Outcome`]. Stages run strictly left to right; the first failure stops
//! the chain, and no later stage is ever invoked. The failing stage's errors
//! come back unchanged, typed as the last stage's output.
//!
//! Three shapes are provided:
//!
//! - [`compose3`] .. [`compose6`] build a zero-argument function from a
//!   starting producer and further stages, each stage free to change the type;
//! - [`pipe3`] .. [`pipe6`] feed a value into the first stage and run the
//!   composition immediately;
//! - [`pipe_all`] / [`compose_all`] fold over any number of stages that share
//!   one type.
//!
//! The [`compose!`](crate::compose!) and [`pipe!`](crate::pipe!) macros accept
//! any number of stages.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::compose::pipe3;
//! use outcome_rail::Outcome;
//!
//! fn parse(raw: &str) -> Outcome<i32> {
//!     raw.trim().parse().map_or_else(|_| Outcome::fail("not a number"), Outcome::success)
//! }
//! fn non_negative(n: i32) -> Outcome<u32> {
//!     u32::try_from(n).map_or_else(|_| Outcome::fail("negative"), Outcome::success)
//! }
//! fn label(n: u32) -> Outcome<String> {
//!     Outcome::success(format!("#{}", n))
//! }
//!
//! assert_eq!(pipe3(" 42 ", parse, non_negative, label).into_value(), Some("#42".to_string()));
//! assert_eq!(pipe3("-1", parse, non_negative, label).fail_message(), "negative");
//! ```

use crate::types::Outcome;

/// Free-function form of [`Outcome::then`].
#[inline]
pub fn then<A, B, F>(current: Outcome<A>, next: F) -> Outcome<B>
where
    F: FnOnce(A) -> Outcome<B>,
{
    current.then(next)
}

/// Extends a zero-argument producer with one more stage.
///
/// This is the building block of [`compose!`](crate::compose!).
#[inline]
pub fn bind<A, B, S, F>(start: S, next: F) -> impl FnOnce() -> Outcome<B>
where
    S: FnOnce() -> Outcome<A>,
    F: FnOnce(A) -> Outcome<B>,
{
    move || start().then(next)
}

/// Turns a value and its first stage into a zero-argument producer.
///
/// This is the building block of [`pipe!`](crate::pipe!).
#[inline]
pub fn bind_value<V, A, F>(value: V, first: F) -> impl FnOnce() -> Outcome<A>
where
    F: FnOnce(V) -> Outcome<A>,
{
    move || first(value)
}

/// Composes a producer with two further stages.
///
/// # Examples
///
/// ```
/// use outcome_rail::compose::compose3;
/// use outcome_rail::Outcome;
///
/// let run = compose3(
///     || Outcome::success(2),
///     |x| Outcome::success(x + 1),
///     |x| Outcome::success(x * 10),
/// );
/// assert_eq!(run(), Outcome::success(30));
/// ```
pub fn compose3<A, B, C, S, F2, F3>(start: S, f2: F2, f3: F3) -> impl FnOnce() -> Outcome<C>
where
    S: FnOnce() -> Outcome<A>,
    F2: FnOnce(A) -> Outcome<B>,
    F3: FnOnce(B) -> Outcome<C>,
{
    move || start().then(f2).then(f3)
}

/// Composes a producer with three further stages.
pub fn compose4<A, B, C, D, S, F2, F3, F4>(
    start: S,
    f2: F2,
    f3: F3,
    f4: F4,
) -> impl FnOnce() -> Outcome<D>
where
    S: FnOnce() -> Outcome<A>,
    F2: FnOnce(A) -> Outcome<B>,
    F3: FnOnce(B) -> Outcome<C>,
    F4: FnOnce(C) -> Outcome<D>,
{
    move || start().then(f2).then(f3).then(f4)
}

/// Composes a producer with four further stages.
pub fn compose5<A, B, C, D, E, S, F2, F3, F4, F5>(
    start: S,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
) -> impl FnOnce() -> Outcome<E>
where
    S: FnOnce() -> Outcome<A>,
    F2: FnOnce(A) -> Outcome<B>,
    F3: FnOnce(B) -> Outcome<C>,
    F4: FnOnce(C) -> Outcome<D>,
    F5: FnOnce(D) -> Outcome<E>,
{
    move || start().then(f2).then(f3).then(f4).then(f5)
}

/// Composes a producer with five further stages.
pub fn compose6<A, B, C, D, E, G, S, F2, F3, F4, F5, F6>(
    start: S,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
) -> impl FnOnce() -> Outcome<G>
where
    S: FnOnce() -> Outcome<A>,
    F2: FnOnce(A) -> Outcome<B>,
    F3: FnOnce(B) -> Outcome<C>,
    F4: FnOnce(C) -> Outcome<D>,
    F5: FnOnce(D) -> Outcome<E>,
    F6: FnOnce(E) -> Outcome<G>,
{
    move || start().then(f2).then(f3).then(f4).then(f5).then(f6)
}

/// Runs `value` through three stages.
pub fn pipe3<V, A, B, C, F1, F2, F3>(value: V, f1: F1, f2: F2, f3: F3) -> Outcome<C>
where
    F1: FnOnce(V) -> Outcome<A>,
    F2: FnOnce(A) -> Outcome<B>,
    F3: FnOnce(B) -> Outcome<C>,
{
    compose3(bind_value(value, f1), f2, f3)()
}

/// Runs `value` through four stages.
pub fn pipe4<V, A, B, C, D, F1, F2, F3, F4>(value: V, f1: F1, f2: F2, f3: F3, f4: F4) -> Outcome<D>
where
    F1: FnOnce(V) -> Outcome<A>,
    F2: FnOnce(A) -> Outcome<B>,
    F3: FnOnce(B) -> Outcome<C>,
    F4: FnOnce(C) -> Outcome<D>,
{
    compose4(bind_value(value, f1), f2, f3, f4)()
}

/// Runs `value` through five stages.
pub fn pipe5<V, A, B, C, D, E, F1, F2, F3, F4, F5>(
    value: V,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
) -> Outcome<E>
where
    F1: FnOnce(V) -> Outcome<A>,
    F2: FnOnce(A) -> Outcome<B>,
    F3: FnOnce(B) -> Outcome<C>,
    F4: FnOnce(C) -> Outcome<D>,
    F5: FnOnce(D) -> Outcome<E>,
{
    compose5(bind_value(value, f1), f2, f3, f4, f5)()
}

/// Runs `value` through six stages.
pub fn pipe6<V, A, B, C, D, E, G, F1, F2, F3, F4, F5, F6>(
    value: V,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
) -> Outcome<G>
where
    F1: FnOnce(V) -> Outcome<A>,
    F2: FnOnce(A) -> Outcome<B>,
    F3: FnOnce(B) -> Outcome<C>,
    F4: FnOnce(C) -> Outcome<D>,
    F5: FnOnce(D) -> Outcome<E>,
    F6: FnOnce(E) -> Outcome<G>,
{
    compose6(bind_value(value, f1), f2, f3, f4, f5, f6)()
}

/// Runs `value` through any number of stages that share one type.
///
/// Stops at the first failure; later stages are dropped without being called.
///
/// # Examples
///
/// ```
/// use outcome_rail::compose::pipe_all;
/// use outcome_rail::Outcome;
///
/// fn inc(x: i32) -> Outcome<i32> { Outcome::success(x + 1) }
/// fn double(x: i32) -> Outcome<i32> { Outcome::success(x * 2) }
///
/// let stages: Vec<fn(i32) -> Outcome<i32>> = vec![inc, double, inc];
/// assert_eq!(pipe_all(3, stages), Outcome::success(9));
/// ```
pub fn pipe_all<T, I, F>(value: T, stages: I) -> Outcome<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Outcome<T>,
{
    let mut current = value;
    for stage in stages {
        match stage(current) {
            Outcome::Success(next) => current = next,
            failure => return failure,
        }
    }
    Outcome::Success(current)
}

/// Lazily composes a producer with any number of same-typed stages.
pub fn compose_all<T, S, I, F>(start: S, stages: I) -> impl FnOnce() -> Outcome<T>
where
    S: FnOnce() -> Outcome<T>,
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Outcome<T>,
{
    move || start().then(|value| pipe_all(value, stages))
}
