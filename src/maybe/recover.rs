//! Converting failures of a computation into [`Maybe::Absent`].
//!
//! [`recover`] turns a chosen class of errors into `Absent` and hands every
//! other error back unchanged. [`recover_any`] treats every error as
//! recoverable. [`recover_panic`] does the same for panics, re-raising any
//! panic the predicate does not accept.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::Maybe;

/// Runs `compute`, turning errors accepted by `is_recoverable` into `Absent`.
///
/// - `Ok(value)` becomes `Ok(Present(value))`
/// - `Err(error)` with `is_recoverable(&error)` becomes `Ok(Absent)`
/// - any other `Err(error)` is returned untouched
///
/// # Errors
///
/// Returns the error produced by `compute` when `is_recoverable` rejects it.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::{Maybe, recover};
///
/// #[derive(Debug, PartialEq)]
/// enum Failure {
///     DivideByZero,
///     Io(String),
/// }
///
/// let divide = |numerator: i32, denominator: i32| {
///     numerator.checked_div(denominator).ok_or(Failure::DivideByZero)
/// };
/// let is_divide_by_zero = |error: &Failure| matches!(error, Failure::DivideByZero);
///
/// assert_eq!(recover(|| divide(6, 3), is_divide_by_zero), Ok(Maybe::present(2)));
/// assert_eq!(recover(|| divide(1, 0), is_divide_by_zero), Ok(Maybe::absent()));
/// assert_eq!(
///     recover(|| Err::<i32, _>(Failure::Io("disk".into())), is_divide_by_zero),
///     Err(Failure::Io("disk".into()))
/// );
/// ```
pub fn recover<A, E, F, P>(compute: F, is_recoverable: P) -> Result<Maybe<A>, E>
where
    F: FnOnce() -> Result<A, E>,
    P: FnOnce(&E) -> bool,
{
    match compute() {
        Ok(value) => Ok(Maybe::Present(value)),
        Err(error) if is_recoverable(&error) => Ok(Maybe::Absent),
        Err(error) => Err(error),
    }
}

/// Runs `compute`, turning every error into `Absent`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::{Maybe, recover_any};
///
/// assert_eq!(recover_any(|| "12".parse::<u8>()), Maybe::present(12));
/// assert_eq!(recover_any(|| "x".parse::<u8>()), Maybe::absent());
/// ```
pub fn recover_any<A, E, F>(compute: F) -> Maybe<A>
where
    F: FnOnce() -> Result<A, E>,
{
    compute().ok().into()
}

/// Runs `compute`, turning panics accepted by `is_recoverable` into `Absent`.
///
/// A panic whose payload is rejected by `is_recoverable` is resumed with its
/// original payload, so callers observe exactly the panic they would have
/// seen without this wrapper.
///
/// The panic hook still runs for caught panics.
///
/// # Panics
///
/// Resumes the panic raised by `compute` if `is_recoverable` rejects its payload.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::{Maybe, recover_panic};
///
/// let divisor = std::hint::black_box(0);
/// let is_arithmetic = |payload: &(dyn std::any::Any + Send)| {
///     payload
///         .downcast_ref::<&str>()
///         .is_some_and(|message| message.contains("divide by zero"))
/// };
///
/// assert_eq!(recover_panic(|| 10 / divisor, is_arithmetic), Maybe::absent());
/// assert_eq!(recover_panic(|| 10 / 2, is_arithmetic), Maybe::present(5));
/// ```
pub fn recover_panic<A, F, P>(compute: F, is_recoverable: P) -> Maybe<A>
where
    F: FnOnce() -> A,
    P: FnOnce(&(dyn Any + Send)) -> bool,
{
    match panic::catch_unwind(AssertUnwindSafe(compute)) {
        Ok(value) => Maybe::Present(value),
        Err(payload) if is_recoverable(payload.as_ref()) => Maybe::Absent,
        Err(payload) => panic::resume_unwind(payload),
    }
}
