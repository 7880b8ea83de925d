use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe, UnwindSafe};

use crate::error::Panicked;

/// Runs a closure, converting a panic into a [`Panicked`] error.
///
/// The closure must be `UnwindSafe`. For closures that are not, such as ones holding a
/// `&mut` borrow, use [`capture_unchecked`].
///
/// The default panic hook still runs, so the panic message is printed to stderr as usual.
///
/// # Examples
/// ```
/// use bifold_core::capture::capture;
///
/// assert_eq!(capture(|| 42), Ok(42));
///
/// let err = capture(|| -> i32 { panic!("oops") }).unwrap_err();
/// assert_eq!(err.message(), "oops");
/// ```
pub fn capture<T>(f: impl FnOnce() -> T + UnwindSafe) -> Result<T, Panicked> {
    catch_unwind(f).map_err(into_panicked)
}

/// Runs a closure, converting a panic into a [`Panicked`] error, without requiring `UnwindSafe`.
///
/// The closure is wrapped in `AssertUnwindSafe`. The caller is responsible for making sure
/// that state the closure mutates is not observed half-updated after a panic.
///
/// # Examples
/// ```
/// use bifold_core::capture::capture_unchecked;
///
/// let mut seen = Vec::new();
/// let result = capture_unchecked(|| {
///     seen.push(1);
///     seen.len()
/// });
/// assert_eq!(result, Ok(1));
/// ```
pub fn capture_unchecked<T>(f: impl FnOnce() -> T) -> Result<T, Panicked> {
    catch_unwind(AssertUnwindSafe(f)).map_err(into_panicked)
}

fn into_panicked(payload: Box<dyn Any + Send>) -> Panicked {
    let panicked = Panicked::from_payload(payload);
    tracing::debug!(panic = panicked.message(), "captured panic");
    panicked
}
