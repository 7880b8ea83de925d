use std::fmt;

use crate::capture::capture_unchecked;
use crate::either::Either;
use crate::error::AccessError;
use crate::failure::Failure;

/// The outcome of a computation: a value, or the [`Failure`] that prevented it.
///
/// `Outcome` is right-biased toward `Ok`. Unlike [`Either`], its combinators form a capture
/// boundary: a panic raised by the closure passed to [`map`](Outcome::map),
/// [`try_map`](Outcome::try_map) or [`flat_map`](Outcome::flat_map) is turned into an `Err`
/// instead of unwinding into the caller. A failure already present is passed through and the
/// closure is not called.
///
/// `Err` payloads compare by identity (see [`Failure`]), so two `Err`s are equal only when
/// they share the same error object.
///
/// Closures run under `AssertUnwindSafe`, without an `UnwindSafe` bound. A closure that
/// mutates captured state and then panics leaves that state as it was at the panic.
///
/// Capturing a panic does not silence it: the process panic hook still runs first, so the
/// default hook prints the message to stderr. Install a hook with `std::panic::set_hook` to
/// change that.
///
/// # Examples
/// ```
/// use bifold_core::outcome::Outcome;
///
/// let doubled = Outcome::ok(42).map(|x| x * 2);
/// assert_eq!(doubled, Outcome::ok(84));
///
/// let failed = Outcome::ok(1).map(|_| -> i32 { panic!("boom") });
/// assert!(failed.is_err());
/// assert_eq!(failed.err_value().and_then(|f| f.panic_message()), Some("boom"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    Ok(T),
    Err(Failure),
}

impl<T> Outcome<T> {
    /// Creates an `Ok` value.
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Creates an `Err` wrapping a [`Failure`] built from `cause`.
    ///
    /// Passing a `Failure` keeps its identity.
    pub fn err(cause: impl Into<anyhow::Error>) -> Self {
        Outcome::Err(Failure::new(cause))
    }

    /// Creates an `Err` holding an existing [`Failure`], keeping its identity.
    pub fn from_failure(failure: Failure) -> Self {
        Outcome::Err(failure)
    }

    /// Runs `f`, capturing a panic as an `Err`.
    ///
    /// The panic hook still reports the panic before it is captured.
    pub fn attempt(f: impl FnOnce() -> T) -> Self {
        match capture_unchecked(f) {
            Ok(value) => Outcome::Ok(value),
            Err(panicked) => Outcome::Err(panicked.into()),
        }
    }

    /// Runs a fallible `f`. Both a returned error and a panic become an `Err`.
    ///
    /// ```
    /// use bifold_core::outcome::Outcome;
    ///
    /// let parsed = Outcome::attempt_result(|| "12".parse::<i32>());
    /// assert_eq!(parsed, Outcome::ok(12));
    ///
    /// let bad = Outcome::attempt_result(|| "x".parse::<i32>());
    /// assert!(bad.is_err());
    /// ```
    pub fn attempt_result<E>(f: impl FnOnce() -> Result<T, E>) -> Self
    where
        E: Into<anyhow::Error>,
    {
        match capture_unchecked(f) {
            Ok(result) => Outcome::from(result),
            Err(panicked) => Outcome::Err(panicked.into()),
        }
    }

    /// Returns `true` if this is an `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns the value, if present.
    pub fn ok_value(&self) -> Option<&T> {
        match self {
            Outcome::Ok(v) => Some(v),
            Outcome::Err(_) => None,
        }
    }

    /// Returns the failure, if present.
    pub fn err_value(&self) -> Option<&Failure> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(e) => Some(e),
        }
    }

    /// Returns the value, or [`AccessError::WrongVariant`] on an `Err`.
    pub fn get_result(&self) -> Result<&T, AccessError> {
        match self {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(_) => Err(AccessError::wrong_variant("get_result", "an Err")),
        }
    }

    /// Returns the failure, or [`AccessError::WrongVariant`] on an `Ok`.
    pub fn get_error(&self) -> Result<&Failure, AccessError> {
        match self {
            Outcome::Ok(_) => Err(AccessError::wrong_variant("get_error", "an Ok")),
            Outcome::Err(e) => Ok(e),
        }
    }

    /// Folds the outcome into a single value.
    pub fn fold<U, FE: FnOnce(&Failure) -> U, FT: FnOnce(&T) -> U>(&self, on_err: FE, on_ok: FT) -> U {
        match self {
            Outcome::Ok(v) => on_ok(v),
            Outcome::Err(e) => on_err(e),
        }
    }

    /// Maps over the value. A panic inside `f` becomes an `Err`.
    pub fn map<U, F: FnOnce(&T) -> U>(&self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ok(v) => Outcome::attempt(|| f(v)),
            Outcome::Err(e) => Outcome::Err(e.clone()),
        }
    }

    /// Maps over the value with a fallible function.
    ///
    /// A returned `Err(e)` and a panic inside `f` both become an `Err`.
    pub fn try_map<U, E, F>(&self, f: F) -> Outcome<U>
    where
        E: Into<anyhow::Error>,
        F: FnOnce(&T) -> Result<U, E>,
    {
        match self {
            Outcome::Ok(v) => Outcome::attempt_result(|| f(v)),
            Outcome::Err(e) => Outcome::Err(e.clone()),
        }
    }

    /// Chains a computation over the value. The returned `Outcome` is not re-wrapped.
    ///
    /// A panic inside `f` becomes an `Err`.
    pub fn flat_map<U, F: FnOnce(&T) -> Outcome<U>>(&self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ok(v) => match capture_unchecked(|| f(v)) {
                Ok(outcome) => outcome,
                Err(panicked) => Outcome::Err(panicked.into()),
            },
            Outcome::Err(e) => Outcome::Err(e.clone()),
        }
    }

    /// Alias for `flat_map`, compatible with `and_then` convention (Option/Result).
    pub fn and_then<U, F: FnOnce(&T) -> Outcome<U>>(&self, f: F) -> Outcome<U> {
        self.flat_map(f)
    }

    /// Returns the value, or computes one from the failure.
    pub fn recover<F: FnOnce(&Failure) -> T>(&self, f: F) -> T
    where
        T: Clone,
    {
        match self {
            Outcome::Ok(v) => v.clone(),
            Outcome::Err(e) => f(e),
        }
    }

    /// Returns the value, or computes a default.
    pub fn get_or_else<F: FnOnce() -> T>(&self, f: F) -> T
    where
        T: Clone,
    {
        match self {
            Outcome::Ok(v) => v.clone(),
            Outcome::Err(_) => f(),
        }
    }

    /// Converts to `Either<Failure, T>`.
    pub fn to_either(self) -> Either<Failure, T> {
        match self {
            Outcome::Ok(v) => Either::Right(v),
            Outcome::Err(e) => Either::Left(e),
        }
    }

    /// Converts to a `Result<T, Failure>`.
    pub fn to_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<anyhow::Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Ok(v),
            Err(e) => {
                let failure = Failure::new(e);
                tracing::trace!(error = %failure, "wrapped returned error");
                Outcome::Err(failure)
            }
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.to_result()
    }
}

impl<T> From<Either<Failure, T>> for Outcome<T> {
    fn from(either: Either<Failure, T>) -> Self {
        match either {
            Either::Left(e) => Outcome::Err(e),
            Either::Right(v) => Outcome::Ok(v),
        }
    }
}

impl<T> From<Outcome<T>> for Either<Failure, T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.to_either()
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(v) => f.debug_tuple("Ok").field(v).finish(),
            Outcome::Err(e) => f.debug_tuple("Err").field(e).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(v) => write!(f, "Ok({})", v),
            Outcome::Err(e) => write!(f, "Err({})", e),
        }
    }
}
