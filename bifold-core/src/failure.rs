use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::Panicked;

/// The captured error held by [`Outcome::Err`](crate::outcome::Outcome::Err).
///
/// A `Failure` is a shared handle to a type-erased `anyhow::Error`. Cloning it shares the
/// same error object.
///
/// Equality and hashing are by identity: a `Failure` equals its clones, and two failures
/// built from separate errors are never equal, even when their messages match.
///
/// `Failure` implements `std::error::Error`, so `?` converts it into `anyhow::Error` or a
/// `Box<dyn Error>`.
///
/// # Examples
/// ```
/// use bifold_core::failure::Failure;
///
/// let a = Failure::msg("disk full");
/// let b = Failure::msg("disk full");
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// assert_eq!(a.to_string(), b.to_string());
/// ```
#[derive(Clone)]
pub struct Failure(Arc<anyhow::Error>);

impl Failure {
    /// Wraps any error convertible into `anyhow::Error`.
    ///
    /// A `Failure` passed in, directly or as a bare `anyhow::Error`, comes back as the same
    /// handle.
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Failure::from(error.into())
    }

    /// Creates a failure from a printable message.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Failure(Arc::new(anyhow::Error::msg(message)))
    }

    /// Returns the wrapped error.
    pub fn error(&self) -> &anyhow::Error {
        &self.0
    }

    /// Attempts to view the wrapped error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` if this failure was produced by a captured panic.
    pub fn is_panic(&self) -> bool {
        self.0.is::<Panicked>()
    }

    /// Returns the panic message, if this failure came from a captured panic.
    pub fn panic_message(&self) -> Option<&str> {
        self.downcast_ref::<Panicked>().map(Panicked::message)
    }

    /// Returns `true` if both handles point at the same error object.
    pub fn same_as(&self, other: &Failure) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Failure {}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        // Only a bare Failure unwraps; downcasting through added context would drop it.
        if !(*error).is::<Failure>() {
            return Failure(Arc::new(error));
        }
        match error.downcast::<Failure>() {
            Ok(failure) => failure,
            Err(error) => Failure(Arc::new(error)),
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        StdError::source(&**self.0)
    }
}

impl From<Panicked> for Failure {
    fn from(panicked: Panicked) -> Self {
        Failure::new(panicked)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::io;

    fn hash_of(f: &Failure) -> u64 {
        let mut hasher = DefaultHasher::new();
        f.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn clones_are_equal() {
        let f = Failure::msg("boom");
        let g = f.clone();
        assert_eq!(f, g);
        assert!(f.same_as(&g));
        assert_eq!(hash_of(&f), hash_of(&g));
    }

    #[test]
    fn distinct_errors_with_same_message_are_not_equal() {
        let f = Failure::msg("boom");
        let g = Failure::msg("boom");
        assert_ne!(f, g);
        assert_eq!(f.to_string(), g.to_string());
    }

    #[test]
    fn wraps_std_error() {
        let f = Failure::new(io::Error::new(io::ErrorKind::NotFound, "missing file"));
        assert_eq!(f.to_string(), "missing file");
        assert_eq!(f.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
        assert!(!f.is_panic());
    }

    #[test]
    fn from_anyhow() {
        let f: Failure = anyhow::anyhow!("from anyhow").into();
        assert_eq!(f.error().to_string(), "from anyhow");
    }

    #[test]
    fn from_panicked() {
        let f: Failure = Panicked::new("oops").into();
        assert!(f.is_panic());
        assert_eq!(f.panic_message(), Some("oops"));
        assert_eq!(f.to_string(), "panicked: oops");
    }

    #[test]
    fn panic_message_none_for_plain_error() {
        assert_eq!(Failure::msg("plain").panic_message(), None);
    }

    #[test]
    fn new_keeps_identity_of_a_failure() {
        let f = Failure::msg("once");
        assert_eq!(Failure::new(f.clone()), f);
        assert_eq!(Failure::from(anyhow::Error::new(f.clone())), f);
    }

    #[test]
    fn context_is_not_stripped() {
        let f = Failure::msg("inner");
        let wrapped = Failure::from(anyhow::Error::new(f.clone()).context("outer"));
        assert_ne!(wrapped, f);
        assert_eq!(wrapped.to_string(), "outer");
        assert_eq!(wrapped.source().map(|s| s.to_string()), Some("inner".to_string()));
    }

    #[test]
    fn source_follows_the_wrapped_chain() {
        let io = io::Error::new(io::ErrorKind::Other, "low level");
        let f = Failure::new(anyhow::Error::new(io).context("reading config"));
        assert_eq!(f.to_string(), "reading config");
        assert_eq!(f.source().map(|s| s.to_string()), Some("low level".to_string()));
        assert!(Failure::msg("flat").source().is_none());
    }

    #[test]
    fn boxes_as_std_error() {
        fn fails() -> Result<(), Box<dyn StdError + Send + Sync>> {
            Err(Failure::msg("boxed"))?
        }
        assert_eq!(fails().unwrap_err().to_string(), "boxed");
    }

    #[test]
    fn debug_delegates_to_error() {
        let f = Failure::msg("shown");
        assert!(format!("{:?}", f).contains("shown"));
    }
}
