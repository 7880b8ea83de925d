use std::any::Any;

/// Returned when an accessor is called on the variant that does not hold the requested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AccessError {
    #[error("called {requested} on {actual}")]
    WrongVariant {
        requested: &'static str,
        actual: &'static str,
    },
}

impl AccessError {
    pub(crate) fn wrong_variant(requested: &'static str, actual: &'static str) -> Self {
        AccessError::WrongVariant { requested, actual }
    }
}

/// A panic captured by [`capture`](crate::capture::capture).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Creates a `Panicked` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Panicked {
            message: message.into(),
        }
    }

    /// Builds a `Panicked` from a raw panic payload.
    ///
    /// `&str` and `String` payloads keep their text; anything else becomes `"unknown panic"`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Panicked { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_variant_message() {
        let err = AccessError::wrong_variant("get_right", "a Left");
        assert_eq!(err.to_string(), "called get_right on a Left");
    }

    #[test]
    fn panicked_from_str_payload() {
        let p = Panicked::from_payload(Box::new("boom"));
        assert_eq!(p.message(), "boom");
        assert_eq!(p.to_string(), "panicked: boom");
    }

    #[test]
    fn panicked_from_string_payload() {
        let p = Panicked::from_payload(Box::new("formatted".to_string()));
        assert_eq!(p.message(), "formatted");
    }

    #[test]
    fn panicked_from_unknown_payload() {
        let p = Panicked::from_payload(Box::new(42i32));
        assert_eq!(p.message(), "unknown panic");
    }
}
