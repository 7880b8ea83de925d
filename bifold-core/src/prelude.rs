pub use crate::capture::{capture, capture_unchecked};
pub use crate::collect::EitherIterExt;
pub use crate::either::Either;
pub use crate::error::{AccessError, Panicked};
pub use crate::failure::Failure;
pub use crate::outcome::Outcome;
