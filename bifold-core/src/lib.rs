//! bifold-core: Either and Outcome types with functional combinators.
//!
//! `Either<L, R>` holds exactly one of two alternatives and is right-biased.
//! `Outcome<T>` holds a value or a captured [`Failure`], and turns panics raised
//! inside its combinators into failures.

pub mod capture;
pub mod collect;
pub mod either;
pub mod error;
pub mod failure;
pub mod outcome;
pub mod prelude;

pub use crate::capture::{capture, capture_unchecked};
pub use crate::collect::EitherIterExt;
pub use crate::either::Either;
pub use crate::error::{AccessError, Panicked};
pub use crate::failure::Failure;
pub use crate::outcome::Outcome;
