//! bifold: right-biased `Either` and panic-capturing `Outcome` for Rust.
//!
//! This is the umbrella crate that re-exports all bifold functionality.
//!
//! # Quick Start
//! ```
//! use bifold::prelude::*;
//!
//! let either: Either<&str, i32> = Either::right(42);
//! let doubled = either.map(|x| x * 2);
//! assert_eq!(doubled.right_value(), Some(&84));
//!
//! let outcome = Outcome::ok(21).map(|x| x * 2);
//! assert_eq!(outcome, Outcome::ok(42));
//! ```

pub use bifold_core::prelude;
pub use bifold_core::*;
