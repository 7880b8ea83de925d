use std::fmt;

use crate::error::AccessError;

/// A value that is exactly one of two alternatives.
///
/// `Either` is right-biased: by convention `Right` carries the primary or successful value and
/// the unqualified [`map`](Either::map) and [`flat_map`](Either::flat_map) work on it. The
/// interface is otherwise symmetric, so both sides can be read, mapped and flat-mapped.
///
/// Combinators borrow `self` and return a new `Either`. The untouched side is cloned through.
///
/// # Examples
/// ```
/// use bifold_core::either::Either;
///
/// let right: Either<String, i32> = Either::right(42);
/// let result = right.map_right(|x| x * 2);
/// assert_eq!(result.right_value(), Some(&84));
///
/// let left: Either<i32, String> = Either::left(5);
/// assert_eq!(left.fold(|l| l * 10, |r| r.len() as i32), 50);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Creates a `Left` value.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Creates a `Right` value.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Builds an `Either` from two suppliers, preferring the right one.
    ///
    /// `right` runs first; if it yields `Some`, the result is a `Right` and `left` is never
    /// called.
    ///
    /// ```
    /// use bifold_core::either::Either;
    ///
    /// let e: Either<&str, i32> = Either::either(|| "no config", || None);
    /// assert_eq!(e, Either::Left("no config"));
    /// ```
    pub fn either(left: impl FnOnce() -> L, right: impl FnOnce() -> Option<R>) -> Self {
        match right() {
            Some(r) => Either::Right(r),
            None => Either::Left(left()),
        }
    }

    /// Creates an `Either` from a `Result`.
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Creates an `Either` from an `Option`, using `left_value` for `None`.
    pub fn from_option(option: Option<R>, left_value: impl FnOnce() -> L) -> Self {
        match option {
            Some(r) => Either::Right(r),
            None => Either::Left(left_value()),
        }
    }

    /// Returns `true` if this is a `Left`.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the `Left` value, if present.
    pub fn left_value(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the `Right` value, if present.
    pub fn right_value(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Returns the `Left` value, or [`AccessError::WrongVariant`] on a `Right`.
    pub fn get_left(&self) -> Result<&L, AccessError> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(AccessError::wrong_variant("get_left", "a Right")),
        }
    }

    /// Returns the `Right` value, or [`AccessError::WrongVariant`] on a `Left`.
    pub fn get_right(&self) -> Result<&R, AccessError> {
        match self {
            Either::Left(_) => Err(AccessError::wrong_variant("get_right", "a Left")),
            Either::Right(r) => Ok(r),
        }
    }

    /// Consumes `self`, returning the `Left` value.
    pub fn into_left(self) -> Result<L, AccessError> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(AccessError::wrong_variant("into_left", "a Right")),
        }
    }

    /// Consumes `self`, returning the `Right` value.
    pub fn into_right(self) -> Result<R, AccessError> {
        match self {
            Either::Left(_) => Err(AccessError::wrong_variant("into_right", "a Left")),
            Either::Right(r) => Ok(r),
        }
    }

    /// Returns the `Left` value, or an error built from the `Right` value.
    pub fn left_or_else_err<X, F: FnOnce(&R) -> X>(&self, f: F) -> Result<&L, X> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(r) => Err(f(r)),
        }
    }

    /// Returns the `Right` value, or an error built from the `Left` value.
    pub fn right_or_else_err<X, F: FnOnce(&L) -> X>(&self, f: F) -> Result<&R, X> {
        match self {
            Either::Left(l) => Err(f(l)),
            Either::Right(r) => Ok(r),
        }
    }

    /// Applies one of two functions depending on the variant.
    pub fn fold<T, FL: FnOnce(&L) -> T, FR: FnOnce(&R) -> T>(&self, on_left: FL, on_right: FR) -> T {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Maps over the `Left` value; a `Right` is passed through.
    pub fn map_left<U, F: FnOnce(&L) -> U>(&self, f: F) -> Either<U, R>
    where
        R: Clone,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r.clone()),
        }
    }

    /// Maps over the `Right` value; a `Left` is passed through.
    pub fn map_right<U, F: FnOnce(&R) -> U>(&self, f: F) -> Either<L, U>
    where
        L: Clone,
    {
        match self {
            Either::Left(l) => Either::Left(l.clone()),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Right-biased alias for [`map_right`](Either::map_right).
    pub fn map<U, F: FnOnce(&R) -> U>(&self, f: F) -> Either<L, U>
    where
        L: Clone,
    {
        self.map_right(f)
    }

    /// Maps over both sides simultaneously.
    pub fn bimap<A, B, FL: FnOnce(&L) -> A, FR: FnOnce(&R) -> B>(&self, on_left: FL, on_right: FR) -> Either<A, B> {
        match self {
            Either::Left(l) => Either::Left(on_left(l)),
            Either::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Chains a computation over the `Left` value. The returned `Either` is not re-wrapped.
    pub fn flat_map_left<U, F: FnOnce(&L) -> Either<U, R>>(&self, f: F) -> Either<U, R>
    where
        R: Clone,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r.clone()),
        }
    }

    /// Chains a computation over the `Right` value. The returned `Either` is not re-wrapped.
    pub fn flat_map_right<U, F: FnOnce(&R) -> Either<L, U>>(&self, f: F) -> Either<L, U>
    where
        L: Clone,
    {
        match self {
            Either::Left(l) => Either::Left(l.clone()),
            Either::Right(r) => f(r),
        }
    }

    /// Right-biased alias for [`flat_map_right`](Either::flat_map_right).
    pub fn flat_map<U, F: FnOnce(&R) -> Either<L, U>>(&self, f: F) -> Either<L, U>
    where
        L: Clone,
    {
        self.flat_map_right(f)
    }

    /// Alias for `flat_map`, compatible with `and_then` convention (Option/Result).
    pub fn and_then<U, F: FnOnce(&R) -> Either<L, U>>(&self, f: F) -> Either<L, U>
    where
        L: Clone,
    {
        self.flat_map_right(f)
    }

    /// Chains whichever side is present into a new `Either`.
    pub fn bi_flat_map<A, B, FL, FR>(&self, on_left: FL, on_right: FR) -> Either<A, B>
    where
        FL: FnOnce(&L) -> Either<A, B>,
        FR: FnOnce(&R) -> Either<A, B>,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Runs a side effect on whichever side is present.
    pub fn run<FL: FnOnce(&L), FR: FnOnce(&R)>(&self, on_left: FL, on_right: FR) {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Swaps `Left` and `Right`.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Converts to a `Result<R, L>`.
    pub fn to_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Converts to an `Option<R>`, discarding any `Left` value.
    pub fn to_option(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.to_result()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => f.debug_tuple("Left").field(l).finish(),
            Either::Right(r) => f.debug_tuple("Right").field(r).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
        prop_oneof![
            any::<i32>().prop_map(Either::right),
            "[a-z]{1,10}".prop_map(Either::left),
        ]
    }

    proptest! {
        #[test]
        fn cloning_maps_are_no_ops(e in arb_either()) {
            prop_assert_eq!(e.map_right(|x| *x), e.clone());
            prop_assert_eq!(e.map_left(|l| l.clone()), e);
        }

        #[test]
        fn inactive_side_untouched(e in arb_either()) {
            if e.is_left() {
                prop_assert_eq!(e.map_right(|x| x.wrapping_add(1)), e.clone());
                prop_assert_eq!(e.flat_map_right(|x| Either::right(x.wrapping_add(1))), e);
            } else {
                prop_assert_eq!(e.map_left(|l| format!("{}!", l)), e.clone());
                prop_assert_eq!(e.flat_map_left(|l| Either::left(format!("{}!", l))), e);
            }
        }

        #[test]
        fn get_matches_variant(e in arb_either()) {
            prop_assert_eq!(e.get_left().is_ok(), e.is_left());
            prop_assert_eq!(e.get_right().is_ok(), e.is_right());
            prop_assert_ne!(e.is_left(), e.is_right());
        }

        #[test]
        fn fold_rebuilds_the_same_value(e in arb_either()) {
            let folded = e.fold(|l| Either::<String, i32>::left(l.clone()), |r| Either::right(*r));
            prop_assert_eq!(folded, e);
        }

        #[test]
        fn flat_map_right_matches_map_right(x in any::<i32>()) {
            let e: Either<String, i32> = Either::right(x);
            prop_assert_eq!(
                e.flat_map_right(|v| Either::right(v.wrapping_mul(3))),
                e.map_right(|v| v.wrapping_mul(3))
            );
        }

        #[test]
        fn bimap_agrees_with_one_sided_maps(e in arb_either()) {
            let both = e.bimap(|l| l.len(), |r| r.wrapping_neg());
            let split = e.map_left(|l| l.len()).map_right(|r| r.wrapping_neg());
            prop_assert_eq!(both, split);
        }
    }
}
