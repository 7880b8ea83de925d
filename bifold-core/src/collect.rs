use crate::either::Either;

/// Extension trait for iterators of [`Either`] values.
///
/// # Examples
/// ```
/// use bifold_core::collect::EitherIterExt;
/// use bifold_core::either::Either;
///
/// let items: Vec<Either<&str, i32>> = vec![Either::right(1), Either::left("bad"), Either::right(2)];
///
/// assert_eq!(items.clone().into_iter().collect_left_biased(), Either::Left(vec!["bad"]));
/// assert_eq!(items.into_iter().collect_right_biased(), Either::Right(vec![1, 2]));
/// ```
pub trait EitherIterExt<L, R>: Iterator<Item = Either<L, R>> + Sized {
    /// Splits the items into all `Left` values and all `Right` values, keeping order.
    fn partition_either(self) -> (Vec<L>, Vec<R>) {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for item in self {
            match item {
                Either::Left(l) => lefts.push(l),
                Either::Right(r) => rights.push(r),
            }
        }
        (lefts, rights)
    }

    /// Collects into `Left(lefts)` if there are no items or at least one `Left`,
    /// otherwise `Right(rights)`.
    fn collect_left_biased(self) -> Either<Vec<L>, Vec<R>> {
        let (lefts, rights) = self.partition_either();
        if !lefts.is_empty() || rights.is_empty() {
            Either::Left(lefts)
        } else {
            Either::Right(rights)
        }
    }

    /// Collects into `Right(rights)` if there are no items or at least one `Right`,
    /// otherwise `Left(lefts)`.
    fn collect_right_biased(self) -> Either<Vec<L>, Vec<R>> {
        let (lefts, rights) = self.partition_either();
        if !rights.is_empty() || lefts.is_empty() {
            Either::Right(rights)
        } else {
            Either::Left(lefts)
        }
    }
}

impl<L, R, I> EitherIterExt<L, R> for I where I: Iterator<Item = Either<L, R>> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Vec<Either<&'static str, i32>> {
        vec![Either::right(1), Either::left("a"), Either::right(2), Either::left("b")]
    }

    #[test]
    fn partition_keeps_order() {
        let (lefts, rights) = mixed().into_iter().partition_either();
        assert_eq!(lefts, vec!["a", "b"]);
        assert_eq!(rights, vec![1, 2]);
    }

    #[test]
    fn left_biased_with_any_left() {
        assert_eq!(mixed().into_iter().collect_left_biased(), Either::Left(vec!["a", "b"]));
    }

    #[test]
    fn left_biased_with_only_rights() {
        let items: Vec<Either<&str, i32>> = vec![Either::right(1), Either::right(2)];
        assert_eq!(items.into_iter().collect_left_biased(), Either::Right(vec![1, 2]));
    }

    #[test]
    fn left_biased_empty_is_left() {
        let items: Vec<Either<&str, i32>> = Vec::new();
        assert_eq!(items.into_iter().collect_left_biased(), Either::Left(Vec::new()));
    }

    #[test]
    fn right_biased_with_any_right() {
        assert_eq!(mixed().into_iter().collect_right_biased(), Either::Right(vec![1, 2]));
    }

    #[test]
    fn right_biased_with_only_lefts() {
        let items: Vec<Either<&str, i32>> = vec![Either::left("x"), Either::left("y")];
        assert_eq!(items.into_iter().collect_right_biased(), Either::Left(vec!["x", "y"]));
    }

    #[test]
    fn right_biased_empty_is_right() {
        let items: Vec<Either<&str, i32>> = Vec::new();
        assert_eq!(items.into_iter().collect_right_biased(), Either::Right(Vec::new()));
    }

    #[test]
    fn works_with_mapped_iterators() {
        let parsed = ["1", "x", "3"]
            .iter()
            .map(|s| Either::from_result(s.parse::<i32>().map_err(|_| s.to_string())))
            .collect_right_biased();
        assert_eq!(parsed, Either::Right(vec![1, 3]));
    }
}
