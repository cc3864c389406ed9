use crate::maybe::core::Maybe;

/// Borrowing iterator over the (at most one) present value.
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_option() }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Maybe<T> {
    /// Views the container as a sequence of zero or one element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_option())
    }
}

/// Collects every present value, or yields `Absent` as soon as one element is absent.
///
/// # Examples
///
/// ```
/// use outcome_rail::maybe::Maybe;
///
/// let all: Maybe<Vec<i32>> = vec![Maybe::present(1), Maybe::present(2)].into_iter().collect();
/// assert_eq!(all, Maybe::present(vec![1, 2]));
///
/// let gap: Maybe<Vec<i32>> = vec![Maybe::present(1), Maybe::absent()].into_iter().collect();
/// assert!(gap.is_absent());
/// ```
impl<T, C> FromIterator<Maybe<T>> for Maybe<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        Maybe::from_option(iter.into_iter().map(Maybe::into_option).collect::<Option<C>>())
    }
}

/// Iterator adapter yielding the values of the present elements, skipping absent ones.
///
/// Created by [`present_values`].
pub struct PresentValues<I> {
    inner: I,
}

impl<T, I> Iterator for PresentValues<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Maybe::into_option)
    }
}

/// Keeps the present values of a sequence, in order, dropping the absent ones.
///
/// # Examples
///
/// ```
/// use outcome_rail::maybe::{present_values, Maybe};
///
/// let found: Vec<_> =
///     present_values([Maybe::present("a"), Maybe::absent(), Maybe::present("c")]).collect();
/// assert_eq!(found, vec!["a", "c"]);
/// ```
pub fn present_values<T, I>(items: I) -> PresentValues<I::IntoIter>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    PresentValues { inner: items.into_iter() }
}
