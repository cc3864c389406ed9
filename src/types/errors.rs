use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;
use core::fmt::{self, Debug};
use core::ops::Deref;
use smallvec::smallvec;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize};

/// A non-empty, insertion-ordered sequence of errors.
///
/// This is the failure payload of [`Validation`](crate::validation::Validation).
/// Every constructor guarantees at least one element, so a failed validation can
/// never be observed without a reason attached to it. The order of the errors is
/// the order in which they were accumulated and is preserved by every operation.
///
/// The first error is stored inline; further errors spill to the heap.
///
/// # Examples
///
/// ```
/// use outcome_rail::types::Errors;
///
/// let mut errors = Errors::new("missing name");
/// errors.push("age out of range");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first(), &"missing name");
/// assert!(Errors::<&str>::try_from_iter(Vec::new()).is_none());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Errors<E> {
    items: ErrorVec<E>,
}

impl<E> Errors<E> {
    /// Creates a sequence holding a single error.
    #[inline]
    pub fn new(error: E) -> Self {
        Self { items: smallvec![error] }
    }

    /// Creates a sequence from a leading error followed by any number of others.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::types::Errors;
    ///
    /// let errors = Errors::from_parts("a", ["b", "c"]);
    /// assert_eq!(errors.as_slice(), &["a", "b", "c"]);
    /// ```
    #[inline]
    pub fn from_parts<I>(first: E, rest: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut items: ErrorVec<E> = smallvec![first];
        items.extend(rest);
        Self { items }
    }

    /// Collects an iterator into a sequence, or returns `None` when it yields nothing.
    #[inline]
    pub fn try_from_iter<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let items: ErrorVec<E> = errors.into_iter().collect();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Appends one error at the end.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.items.push(error);
    }

    /// Moves every error of `other` to the end of this sequence.
    #[inline]
    pub fn append(&mut self, other: Errors<E>) {
        self.items.extend(other.items);
    }

    /// Concatenates two sequences, `self` first.
    #[must_use]
    #[inline]
    pub fn concat(mut self, other: Errors<E>) -> Self {
        self.append(other);
        self
    }

    /// Returns the earliest accumulated error.
    #[inline]
    pub fn first(&self) -> &E {
        // non-empty by construction
        &self.items[0]
    }

    /// Returns the most recently accumulated error.
    #[inline]
    pub fn last(&self) -> &E {
        &self.items[self.items.len() - 1]
    }

    /// Consumes the sequence, keeping only the earliest error.
    #[inline]
    pub fn into_first(self) -> E {
        let mut items = self.items;
        items.swap_remove(0)
    }

    /// Returns the errors as a slice, in accumulation order.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        self.items.as_slice()
    }

    /// Returns a mutable iterator over the errors.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, E> {
        self.items.iter_mut()
    }

    /// Applies `f` to every error, preserving order.
    #[inline]
    pub fn map<G, F>(self, f: F) -> Errors<G>
    where
        F: FnMut(E) -> G,
    {
        Errors { items: self.items.into_iter().map(f).collect() }
    }

    /// Consumes the sequence and returns the underlying inline-first storage.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<E> {
        self.items
    }

    /// Consumes the sequence into a plain `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<E> {
        self.items.into_vec()
    }
}

impl<E> Deref for Errors<E> {
    type Target = [E];

    #[inline]
    fn deref(&self) -> &[E] {
        self.items.as_slice()
    }
}

impl<E> AsRef<[E]> for Errors<E> {
    #[inline]
    fn as_ref(&self) -> &[E] {
        self.items.as_slice()
    }
}

impl<E: Debug> Debug for Errors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<E> Extend<E> for Errors<E> {
    #[inline]
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<E> IntoIterator for Errors<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Errors<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E> From<Errors<E>> for Vec<E> {
    #[inline]
    fn from(errors: Errors<E>) -> Self {
        errors.into_vec()
    }
}

#[cfg(feature = "serde")]
impl<'de, E> Deserialize<'de> for Errors<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = ErrorVec::<E>::deserialize(deserializer)?;
        if items.is_empty() {
            return Err(de::Error::invalid_length(0, &"at least one error"));
        }
        Ok(Self { items })
    }
}
