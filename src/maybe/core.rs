use crate::misuse;
use core::fmt::{self, Debug};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value of type `T`, or nothing.
///
/// `Maybe<T>` is either `Present(value)` or `Absent`. The two cases are not
/// reachable as enum variants from outside this module: values are built with
/// [`Maybe::present`], [`Maybe::absent`] or [`Maybe::from_option`], and taken
/// apart with [`Maybe::fold`], the total case analysis every other operation is
/// built on.
///
/// # Serde Support
///
/// With the `serde` feature, `Maybe` serializes as `{"Present": value}` or `"Absent"`.
///
/// # Examples
///
/// ```
/// use outcome_rail::maybe::Maybe;
///
/// let port = Maybe::present("8080").and_then(|raw| Maybe::from_option(raw.parse::<u16>().ok()));
/// assert_eq!(port, Maybe::present(8080));
///
/// let described = port.fold(|p| format!("port {p}"), || "no port".to_string());
/// assert_eq!(described, "port 8080");
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Maybe<T> {
    repr: Repr<T>,
}

#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum Repr<T> {
    Absent,
    Present(T),
}

impl<T> Maybe<T> {
    /// Lifts a value into the present state.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::maybe::Maybe;
    ///
    /// assert!(Maybe::present(1).is_present());
    /// ```
    #[inline]
    pub fn present(value: T) -> Self {
        Self { repr: Repr::Present(value) }
    }

    /// Creates the absent state.
    #[inline]
    pub fn absent() -> Self {
        Self { repr: Repr::Absent }
    }

    /// Lifts an optional external value; `None` becomes `Absent`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::present(value),
            None => Self::absent(),
        }
    }

    /// Eliminates the container by handling both cases.
    ///
    /// Exactly one of the two functions is called: `on_present` with the value,
    /// or `on_absent` when there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::maybe::Maybe;
    ///
    /// let len = Maybe::present("abc").fold(|s| s.len(), || 0);
    /// assert_eq!(len, 3);
    ///
    /// let len = Maybe::<&str>::absent().fold(|s| s.len(), || 0);
    /// assert_eq!(len, 0);
    /// ```
    #[inline]
    pub fn fold<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self.repr {
            Repr::Present(value) => on_present(value),
            Repr::Absent => on_absent(),
        }
    }

    /// Borrows the payload, producing a `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match &self.repr {
            Repr::Present(value) => Maybe::present(value),
            Repr::Absent => Maybe::absent(),
        }
    }

    /// Mutably borrows the payload, producing a `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match &mut self.repr {
            Repr::Present(value) => Maybe::present(value),
            Repr::Absent => Maybe::absent(),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        self.as_ref().fold(|_| true, || false)
    }

    #[must_use]
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Transforms the present value; `f` is not called when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(21).map(|x| x * 2), Maybe::present(42));
    /// assert_eq!(Maybe::<i32>::absent().map(|x| x * 2), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(|value| Maybe::present(f(value)), Maybe::absent)
    }

    /// Chains a computation that may itself produce nothing.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.fold(f, Maybe::absent)
    }

    /// Keeps the value only when `predicate` accepts it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(4).filter(|x| x % 2 == 0), Maybe::present(4));
    /// assert_eq!(Maybe::present(3).filter(|x| x % 2 == 0), Maybe::absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|value| if predicate(&value) { Maybe::present(value) } else { Maybe::absent() })
    }

    /// Returns `self` when present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Self {
        self.fold(Maybe::present, || other)
    }

    /// Returns `self` when present, otherwise the result of `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        self.fold(Maybe::present, f)
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.fold(|value| value, || default)
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(|value| value, f)
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.fold(|value| value, T::default)
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.fold(Some, || None)
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics when the container is absent. This is a misuse of the container,
    /// not a way to report a missing value.
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T {
        match self.repr {
            Repr::Present(value) => value,
            Repr::Absent => misuse::state_failed("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when the container is absent.
    #[track_caller]
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self.repr {
            Repr::Present(value) => value,
            Repr::Absent => misuse::state_failed(msg),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<T: Debug> Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.repr, f)
    }
}
