use crate::maybe::Iter;
use crate::misuse;
use core::fmt::{self, Debug};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Success with a value of type `T`, or failure with a single error of type `E`.
///
/// `Outcome<T, E>` is the fail-fast container: chaining with [`Outcome::and_then`]
/// stops at the first failure. Use [`Validation`](crate::validation::Validation)
/// when every failure should be reported.
///
/// The two cases are private; build values with [`Outcome::success`] and
/// [`Outcome::failure`] and take them apart with [`Outcome::fold`].
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` serializes as `{"Success": value}` or
/// `{"Failure": error}`.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     raw.parse::<u16>().map_err(|e| format!("bad port {raw:?}: {e}")).into()
/// }
///
/// let message = parse_port("80").map(|p| p + 1).fold(|p| p.to_string(), |e| e);
/// assert_eq!(message, "81");
/// assert!(parse_port("http").is_failure());
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Outcome<T, E> {
    repr: Repr<T, E>,
}

#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum Repr<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Lifts a value into the success state.
    #[inline]
    pub fn success(value: T) -> Self {
        Self { repr: Repr::Success(value) }
    }

    /// Creates the failure state from an error.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self { repr: Repr::Failure(error) }
    }

    /// Eliminates the container by handling both cases.
    ///
    /// Exactly one of the two functions is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("timeout");
    /// let status = outcome.fold(|_| 200, |_| 504);
    /// assert_eq!(status, 504);
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self.repr {
            Repr::Success(value) => on_success(value),
            Repr::Failure(error) => on_failure(error),
        }
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match &self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(error) => Outcome::failure(error),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match &mut self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(error) => Outcome::failure(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.as_ref().fold(|_| true, |_| false)
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Transforms the success value; a failure passes through and `f` is not called.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(|value| Outcome::success(f(value)), Outcome::failure)
    }

    /// Chains a computation that may fail; stops at the first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::outcome::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, String> {
    ///     if x % 2 == 0 { Outcome::success(x / 2) } else { Outcome::failure(format!("{x} is odd")) }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half).and_then(half), Outcome::success(2));
    /// assert_eq!(Outcome::success(6).and_then(half).and_then(half), Outcome::failure("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.fold(f, Outcome::failure)
    }

    /// Transforms the error; a success passes through and `f` is not called.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        self.fold(Outcome::success, |error| Outcome::failure(f(error)))
    }

    /// Replaces a failure with the outcome produced by `f`; a success passes through.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::outcome::Outcome;
    ///
    /// let cached: Outcome<&str, &str> = Outcome::failure("cache miss");
    /// let value = cached.or_else(|_| Outcome::<&str, &str>::success("from origin"));
    /// assert_eq!(value, Outcome::success("from origin"));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        self.fold(Outcome::success, f)
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.fold(|value| value, |_| default)
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.fold(|value| value, f)
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }

    /// Views the success value as a sequence of zero or one element.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().fold(Some, |_| None))
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure; the panic message carries the error.
    ///
    /// ```should_panic
    /// use outcome_rail::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("disk full");
    /// outcome.unwrap(); // panics with "... `Failure` value: \"disk full\""
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(error) => {
                misuse::payload_failed("called `Outcome::unwrap()` on a `Failure` value", &error)
            },
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the error when the outcome is a failure.
    #[track_caller]
    #[inline]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(error) => misuse::payload_failed(msg, &error),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a success; the panic message carries the value.
    #[track_caller]
    #[inline]
    pub fn unwrap_failure(self) -> E
    where
        T: Debug,
    {
        match self.repr {
            Repr::Success(value) => {
                misuse::payload_failed("called `Outcome::unwrap_failure()` on a `Success` value", &value)
            },
            Repr::Failure(error) => error,
        }
    }
}

impl<T: Debug, E: Debug> Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.repr, f)
    }
}
