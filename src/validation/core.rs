use crate::misuse;
use crate::types::Errors;
use core::fmt::{self, Debug};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Applicative-style validation that accumulates many errors instead of failing fast.
///
/// `Validation<T, E>` represents a computation that either succeeds with a value of type `T`
/// or fails with one or more errors of type `E`. Unlike [`Outcome`](crate::outcome::Outcome),
/// which stops at the first error, independent validations can be combined with
/// [`Validation::zip`] or the [`combine`](crate::combine) family so that every problem is
/// reported at once.
///
/// The failure payload is an [`Errors`] sequence: never empty, kept in the order the errors
/// were produced.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when `T` and `E` do, as
/// `{"Valid": value}` or `{"Invalid": [errors...]}`. An empty error list is rejected
/// on deserialization.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::Validation;
///
/// let valid = Validation::<i32, &str>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<i32, &str>::invalid("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Validation<T, E> {
    repr: Repr<T, E>,
}

#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum Repr<T, E> {
    Valid(T),
    Invalid(Errors<E>),
}

impl<T, E> Validation<T, E> {
    /// Creates a valid value.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<i32, &str>::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn valid(value: T) -> Self {
        Self { repr: Repr::Valid(value) }
    }

    /// Creates an invalid value from a single error.
    ///
    /// The error is stored as a one-element sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<(), &str>::invalid("missing field");
    /// assert_eq!(v.into_errors().unwrap().as_slice(), &["missing field"]);
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self { repr: Repr::Invalid(Errors::new(error)) }
    }

    /// Creates an invalid value from an already accumulated error sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::errors;
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<(), &str>::invalid_all(errors!["missing", "invalid"]);
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn invalid_all(errors: Errors<E>) -> Self {
        Self { repr: Repr::Invalid(errors) }
    }

    /// Eliminates the validation by handling both cases.
    ///
    /// `on_invalid` receives the complete, ordered error sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<u8, &str>::invalid("too old");
    /// let report = v.fold(|age| format!("age {age}"), |errors| format!("{} problem(s)", errors.len()));
    /// assert_eq!(report, "1 problem(s)");
    /// ```
    #[inline]
    pub fn fold<R, V, I>(self, on_valid: V, on_invalid: I) -> R
    where
        V: FnOnce(T) -> R,
        I: FnOnce(Errors<E>) -> R,
    {
        match self.repr {
            Repr::Valid(value) => on_valid(value),
            Repr::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Returns `true` if the validation contains a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self.repr, Repr::Valid(_))
    }

    /// Returns `true` if the validation contains errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the valid value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match &self.repr {
            Repr::Valid(value) => Some(value),
            Repr::Invalid(_) => None,
        }
    }

    /// Borrows the accumulated errors, if any.
    #[inline]
    pub fn errors(&self) -> Option<&Errors<E>> {
        match &self.repr {
            Repr::Valid(_) => None,
            Repr::Invalid(errors) => Some(errors),
        }
    }

    #[inline]
    pub(crate) fn errors_mut(&mut self) -> Option<&mut Errors<E>> {
        match &mut self.repr {
            Repr::Valid(_) => None,
            Repr::Invalid(errors) => Some(errors),
        }
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.repr {
            Repr::Valid(value) => Some(value),
            Repr::Invalid(_) => None,
        }
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are preserved unchanged and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<i32, &str>::valid(21);
    /// assert_eq!(v.map(|x| x * 2).into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(|value| Validation::valid(f(value)), Validation::invalid_all)
    }

    /// Chains computations that may produce additional validation errors.
    ///
    /// Behaves like [`Result::and_then`]: it is sequential and stops at the first
    /// invalid step. Use [`Validation::zip`] to accumulate independent checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// fn parse_even(input: i32) -> Validation<i32, &'static str> {
    ///     if input % 2 == 0 {
    ///         Validation::valid(input)
    ///     } else {
    ///         Validation::invalid("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Validation::valid(4).and_then(parse_even).into_value(), Some(4));
    /// assert!(Validation::valid(3).and_then(parse_even).is_invalid());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        self.fold(f, Validation::invalid_all)
    }

    /// Maps each error while preserving the success branch.
    ///
    /// `f` is applied element-wise to every accumulated error, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::errors;
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<i32, &str>::invalid_all(errors!["a", "b"]);
    /// let mapped = v.map_err(|e| format!("field {e}"));
    /// assert_eq!(mapped.into_errors().unwrap().as_slice(), &["field a", "field b"]);
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Validation<T, G>
    where
        F: FnMut(E) -> G,
    {
        self.fold(Validation::valid, |errors| Validation::invalid_all(errors.map(f)))
    }

    /// Replaces the whole failure case with the validation returned by `op`.
    ///
    /// A valid value passes through and `op` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<i32, &str>::invalid("error");
    /// let res = v.or_else(|_errs| Validation::<i32, &str>::valid(42));
    /// assert_eq!(res.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Validation<T, G>
    where
        F: FnOnce(Errors<E>) -> Validation<T, G>,
    {
        self.fold(Validation::valid, op)
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// This is the primitive every higher-arity combinator is built from:
    ///
    /// | `self`   | `other`  | result                                   |
    /// |----------|----------|------------------------------------------|
    /// | valid a  | valid b  | `Valid((a, b))`                          |
    /// | valid    | invalid  | `other`'s errors                         |
    /// | invalid  | valid    | `self`'s errors                          |
    /// | invalid  | invalid  | `self`'s errors followed by `other`'s    |
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v1 = Validation::<i32, &str>::valid(42);
    /// let v2 = Validation::<i32, &str>::valid(21);
    /// assert_eq!(v1.zip(v2).into_value(), Some((42, 21)));
    ///
    /// let v3 = Validation::<i32, &str>::invalid("error1");
    /// let v4 = Validation::<i32, &str>::invalid("error2");
    /// assert_eq!(v3.zip(v4).into_errors().unwrap().as_slice(), &["error1", "error2"]);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self.repr, other.repr) {
            (Repr::Valid(a), Repr::Valid(b)) => Validation::valid((a, b)),
            (Repr::Invalid(e), Repr::Valid(_)) => Validation::invalid_all(e),
            (Repr::Valid(_), Repr::Invalid(e)) => Validation::invalid_all(e),
            (Repr::Invalid(e1), Repr::Invalid(e2)) => Validation::invalid_all(e1.concat(e2)),
        }
    }

    /// Combines two validations with `f`, accumulating all errors.
    ///
    /// `f` runs only when both sides are valid.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Validation<U, E>, f: F) -> Validation<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Converts into a `Result` whose error side keeps every accumulated error.
    ///
    /// [`WithError::to_result`](crate::traits::WithError::to_result) keeps only the
    /// first error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::Validation;
    ///
    /// let v = Validation::<i32, &str>::valid(42);
    /// assert_eq!(v.into_result().ok(), Some(42));
    ///
    /// let v = Validation::<i32, &str>::invalid("error");
    /// assert!(v.into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Errors<E>> {
        self.fold(Ok, Err)
    }

    /// Wraps a normal `Result` into a `Validation`, turning the error side into a
    /// one-element sequence.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the error sequence, if any.
    #[inline]
    pub fn into_errors(self) -> Option<Errors<E>> {
        self.fold(|_| None, Some)
    }

    /// Extracts the value, if valid.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.fold(Some, |_| None)
    }

    /// Returns the valid value.
    ///
    /// # Panics
    ///
    /// Panics when invalid; the panic message lists every accumulated error.
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self.repr {
            Repr::Valid(value) => value,
            Repr::Invalid(errors) => {
                misuse::payload_failed("called `Validation::unwrap()` on an `Invalid` value", &errors)
            },
        }
    }

    /// Returns the valid value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the accumulated errors when invalid.
    #[track_caller]
    #[inline]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self.repr {
            Repr::Valid(value) => value,
            Repr::Invalid(errors) => misuse::payload_failed(msg, &errors),
        }
    }

    /// Returns the accumulated errors.
    ///
    /// # Panics
    ///
    /// Panics when valid; the panic message carries the value.
    #[track_caller]
    #[inline]
    pub fn unwrap_errors(self) -> Errors<E>
    where
        T: Debug,
    {
        match self.repr {
            Repr::Valid(value) => {
                misuse::payload_failed("called `Validation::unwrap_errors()` on a `Valid` value", &value)
            },
            Repr::Invalid(errors) => errors,
        }
    }
}

impl<T: Debug, E: Debug> Debug for Validation<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.repr, f)
    }
}
