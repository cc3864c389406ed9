//! Conversions between [`Maybe`], [`Outcome`], [`Validation`] and the standard
//! library's `Option` and `Result`.
//!
//! Every conversion is an explicit call: a named function, an inherent method
//! such as [`Maybe::ok_or`], or a `From` impl used through `.into()`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::maybe::Maybe;
//! use outcome_rail::outcome::Outcome;
//!
//! let outcome = maybe_to_outcome(Maybe::<u16>::absent(), "port not configured");
//! assert_eq!(outcome, Outcome::failure("port not configured"));
//!
//! let validation = outcome_to_validation(outcome);
//! assert_eq!(validation.iter_errors().count(), 1);
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::types::alloc_type::Vec;
use crate::types::Errors;
use crate::validation::Validation;

impl<T> Maybe<T> {
    /// Turns `Absent` into a failure carrying `error`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        self.fold(Outcome::success, || Outcome::failure(error))
    }

    /// Turns `Absent` into a failure carrying the error produced by `f`.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        self.fold(Outcome::success, || Outcome::failure(f()))
    }
}

impl<T, E> Outcome<T, E> {
    /// Keeps the success value, discarding the error.
    #[inline]
    pub fn success_value(self) -> Maybe<T> {
        self.fold(Maybe::present, |_| Maybe::absent())
    }

    /// Keeps the error, discarding the success value.
    #[inline]
    pub fn failure_value(self) -> Maybe<E> {
        self.fold(|_| Maybe::absent(), Maybe::present)
    }
}

impl<T, E> Validation<T, E> {
    /// Wraps an outcome, turning its error into a one-element sequence.
    #[inline]
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        outcome.fold(Validation::valid, Validation::invalid)
    }

    /// Converts into an outcome whose failure keeps the whole error sequence.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, Errors<E>> {
        self.fold(Outcome::success, Outcome::failure)
    }
}

#[inline]
pub fn maybe_to_outcome<T, E>(maybe: Maybe<T>, error: E) -> Outcome<T, E> {
    maybe.ok_or(error)
}

#[inline]
pub fn outcome_to_maybe<T, E>(outcome: Outcome<T, E>) -> Maybe<T> {
    outcome.success_value()
}

#[inline]
pub fn outcome_to_validation<T, E>(outcome: Outcome<T, E>) -> Validation<T, E> {
    Validation::from_outcome(outcome)
}

#[inline]
pub fn validation_to_outcome<T, E>(validation: Validation<T, E>) -> Outcome<T, Errors<E>> {
    validation.into_outcome()
}

/// Keeps only whether the validation succeeded, discarding every error.
#[inline]
pub fn validation_to_maybe<T, E>(validation: Validation<T, E>) -> Maybe<T> {
    validation.fold(Maybe::present, |_| Maybe::absent())
}

/// Converts into a `Result`, keeping only the earliest error.
#[inline]
pub fn validation_to_result<T, E>(validation: Validation<T, E>) -> Result<T, E> {
    validation.fold(Ok, |errors| Err(errors.into_first()))
}

#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> Validation<T, E> {
    Validation::from_result(result)
}

/// Turns a batch of errors into a unit validation: valid only when there are none.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_errors;
///
/// assert!(collect_errors(Vec::<&str>::new()).is_valid());
/// assert_eq!(collect_errors(["a", "b"]).iter_errors().count(), 2);
/// ```
#[inline]
pub fn collect_errors<E, I>(errors: I) -> Validation<(), E>
where
    I: IntoIterator<Item = E>,
{
    match Errors::try_from_iter(errors) {
        Some(errors) => Validation::invalid_all(errors),
        None => Validation::valid(()),
    }
}

/// Splits a validation into one `Result` per value or error, in order.
pub fn split_validation_errors<T, E>(validation: Validation<T, E>) -> Vec<Result<T, E>> {
    validation.fold(|value| [Ok(value)].into_iter().collect(), |errors| errors.into_iter().map(Err).collect())
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Validation<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        Validation::from_outcome(outcome)
    }
}

impl<T, E> From<Validation<T, E>> for Result<T, Errors<E>> {
    #[inline]
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_result()
    }
}
