use crate::outcome::Outcome;
use crate::traits::*;

/// Lifts plain values and errors into a container family.
///
/// The implementor is the container instantiated at `()`; `ErrorFunctor<T>` names the
/// same container holding a `T`. `lift` is the explicit "bare value to success"
/// conversion and `handle_error` the "bare error to failure" one.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::Outcome;
/// use outcome_rail::traits::ErrorCategory;
///
/// let ok: Outcome<i32, String> = <Outcome<(), String>>::lift(42);
/// assert_eq!(ok, Outcome::success(42));
/// ```
pub trait ErrorCategory<E> {
    type ErrorFunctor<T>: WithError<E>;

    fn lift<T>(value: T) -> Self::ErrorFunctor<T>;

    fn handle_error<T>(error: E) -> Self::ErrorFunctor<T>;
}

impl<E> ErrorCategory<E> for Result<(), E> {
    type ErrorFunctor<T> = Result<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Result<T, E> {
        Err(error)
    }
}

impl<E> ErrorCategory<E> for Outcome<(), E> {
    type ErrorFunctor<T> = Outcome<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Outcome<T, E> {
        Outcome::success(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Outcome<T, E> {
        Outcome::failure(error)
    }
}
