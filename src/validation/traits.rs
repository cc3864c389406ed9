use crate::traits::ErrorCategory;
use crate::traits::WithError;
use crate::validation::core::Validation;

/// Implementation of `ErrorCategory` for `Validation` types.
///
/// This allows `Validation<(), E>` to act as an error category, where:
/// - `lift` creates `Valid` values
/// - `handle_error` creates `Invalid` values with a single error
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ErrorCategory;
/// use outcome_rail::validation::Validation;
///
/// let valid: Validation<i32, String> = <Validation<(), String>>::lift(42);
/// assert!(valid.is_valid());
///
/// let invalid: Validation<i32, String> = <Validation<(), String>>::handle_error("error".to_string());
/// assert!(invalid.is_invalid());
/// ```
impl<E> ErrorCategory<E> for Validation<(), E> {
    type ErrorFunctor<T> = Validation<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Validation<T, E> {
        Validation::valid(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Validation<T, E> {
        Validation::invalid(error)
    }
}

/// Implementation of `WithError` for `Validation` types.
///
/// `fmap_error` transforms every accumulated error; `to_result` keeps only the
/// earliest one, unlike [`Validation::into_result`] which keeps them all.
///
/// # Examples
///
/// ```
/// use outcome_rail::errors;
/// use outcome_rail::traits::WithError;
/// use outcome_rail::validation::Validation;
///
/// let validation: Validation<i32, &str> = Validation::invalid_all(errors!["err1", "err2"]);
/// let mapped = validation.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped.iter_errors().count(), 2);
///
/// let invalid: Validation<i32, &str> = Validation::invalid_all(errors!["first", "second"]);
/// assert_eq!(WithError::to_result(invalid), Err("first"));
/// ```
impl<T, E> WithError<E> for Validation<T, E> {
    type Success = T;
    type ErrorOutput<G> = Validation<T, G>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_err(f)
    }

    fn to_result(self) -> Result<Self::Success, E> {
        self.fold(Ok, |errors| Err(errors.into_first()))
    }
}
