use crate::outcome::Outcome;
use crate::traits::with_error::WithError;

/// Recovery and two-sided mapping for single-error containers.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::Outcome;
/// use outcome_rail::traits::ErrorOps;
///
/// let outcome: Outcome<u32, &str> = Outcome::failure("not cached");
/// let recovered = outcome.recover(|_| Outcome::success(0));
/// assert_eq!(recovered, Outcome::success(0));
///
/// let described = Outcome::<u32, &str>::success(7).bimap_result(|n| n * 2, str::len);
/// assert_eq!(described, Ok(14));
/// ```
pub trait ErrorOps<E>: WithError<E> {
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
        Self: Sized;

    fn bimap_result<B, F, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Result<B, F>
    where
        SuccessF: FnOnce(Self::Success) -> B,
        ErrorF: FnOnce(E) -> F,
        Self: Sized;
}

impl<T, E> ErrorOps<E> for Result<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => recovery(error),
        }
    }

    #[inline]
    fn bimap_result<B, F, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Result<B, F>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(E) -> F,
    {
        match self {
            Ok(value) => Ok(success_f(value)),
            Err(error) => Err(error_f(error)),
        }
    }
}

impl<T, E> ErrorOps<E> for Outcome<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        self.or_else(recovery)
    }

    #[inline]
    fn bimap_result<B, F, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Result<B, F>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(E) -> F,
    {
        self.fold(|value| Ok(success_f(value)), |error| Err(error_f(error)))
    }
}
