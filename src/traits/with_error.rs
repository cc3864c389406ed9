use crate::outcome::Outcome;

/// Abstraction over containers that carry an error variant which can be remapped.
///
/// This trait provides a generic interface for types that contain both success and error cases,
/// allowing transformation of the error type while preserving the success value.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::Outcome;
/// use outcome_rail::traits::WithError;
///
/// let outcome: Outcome<i32, &str> = Outcome::failure("original error");
/// let mapped = outcome.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped, Outcome::failure("Error: original error".to_string()));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps every error value using `f`, producing a new container with error type `G`.
    ///
    /// This operation leaves the success case untouched and only transforms the error.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from type `E` to type `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::WithError;
    ///
    /// let result: Result<i32, u32> = Err(404);
    /// let mapped = result.fmap_error(|code| format!("HTTP {}", code));
    /// assert_eq!(mapped, Err("HTTP 404".to_string()));
    /// ```
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G;

    /// Converts the container into a `Result` carrying a single error.
    ///
    /// For `Result` this is a no-op; containers holding several errors keep the first.
    fn to_result(self) -> Result<Self::Success, E>;
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_err(f)
    }

    fn to_result(self) -> Result<Self::Success, E> {
        self
    }
}

impl<T, E> WithError<E> for Outcome<T, E> {
    type Success = T;
    type ErrorOutput<G> = Outcome<T, G>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_err(f)
    }

    fn to_result(self) -> Result<Self::Success, E> {
        self.into_result()
    }
}
