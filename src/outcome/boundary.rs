//! Helpers that run foreign, fallible code and turn its faults into [`Outcome`] values.
//!
//! Only the requested category of fault becomes a `Failure`; everything else keeps
//! travelling the way it arrived.

use crate::outcome::core::Outcome;
use crate::types::alloc_type::Box;
use core::error::Error;

#[cfg(feature = "std")]
use crate::types::alloc_type::String;
#[cfg(feature = "std")]
use core::fmt;

/// Type-erased fault raised by foreign code.
pub type Fault = Box<dyn Error + Send + Sync + 'static>;

impl<T, E> Outcome<T, E>
where
    E: Error + 'static,
{
    /// Runs `f` and converts faults of category `E` into a `Failure`.
    ///
    /// A fault of any other type is handed back untouched as `Err`, so the caller
    /// can keep propagating it with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::outcome::Outcome;
    /// use std::num::ParseIntError;
    ///
    /// let parsed = Outcome::<u16, ParseIntError>::catching(|| Ok("8o".parse::<u16>()?)).unwrap();
    /// assert!(parsed.is_failure());
    ///
    /// let escaped = Outcome::<u16, ParseIntError>::catching(|| Err("socket closed".into()));
    /// assert_eq!(escaped.unwrap_err().to_string(), "socket closed");
    /// ```
    pub fn catching<F>(f: F) -> Result<Self, Fault>
    where
        F: FnOnce() -> Result<T, Fault>,
    {
        match f() {
            Ok(value) => Ok(Outcome::success(value)),
            Err(fault) => match fault.downcast::<E>() {
                Ok(error) => Ok(Outcome::failure(*error)),
                Err(fault) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        fault = %fault,
                        category = core::any::type_name::<E>(),
                        "propagating fault outside the caught category"
                    );
                    Err(fault)
                },
            },
        }
    }
}

/// Message of a panic captured by [`Outcome::catch_panic`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanicMessage(String);

#[cfg(feature = "std")]
impl PanicMessage {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(feature = "std")]
impl fmt::Display for PanicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "std")]
impl Error for PanicMessage {}

#[cfg(feature = "std")]
impl<T> Outcome<T, PanicMessage> {
    /// Runs `f`, turning a panic with a textual message into a `Failure`.
    ///
    /// Panics raised with any other payload (for example through
    /// `std::panic::panic_any`) are not caught and resume unwinding.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::outcome::Outcome;
    ///
    /// let outcome = Outcome::catch_panic(|| -> i32 { panic!("index out of range") });
    /// assert_eq!(outcome.unwrap_failure().as_str(), "index out of range");
    /// ```
    pub fn catch_panic<F>(f: F) -> Self
    where
        F: FnOnce() -> T + std::panic::UnwindSafe,
    {
        match std::panic::catch_unwind(f) {
            Ok(value) => Outcome::success(value),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => Outcome::failure(PanicMessage((*message).into())),
                Err(payload) => match payload.downcast::<String>() {
                    Ok(message) => Outcome::failure(PanicMessage(*message)),
                    Err(payload) => std::panic::resume_unwind(payload),
                },
            },
        }
    }
}
