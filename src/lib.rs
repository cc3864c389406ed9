//! Exhaustive containers for values that may be absent or may have failed.
//!
//! Three containers share one shape: a success case and a failure case, taken
//! apart with a total `fold`.
//!
//! - [`Maybe<T>`](maybe::Maybe): a value, or nothing.
//! - [`Outcome<T, E>`](outcome::Outcome): a value, or a single error; chaining stops at the first failure.
//! - [`Validation<T, E>`](validation::Validation): a value, or a non-empty ordered list of errors;
//!   independent validations combine by concatenating every failure.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Presence
//!
//! ```
//! use outcome_rail::maybe::Maybe;
//!
//! let name = Maybe::from_option(std::env::var("OUTCOME_RAIL_DOC_UNSET").ok());
//! assert_eq!(name.unwrap_or_else(|| "guest".to_string()), "guest");
//! ```
//!
//! ## Fail-fast outcomes
//!
//! ```
//! use outcome_rail::outcome::Outcome;
//!
//! let outcome: Outcome<i32, &str> = Outcome::failure("boom");
//! let chained = outcome.and_then(|x| Outcome::success(x + 1));
//! assert_eq!(chained, Outcome::failure("boom"));
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use outcome_rail::combine::map2;
//! use outcome_rail::validation::Validation;
//!
//! fn angle(degrees: i32) -> Validation<i32, String> {
//!     if (0..=180).contains(&degrees) {
//!         Validation::valid(degrees)
//!     } else {
//!         Validation::invalid(format!("{degrees} is outside the range of 0 to 180"))
//!     }
//! }
//!
//! let both = map2(angle(-5), angle(200), |a, b| (a, b));
//! assert_eq!(
//!     both.into_errors().unwrap().as_slice(),
//!     &["-5 is outside the range of 0 to 180", "200 is outside the range of 0 to 180"]
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Applicative combinators accumulating errors across 2 to 8 validations
pub mod combine;
/// Conversions between the containers and `Option`/`Result`
pub mod convert;
/// Macros for error sequences and combination
pub mod macros;
/// Presence container
pub mod maybe;
/// Single-error outcome container and fault interop
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Generic traits over the error-carrying containers
pub mod traits;
/// Error sequence and formatting types
pub mod types;
/// Validation type and associated traits for error accumulation
pub mod validation;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

mod misuse;

pub use convert::*;
pub use maybe::{present_values, Maybe};
pub use outcome::{Fault, Outcome};
pub use traits::*;
pub use types::{Errors, ErrorsFormatConfig};
pub use validation::Validation;
