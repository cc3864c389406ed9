//! Supporting types shared by the containers.
//!
//! The main item here is [`Errors`], the non-empty ordered error sequence carried
//! by a failed [`Validation`](crate::validation::Validation), together with its
//! formatting configuration.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::Errors;
//!
//! let errors = Errors::from_parts("too short", ["missing digit"]);
//! println!("{}", errors);
//! // Output: too short; missing digit
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod errors;
pub mod errors_formatter;

pub use errors::*;
pub use errors_formatter::{ErrorsDisplay, ErrorsFormatConfig, ErrorsFormatter};

/// SmallVec-backed storage used for accumulating errors.
///
/// Uses inline storage for 1 element, the common case of a single failed check.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
