//! Core traits shared by the containers.
//!
//! This module defines the traits that let generic code work over
//! `Result`, [`Outcome`](crate::outcome::Outcome) and
//! [`Validation`](crate::validation::Validation) alike:
//!
//! - [`ErrorCategory`]: Categorical abstraction for lifting values and errors
//! - [`ErrorOps`]: Operations for error recovery and bidirectional mapping
//! - [`WithError`]: Abstraction for types that carry remappable error variants
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{ErrorCategory, WithError};
//! use outcome_rail::validation::Validation;
//!
//! // Using ErrorCategory to lift values
//! let success: Result<i32, String> = <Result<(), String>>::lift(42);
//! assert_eq!(success, Ok(42));
//!
//! // WithError remaps every error, whatever the container
//! let invalid: Validation<i32, u16> = <Validation<(), u16>>::handle_error(404);
//! let renamed = invalid.fmap_error(|code| format!("HTTP {code}"));
//! assert_eq!(renamed.iter_errors().next().map(String::as_str), Some("HTTP 404"));
//! ```

pub mod error_category;
pub mod error_ops;
pub mod with_error;

pub use error_category::ErrorCategory;
pub use error_ops::ErrorOps;
pub use with_error::WithError;
