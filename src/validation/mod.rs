//! Validation types and utilities for accumulating errors.
//!
//! This module provides the [`Validation`] type, which can accumulate multiple
//! errors while preserving success values. It's particularly useful for validating
//! complex data structures where you want to collect all validation errors at once
//! rather than failing on the first error.
//!
//! # Key Components
//!
//! - [`Validation`] - Core type that represents either a valid value or accumulated errors
//! - Iterator adapters for traversing values and errors
//! - `FromIterator` implementations that accumulate while collecting
//! - Trait implementations for the generic error traits
//!
//! # Examples
//!
//! ```
//! use outcome_rail::errors;
//! use outcome_rail::validation::Validation;
//!
//! let valid: Validation<i32, String> = Validation::valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<i32, &str> = Validation::invalid_all(errors!["err1", "err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
