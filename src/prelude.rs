//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`combine!`], [`errors!`]
//! - **Types**: [`Maybe`], [`Outcome`], [`Validation`], [`Errors`]
//! - **Combinators**: [`map2`] through [`map8`]
//! - **Traits**: [`ErrorCategory`], [`WithError`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn positive(n: i32) -> Validation<i32, String> {
//!     if n > 0 { Validation::valid(n) } else { Validation::invalid(format!("{n} is not positive")) }
//! }
//!
//! let size = map2(positive(3), positive(-4), |w, h| w * h);
//! assert_eq!(size.iter_errors().collect::<Vec<_>>(), ["-4 is not positive"]);
//! ```

// Macros
pub use crate::{combine, errors};

// Core types
pub use crate::maybe::Maybe;
pub use crate::outcome::Outcome;
pub use crate::types::Errors;
pub use crate::validation::Validation;

// Combinators
pub use crate::combine::{map2, map3, map4, map5, map6, map7, map8};

// Traits
pub use crate::traits::{ErrorCategory, WithError};
