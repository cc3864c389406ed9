//! The presence container: a value, or nothing.
//!
//! [`Maybe`] plays the role of a nullable reference without the null. It is
//! built from a value or from an external `Option`, transformed with
//! [`Maybe::map`] and [`Maybe::and_then`], and eliminated with [`Maybe::fold`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::maybe::Maybe;
//!
//! fn lookup(key: &str) -> Maybe<u32> {
//!     match key {
//!         "retries" => Maybe::present(3),
//!         _ => Maybe::absent(),
//!     }
//! }
//!
//! assert_eq!(lookup("retries").unwrap_or(1), 3);
//! assert_eq!(lookup("timeout").unwrap_or(1), 1);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
