//! The single-error outcome container.
//!
//! [`Outcome`] holds either a success value or exactly one error. It mirrors the
//! standard library's `Result`, but exposes its cases only through constructors
//! and [`Outcome::fold`], and adds boundary helpers for foreign faults.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::Outcome;
//!
//! let total = Outcome::<i32, &str>::success(40)
//!     .and_then(|x| Outcome::success(x + 2))
//!     .map_err(|e| e.len());
//! assert_eq!(total, Outcome::success(42));
//! ```
pub mod boundary;
pub mod core;

pub use self::boundary::*;
pub use self::core::*;
