//! Ergonomic macros for building error sequences and combining validations.
//!
//! - [`macro@crate::errors`] - Builds a non-empty [`Errors`](crate::types::Errors)
//!   sequence from one or more expressions, like `vec!`.
//! - [`macro@crate::combine`] - Combines 2 to 8 validations with a function,
//!   dispatching to the matching [`combine::mapN`](crate::combine) function.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{combine, errors};
//! use outcome_rail::validation::Validation;
//!
//! let width: Validation<u32, &str> = Validation::valid(640);
//! let height: Validation<u32, &str> = Validation::invalid_all(errors!["height is zero"]);
//!
//! let area = combine!(width, height => |w, h| w * h);
//! assert_eq!(area.into_errors(), Some(errors!["height is zero"]));
//! ```

/// Creates an [`Errors`](crate::types::Errors) sequence holding the given errors, in order.
///
/// At least one expression is required, so the sequence is never empty.
///
/// # Examples
///
/// ```
/// use outcome_rail::errors;
///
/// let errors = errors!["first", "second"];
/// assert_eq!(errors.as_slice(), &["first", "second"]);
/// ```
#[macro_export]
macro_rules! errors {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::types::Errors::from_parts($first, [$($rest),*])
    };
}

/// Combines 2 to 8 validations with a function, accumulating every error.
///
/// Expands to the [`combine`](crate::combine) function of the matching arity.
///
/// # Examples
///
/// ```
/// use outcome_rail::combine;
/// use outcome_rail::validation::Validation;
///
/// let sum = combine!(
///     Validation::<i32, &str>::valid(1),
///     Validation::valid(2),
///     Validation::valid(3)
///     => |a, b, c| a + b + c
/// );
/// assert_eq!(sum.into_value(), Some(6));
/// ```
#[macro_export]
macro_rules! combine {
    ($v1:expr, $v2:expr $(,)? => $f:expr) => {
        $crate::combine::map2($v1, $v2, $f)
    };
    ($v1:expr, $v2:expr, $v3:expr $(,)? => $f:expr) => {
        $crate::combine::map3($v1, $v2, $v3, $f)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr $(,)? => $f:expr) => {
        $crate::combine::map4($v1, $v2, $v3, $v4, $f)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr $(,)? => $f:expr) => {
        $crate::combine::map5($v1, $v2, $v3, $v4, $v5, $f)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr $(,)? => $f:expr) => {
        $crate::combine::map6($v1, $v2, $v3, $v4, $v5, $v6, $f)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr $(,)? => $f:expr) => {
        $crate::combine::map7($v1, $v2, $v3, $v4, $v5, $v6, $v7, $f)
    };
    ($v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr, $v8:expr $(,)? => $f:expr) => {
        $crate::combine::map8($v1, $v2, $v3, $v4, $v5, $v6, $v7, $v8, $f)
    };
}
