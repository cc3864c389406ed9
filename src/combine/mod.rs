//! Applicative combination of independent validations.
//!
//! Every function here takes N validations sharing one error type and either
//! returns all N values or every error the failing inputs carried, concatenated
//! in argument order. Unlike chaining with
//! [`Validation::and_then`](crate::validation::Validation::and_then), nothing
//! stops at the first failure.
//!
//! Only [`Validation::zip`] inspects both cases of two inputs. `zip3` through
//! `zip8` fold one more input onto the previous arity's tuple with `zip` and
//! flatten the result; `map2` through `map8` apply the caller's function to the
//! flat tuple, once, and only when every input is valid.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::combine::map3;
//! use outcome_rail::validation::Validation;
//!
//! #[derive(Debug, PartialEq)]
//! struct User { name: String, age: u8, email: String }
//!
//! fn name(raw: &str) -> Validation<String, String> {
//!     if raw.is_empty() { Validation::invalid("name is empty".into()) } else { Validation::valid(raw.into()) }
//! }
//! fn age(raw: i32) -> Validation<u8, String> {
//!     u8::try_from(raw).map_err(|_| format!("{raw} is not a valid age")).into()
//! }
//! fn email(raw: &str) -> Validation<String, String> {
//!     if raw.contains('@') { Validation::valid(raw.into()) } else { Validation::invalid(format!("{raw} is not an email")) }
//! }
//!
//! let user = map3(name(""), age(-1), email("ada@example.com"), |name, age, email| User { name, age, email });
//! assert_eq!(
//!     user.into_errors().unwrap().as_slice(),
//!     &["name is empty".to_string(), "-1 is not a valid age".to_string()]
//! );
//! ```

use crate::validation::Validation;

/// Pairs two validations, accumulating the errors of both.
///
/// Free-function form of [`Validation::zip`].
#[inline]
pub fn zip2<T1, T2, E>(v1: Validation<T1, E>, v2: Validation<T2, E>) -> Validation<(T1, T2), E> {
    v1.zip(v2)
}

macro_rules! impl_zip {
    ($n:literal, $name:ident => $prev:ident; $($v:ident: $T:ident),+; $last_v:ident: $Last:ident) => {
        #[doc = concat!("Combines ", stringify!($n), " validations into one flat tuple, accumulating every error in argument order.")]
        #[inline]
        pub fn $name<$($T,)+ $Last, E>(
            $($v: Validation<$T, E>,)+
            $last_v: Validation<$Last, E>,
        ) -> Validation<($($T,)+ $Last), E> {
            $prev($($v),+).zip($last_v).map(|(($($v,)+), $last_v)| ($($v,)+ $last_v))
        }
    };
}

impl_zip!(3, zip3 => zip2; v1: T1, v2: T2; v3: T3);
impl_zip!(4, zip4 => zip3; v1: T1, v2: T2, v3: T3; v4: T4);
impl_zip!(5, zip5 => zip4; v1: T1, v2: T2, v3: T3, v4: T4; v5: T5);
impl_zip!(6, zip6 => zip5; v1: T1, v2: T2, v3: T3, v4: T4, v5: T5; v6: T6);
impl_zip!(7, zip7 => zip6; v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6; v7: T7);
impl_zip!(8, zip8 => zip7; v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7; v8: T8);

macro_rules! impl_map {
    ($n:literal, $name:ident => $zip:ident; $($v:ident: $T:ident),+) => {
        #[doc = concat!("Combines ", stringify!($n), " validations with `f`, accumulating every error in argument order.")]
        ///
        /// `f` is called exactly once, and only when every input is valid.
        #[inline]
        pub fn $name<$($T,)+ R, E, Func>($($v: Validation<$T, E>,)+ f: Func) -> Validation<R, E>
        where
            Func: FnOnce($($T),+) -> R,
        {
            $zip($($v),+).map(|($($v,)+)| f($($v),+))
        }
    };
}

impl_map!(2, map2 => zip2; v1: T1, v2: T2);
impl_map!(3, map3 => zip3; v1: T1, v2: T2, v3: T3);
impl_map!(4, map4 => zip4; v1: T1, v2: T2, v3: T3, v4: T4);
impl_map!(5, map5 => zip5; v1: T1, v2: T2, v3: T3, v4: T4, v5: T5);
impl_map!(6, map6 => zip6; v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6);
impl_map!(7, map7 => zip7; v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7);
impl_map!(8, map8 => zip8; v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7, v8: T8);
