//! Panics raised when a caller breaks a container's precondition.
//!
//! These are programming errors, never domain failures: nothing in the crate
//! catches them, and ordinary control flow never depends on them.

use core::fmt::Debug;

/// Panics with `msg` followed by the offending payload.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn payload_failed(msg: &str, payload: &dyn Debug) -> ! {
    panic!("{msg}: {payload:?}")
}

/// Panics with `msg` alone, for states that carry no payload.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn state_failed(msg: &str) -> ! {
    panic!("{msg}")
}
