//! Tracing integration for outcome-rail.
//!
//! This module provides utilities for integrating the containers with the
//! `tracing` ecosystem: logging failures as events and capturing span
//! information alongside each error.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::{self, Debug, Display};

use tracing::Span;

use crate::outcome::Outcome;
use crate::validation::Validation;

/// Error annotated with the name of the span it was observed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpannedError<E> {
    pub span: &'static str,
    pub error: E,
}

impl<E> SpannedError<E> {
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: Display> Display for SpannedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in span '{}': {}", self.span, self.error)
    }
}

/// Extracts the span name; disabled spans report as `unknown`.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}

/// Extension trait emitting a `tracing` event when a container is in its failure state.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::TraceFailure;
///
/// let user = map2(parse_name(raw), parse_age(raw), User::new).trace_failure("user form");
/// ```
pub trait TraceFailure: Sized {
    /// Logs the failure at debug level under `label` and returns `self` unchanged.
    fn trace_failure(self, label: &str) -> Self;
}

impl<T, E: Debug> TraceFailure for Outcome<T, E> {
    fn trace_failure(self, label: &str) -> Self {
        if let Some(error) = self.as_ref().failure_value().into_option() {
            tracing::debug!(label, error = ?error, "outcome failed");
        }
        self
    }
}

impl<T, E: Debug> TraceFailure for Validation<T, E> {
    fn trace_failure(self, label: &str) -> Self {
        if let Some(errors) = self.errors() {
            tracing::debug!(label, count = errors.len(), errors = ?errors, "validation failed");
        }
        self
    }
}

/// Extension trait attaching span names to every error of a container.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::SpanExt;
/// use tracing::info_span;
///
/// let _guard = info_span!("signup").entered();
/// let checked = validate_form(&form).with_current_span();
/// // errors now render as "in span 'signup': ..."
/// ```
pub trait SpanExt {
    type Output;

    /// Wraps every error with the current span's name.
    fn with_current_span(self) -> Self::Output;

    /// Wraps every error with the given span's name.
    fn with_span(self, span: &Span) -> Self::Output;
}

impl<T, E> SpanExt for Outcome<T, E> {
    type Output = Outcome<T, SpannedError<E>>;

    fn with_current_span(self) -> Self::Output {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Self::Output {
        let span = span_name(span);
        self.map_err(|error| SpannedError { span, error })
    }
}

impl<T, E> SpanExt for Validation<T, E> {
    type Output = Validation<T, SpannedError<E>>;

    fn with_current_span(self) -> Self::Output {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Self::Output {
        let span = span_name(span);
        self.map_err(|error| SpannedError { span, error })
    }
}
