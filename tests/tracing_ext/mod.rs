use outcome_rail::errors;
use outcome_rail::outcome::Outcome;
use outcome_rail::tracing_ext::{SpanExt, SpannedError, TraceFailure};
use outcome_rail::validation::Validation;
use std::fmt::Debug;
use std::num::ParseIntError;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Span, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Records the `message` field of every event it sees.
#[derive(Clone, Default)]
struct MessageLog(Arc<Mutex<Vec<String>>>);

impl MessageLog {
    fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for MessageLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        self.0.lock().unwrap().push(visitor.0.unwrap_or_default());
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let log = MessageLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, log.messages())
}

#[test]
fn test_spanned_error_display() {
    let error = SpannedError { span: "signup", error: "name is empty" };
    assert_eq!(error.to_string(), "in span 'signup': name is empty");
    assert_eq!(error.into_inner(), "name is empty");
}

#[test]
fn test_with_current_span_without_subscriber() {
    let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    let spanned = outcome.with_current_span();
    assert_eq!(spanned.unwrap_failure(), SpannedError { span: "unknown", error: "boom" });
}

#[test]
fn test_with_span_wraps_every_validation_error() {
    let validation: Validation<i32, &str> = Validation::invalid_all(errors!["a", "b"]);
    let spanned = validation.with_span(&Span::none());
    let errors: Vec<&str> = spanned.iter_errors().map(|e| e.error).collect();
    assert_eq!(errors, vec!["a", "b"]);
    assert!(spanned.iter_errors().all(|e| e.span == "unknown"));
}

#[test]
fn test_with_span_leaves_success_untouched() {
    let outcome: Outcome<i32, &str> = Outcome::success(4);
    assert_eq!(outcome.with_span(&Span::none()), Outcome::success(4));
}

#[test]
fn test_trace_failure_returns_self() {
    let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    assert_eq!(outcome.trace_failure("load"), Outcome::failure("boom"));

    let validation: Validation<i32, &str> = Validation::invalid_all(errors!["a", "b"]);
    assert_eq!(validation.clone().trace_failure("form"), validation);

    let valid: Validation<i32, &str> = Validation::valid(1);
    assert_eq!(valid.trace_failure("form"), Validation::valid(1));
}

#[test]
fn test_trace_failure_emits_one_event_per_failure() {
    let (_, messages) = capture(|| {
        let _ = Outcome::<i32, &str>::failure("boom").trace_failure("load");
        let _ = Validation::<i32, &str>::invalid_all(errors!["a", "b"]).trace_failure("form");
    });
    assert_eq!(messages, vec!["outcome failed".to_string(), "validation failed".to_string()]);
}

#[test]
fn test_trace_failure_is_silent_on_success() {
    let (_, messages) = capture(|| {
        let _ = Outcome::<i32, &str>::success(1).trace_failure("load");
        let _ = Validation::<i32, &str>::valid(1).trace_failure("form");
    });
    assert!(messages.is_empty());
}

#[test]
fn test_catching_logs_only_propagated_faults() {
    let (caught, messages) = capture(|| Outcome::<u16, ParseIntError>::catching(|| Ok("8o".parse::<u16>()?)));
    assert!(caught.unwrap().is_failure());
    assert!(messages.is_empty());

    let (escaped, messages) =
        capture(|| Outcome::<u16, ParseIntError>::catching(|| Err("socket closed".into())));
    assert_eq!(escaped.unwrap_err().to_string(), "socket closed");
    assert_eq!(messages, vec!["propagating fault outside the caught category".to_string()]);
}
