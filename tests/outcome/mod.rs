use outcome_rail::maybe::Maybe;
use outcome_rail::outcome::{Fault, Outcome};
use std::cell::Cell;
use std::fmt;
use std::num::ParseIntError;

#[test]
fn fold_calls_exactly_one_branch() {
    let ok: Outcome<i32, &str> = Outcome::success(2);
    assert_eq!(ok.fold(|x| x.to_string(), |e| e.to_uppercase()), "2");

    let err: Outcome<i32, &str> = Outcome::failure("boom");
    assert_eq!(err.fold(|x| x.to_string(), |e| e.to_uppercase()), "BOOM");
}

#[test]
fn and_then_on_failure_does_not_invoke_function() {
    let calls = Cell::new(0);
    let failed: Outcome<i32, &str> = Outcome::failure("e");

    let chained = failed.and_then(|x| {
        calls.set(calls.get() + 1);
        Outcome::success(x + 1)
    });

    assert_eq!(chained, Outcome::failure("e"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_stops_at_first_failure() {
    let result = Outcome::<i32, String>::success(1)
        .and_then(|x| Outcome::failure(format!("step two rejected {x}")))
        .and_then(|x: i32| Outcome::<i32, String>::failure(format!("step three rejected {x}")));

    assert_eq!(result, Outcome::failure("step two rejected 1".to_string()));
}

#[test]
fn map_err_and_or_else_touch_only_failures() {
    let ok: Outcome<i32, &str> = Outcome::success(1);
    assert_eq!(ok.map_err(|e| e.len()), Outcome::success(1));
    assert_eq!(ok.or_else(|_| Outcome::<i32, ()>::success(0)), Outcome::success(1));

    let err: Outcome<i32, &str> = Outcome::failure("four");
    assert_eq!(err.map_err(|e| e.len()), Outcome::failure(4));
    assert_eq!(err.or_else(|e| Outcome::<i32, ()>::success(e.len() as i32)), Outcome::success(4));
    assert_eq!(err.or_else(|_| Outcome::<i32, u8>::failure(9)), Outcome::failure(9));
}

#[test]
fn predicates_and_accessors() {
    let ok: Outcome<i32, &str> = Outcome::success(3);
    let err: Outcome<i32, &str> = Outcome::failure("x");

    assert!(ok.is_success() && !ok.is_failure());
    assert!(err.is_failure() && !err.is_success());
    assert_eq!(ok.unwrap_or(0), 3);
    assert_eq!(err.unwrap_or(0), 0);
    assert_eq!(err.unwrap_or_else(|e| e.len() as i32), 1);
    assert_eq!(ok.into_result(), Ok(3));
    assert_eq!(err.into_result(), Err("x"));
    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![3]);
    assert_eq!(err.iter().count(), 0);
}

#[test]
fn as_mut_allows_in_place_edits() {
    let mut outcome: Outcome<Vec<i32>, &str> = Outcome::success(vec![1]);
    if let Some(values) = outcome.as_mut().success_value().into_option() {
        values.push(2);
    }
    assert_eq!(outcome, Outcome::success(vec![1, 2]));
}

#[test]
fn success_and_failure_values_discard_the_other_side() {
    assert_eq!(Outcome::<i32, &str>::success(1).success_value(), Maybe::present(1));
    assert_eq!(Outcome::<i32, &str>::failure("e").success_value(), Maybe::absent());
    assert_eq!(Outcome::<i32, &str>::failure("e").failure_value(), Maybe::present("e"));
}

#[test]
fn debug_renders_case_name() {
    assert_eq!(format!("{:?}", Outcome::<i32, &str>::success(1)), "Success(1)");
    assert_eq!(format!("{:?}", Outcome::<i32, &str>::failure("e")), r#"Failure("e")"#);
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value: \"disk full\"")]
fn unwrap_on_failure_carries_the_payload() {
    let outcome: Outcome<i32, &str> = Outcome::failure("disk full");
    let _ = outcome.unwrap();
}

#[test]
#[should_panic(expected = "loading settings: \"missing file\"")]
fn expect_on_failure_prefixes_message() {
    let outcome: Outcome<i32, &str> = Outcome::failure("missing file");
    let _ = outcome.expect("loading settings");
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap_failure()` on a `Success` value: 7")]
fn unwrap_failure_on_success_carries_the_value() {
    let outcome: Outcome<i32, &str> = Outcome::success(7);
    let _ = outcome.unwrap_failure();
}

#[derive(Debug, PartialEq)]
struct Timeout;

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out")
    }
}

impl std::error::Error for Timeout {}

#[test]
fn catching_converts_the_selected_fault_category() {
    let parsed = Outcome::<u16, ParseIntError>::catching(|| Ok("8080".parse::<u16>()?)).unwrap();
    assert_eq!(parsed, Outcome::success(8080));

    let rejected = Outcome::<u16, ParseIntError>::catching(|| Ok("80a".parse::<u16>()?)).unwrap();
    assert!(rejected.is_failure());

    let timed_out = Outcome::<(), Timeout>::catching(|| Err(Box::new(Timeout) as Fault)).unwrap();
    assert_eq!(timed_out, Outcome::failure(Timeout));
}

#[test]
fn catching_propagates_other_fault_categories() {
    let escaped = Outcome::<u16, Timeout>::catching(|| Ok("80a".parse::<u16>()?));
    let fault = escaped.unwrap_err();
    assert!(fault.downcast_ref::<ParseIntError>().is_some());
}

#[cfg(feature = "std")]
mod panics {
    use outcome_rail::outcome::Outcome;

    #[test]
    fn catch_panic_captures_string_messages() {
        let literal = Outcome::catch_panic(|| -> i32 { panic!("static message") });
        assert_eq!(literal.unwrap_failure().as_str(), "static message");

        let code = 7;
        let formatted = Outcome::catch_panic(move || -> i32 { panic!("code {code}") });
        assert_eq!(formatted.unwrap_failure().into_string(), "code 7");

        assert_eq!(Outcome::catch_panic(|| 5), Outcome::success(5));
    }

    #[test]
    #[should_panic]
    fn catch_panic_resumes_non_string_payloads() {
        let _ = Outcome::catch_panic(|| -> i32 { std::panic::panic_any(42_u8) });
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_keeps_case() {
    let failure: Outcome<i32, String> = Outcome::failure("bad".into());
    let json = serde_json::to_string(&failure).unwrap();
    assert_eq!(json, r#"{"Failure":"bad"}"#);
    let back: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, failure);
}
