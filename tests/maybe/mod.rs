use outcome_rail::maybe::{present_values, Maybe};
use std::cell::Cell;

#[test]
fn present_and_absent_fold_to_their_own_branch() {
    let present = Maybe::present(5);
    assert_eq!(present.fold(|x| x * 10, || -1), 50);

    let absent: Maybe<i32> = Maybe::absent();
    assert_eq!(absent.fold(|x| x * 10, || -1), -1);
}

#[test]
fn map_on_absent_does_not_invoke_function() {
    let calls = Cell::new(0);
    let absent: Maybe<i32> = Maybe::absent();

    let mapped = absent.map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });

    assert_eq!(mapped, Maybe::absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_and_and_then_chain_present_values() {
    let result = Maybe::present("42")
        .and_then(|raw| Maybe::from_option(raw.parse::<i32>().ok()))
        .map(|n| n + 1);
    assert_eq!(result, Maybe::present(43));

    let failed = Maybe::present("forty-two").and_then(|raw| Maybe::from_option(raw.parse::<i32>().ok()));
    assert!(failed.is_absent());
}

#[test]
fn filter_keeps_only_accepted_values() {
    assert_eq!(Maybe::present(10).filter(|x| *x > 5), Maybe::present(10));
    assert_eq!(Maybe::present(1).filter(|x| *x > 5), Maybe::absent());
    assert_eq!(Maybe::<i32>::absent().filter(|_| true), Maybe::absent());
}

#[test]
fn defaults_apply_only_when_absent() {
    assert_eq!(Maybe::present(3).unwrap_or(9), 3);
    assert_eq!(Maybe::<i32>::absent().unwrap_or(9), 9);
    assert_eq!(Maybe::<i32>::absent().unwrap_or_else(|| 7), 7);
    assert_eq!(Maybe::<String>::absent().unwrap_or_default(), "");
    assert_eq!(Maybe::<i32>::default(), Maybe::absent());
}

#[test]
fn or_and_or_else_pick_first_present() {
    assert_eq!(Maybe::present(1).or(Maybe::present(2)), Maybe::present(1));
    assert_eq!(Maybe::absent().or(Maybe::present(2)), Maybe::present(2));
    assert_eq!(Maybe::<i32>::absent().or_else(Maybe::absent), Maybe::absent());
}

#[test]
fn from_option_lifts_external_values() {
    assert_eq!(Maybe::from_option(Some('x')), Maybe::present('x'));
    assert_eq!(Maybe::<char>::from_option(None), Maybe::absent());
    assert_eq!(Maybe::present('y').into_option(), Some('y'));
}

#[test]
fn as_ref_and_as_mut_borrow_the_payload() {
    let mut maybe = Maybe::present(String::from("abc"));
    assert_eq!(maybe.as_ref().map(|s| s.len()), Maybe::present(3));

    if let Some(value) = maybe.as_mut().into_option() {
        value.push('d');
    }
    assert_eq!(maybe, Maybe::present(String::from("abcd")));
}

#[test]
fn flatten_removes_one_level() {
    assert_eq!(Maybe::present(Maybe::present(1)).flatten(), Maybe::present(1));
    assert_eq!(Maybe::present(Maybe::<i32>::absent()).flatten(), Maybe::absent());
    assert_eq!(Maybe::<Maybe<i32>>::absent().flatten(), Maybe::absent());
}

#[test]
fn iterating_yields_zero_or_one_element() {
    let present = Maybe::present(4);
    assert_eq!(present.iter().collect::<Vec<_>>(), vec![&4]);
    assert_eq!(present.into_iter().collect::<Vec<_>>(), vec![4]);

    let absent: Maybe<i32> = Maybe::absent();
    assert_eq!((&absent).into_iter().count(), 0);
}

#[test]
fn present_values_skips_absent_elements_in_order() {
    let items = vec![Maybe::absent(), Maybe::present(1), Maybe::absent(), Maybe::present(3)];
    let values: Vec<i32> = present_values(items).collect();
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn collecting_requires_every_element_present() {
    let all: Maybe<Vec<i32>> = [Maybe::present(1), Maybe::present(2)].into_iter().collect();
    assert_eq!(all, Maybe::present(vec![1, 2]));

    let gap: Maybe<Vec<i32>> = [Maybe::present(1), Maybe::absent()].into_iter().collect();
    assert_eq!(gap, Maybe::absent());
}

#[test]
fn debug_renders_case_name() {
    assert_eq!(format!("{:?}", Maybe::present(3)), "Present(3)");
    assert_eq!(format!("{:?}", Maybe::<i32>::absent()), "Absent");
}

#[test]
#[should_panic(expected = "called `Maybe::unwrap()` on an `Absent` value")]
fn unwrap_on_absent_is_a_misuse_fault() {
    let absent: Maybe<i32> = Maybe::absent();
    let _ = absent.unwrap();
}

#[test]
#[should_panic(expected = "config key must be set")]
fn expect_on_absent_panics_with_message() {
    let absent: Maybe<i32> = Maybe::absent();
    let _ = absent.expect("config key must be set");
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_case_names() {
    let present = serde_json::to_string(&Maybe::present(3)).unwrap();
    assert_eq!(present, r#"{"Present":3}"#);
    let absent = serde_json::to_string(&Maybe::<i32>::absent()).unwrap();
    assert_eq!(absent, r#""Absent""#);

    let back: Maybe<i32> = serde_json::from_str(&present).unwrap();
    assert_eq!(back, Maybe::present(3));
}
