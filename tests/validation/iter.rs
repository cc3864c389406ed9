use outcome_rail::errors;
use outcome_rail::validation::Validation;

#[test]
fn iterators_over_errors_and_values_work() {
    let mut valid = Validation::<i32, &str>::valid(3);
    if let Some(value) = valid.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(valid.iter().next(), Some(&4));
    assert_eq!(valid.iter_errors().count(), 0);
    assert_eq!(valid.into_iter().collect::<Vec<_>>(), vec![4]);

    let validation: Validation<i32, &str> = Validation::invalid_all(errors!["x", "y"]);
    let collected: Vec<_> = validation.iter_errors().cloned().collect();
    assert_eq!(collected, vec!["x", "y"]);
    assert_eq!((&validation).into_iter().count(), 0);
}

#[test]
fn iter_errors_mut_edits_in_place() {
    let mut validation: Validation<i32, String> = Validation::invalid_all(errors!["a".to_string(), "b".to_string()]);
    for error in validation.iter_errors_mut() {
        error.push('!');
    }
    assert_eq!(validation.into_errors(), Some(errors!["a!".to_string(), "b!".to_string()]));

    let mut valid: Validation<i32, String> = Validation::valid(1);
    assert_eq!(valid.iter_errors_mut().count(), 0);
}

#[test]
fn collecting_results_into_validation_accumulates_errors() {
    let inputs = vec![Ok(1), Err("err1"), Ok(2), Err("err2")];
    let collected: Validation<Vec<i32>, &str> = inputs.into_iter().collect();

    assert_eq!(collected.into_errors(), Some(errors!["err1", "err2"]));
}

#[test]
fn collecting_validations_preserves_all_errors_in_order() {
    let items = vec![
        Validation::valid(10),
        Validation::invalid_all(errors!["bad", "worse"]),
        Validation::valid(11),
        Validation::invalid("worst"),
    ];

    let collected: Validation<Vec<i32>, &str> = items.into_iter().collect();
    assert_eq!(collected.into_errors(), Some(errors!["bad", "worse", "worst"]));
}

#[test]
fn collecting_all_valid_keeps_values() {
    let collected: Validation<Vec<i32>, &str> = (1..=3).map(Validation::valid).collect();
    assert_eq!(collected.into_value(), Some(vec![1, 2, 3]));
}

#[test]
fn collecting_into_custom_collection_type() {
    use smallvec::SmallVec;

    let inputs = vec![Ok(1), Err("err1"), Ok(2)];
    let collected: Validation<SmallVec<[i32; 4]>, &str> = inputs.into_iter().collect();

    assert!(collected.is_invalid());
    assert_eq!(collected.into_errors().unwrap().len(), 1);
}
