//! Builder stage, configuration and error propagation tests

use std::thread;

use switch_expr::{
    ConfigurationError, Evaluator, MatchExpression, Switch, SwitchConfig, SwitchError,
};

#[test]
fn started_without_value_reports_missing_value() {
    env_logger::try_init().ok(); // Ignore error if already initialized

    let mut evaluator = switch_expr::start().default_case(|x: &u32| x + 1).build();

    assert_eq!(evaluator.resolve(), Err(SwitchError::MissingTestValue));

    evaluator.set_value(9);
    assert_eq!(evaluator.resolve(), Ok(10));
}

#[test]
fn create_sets_the_test_value() {
    let evaluator = switch_expr::create("hello").default_case(|s| s.len()).build();

    assert_eq!(evaluator.value(), Some(&"hello"));
    assert_eq!(evaluator.resolve(), Ok(5));
}

#[test]
fn user_errors_pass_through_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Rejected(i64);

    let evaluator: Evaluator<i64, Result<i64, Rejected>> = Switch::start()
        .default_case(|x: &i64| Ok(*x))
        .predicate(|x| *x < 0, |x| Err(Rejected(*x)))
        .build();

    assert_eq!(evaluator.resolve_with(3), Ok(3));
    assert_eq!(evaluator.resolve_with(-2), Err(Rejected(-2)));
}

#[test]
#[should_panic(expected = "case function failed")]
fn user_panics_propagate() {
    let evaluator = Switch::start()
        .default_case(|_: &i32| -> i32 { panic!("case function failed") })
        .build();

    let _ = evaluator.resolve_with(1);
}

#[test]
#[should_panic(expected = "predicate failed")]
fn predicate_panics_propagate() {
    let evaluator = Switch::start()
        .default_case(|_: &i32| "default")
        .single(0, |_| "zero")
        .predicate(|_| panic!("predicate failed"), |_| "unreachable")
        .build();

    assert_eq!(evaluator.resolve_with(0), "zero");
    let _ = evaluator.resolve_with(1);
}

#[test]
fn configured_builder_applies_debug_flag() {
    env_logger::try_init().ok();

    let config = SwitchConfig::default().debug().capacity(4, 2);
    let evaluator = Switch::create_configured(2, &config)
        .unwrap_or_else(|e| panic!("valid config rejected: {e}"))
        .default_case(|_| "many")
        .single(1, |_| "one")
        .single(2, |_| "two")
        .build();

    assert!(evaluator.is_debug_enabled());
    assert_eq!(evaluator.resolve(), Ok("two"));
}

#[test]
fn debug_flag_is_available_in_every_stage() {
    let evaluator = Switch::start().debug().default_case(|_: &i32| ()).build();
    assert!(evaluator.is_debug_enabled());

    let evaluator = Switch::start().default_case(|_: &i32| ()).debug().build();
    assert!(evaluator.is_debug_enabled());

    let plain = Switch::start().default_case(|_: &i32| ()).build();
    assert!(!plain.is_debug_enabled());
}

#[test]
fn invalid_config_is_rejected() {
    let config = SwitchConfig::default().capacity(usize::MAX, 0);

    let result = Switch::configured::<i32, i32>(&config);
    assert!(result.as_ref().is_err_and(SwitchError::is_configuration));

    match result {
        Err(SwitchError::Configuration(ConfigurationError::InvalidCapacity(message))) => {
            assert!(message.contains("single_capacity"));
        }
        other => panic!("expected capacity error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn single_keys_keep_registration_order() {
    let evaluator = Switch::start()
        .default_case(|_| 0)
        .single('c', |_| 3)
        .single('a', |_| 1)
        .single('b', |_| 2)
        .single('c', |_| 30)
        .build();

    assert_eq!(evaluator.single_keys().copied().collect::<String>(), "cab");
    assert_eq!(evaluator.resolve_with('c'), 30);
}

#[test]
fn evaluator_converts_into_runtime_checked_expression() {
    let evaluator = Switch::create(5)
        .default_case(|_| "other")
        .single(1, |_| "one")
        .predicate(|x| *x > 10, |_| "big")
        .build();

    let mut expression: MatchExpression<i32, &str> = evaluator.into_expression();
    assert!(expression.has_default());
    assert_eq!(expression.resolve(&1), Ok("one"));
    assert_eq!(expression.resolve(&20), Ok("big"));
    assert_eq!(expression.resolve(&5), Ok("other"));

    expression.predicate(|x| *x == 5, |_| "five");
    assert_eq!(expression.resolve(&5), Ok("five"));
}

#[test]
fn shared_evaluator_resolves_from_many_threads() {
    let evaluator = Switch::start()
        .default_case(|x: &u64| x * 2)
        .single(0, |_| 100)
        .build();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|n| {
                let evaluator = &evaluator;
                scope.spawn(move || evaluator.resolve_with(n))
            })
            .collect();
        let results: Vec<u64> = handles
            .into_iter()
            .map(|handle| handle.join().expect("resolver thread panicked"))
            .collect();
        assert_eq!(results, vec![100, 2, 4, 6]);
    });
}

#[test]
fn cloned_evaluator_shares_cases() {
    let evaluator = Switch::create(1)
        .default_case(|_| "other")
        .single(1, |_| "one")
        .build();
    let copy = evaluator.clone().with_value(2);

    assert_eq!(evaluator.resolve(), Ok("one"));
    assert_eq!(copy.resolve(), Ok("other"));
    assert_eq!(format!("{copy:?}"), format!("{:?}", copy.clone()));
}
