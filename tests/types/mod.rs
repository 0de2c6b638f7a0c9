use outcome_rail::{Error, Errors, Outcome, Status};

mod outcome;

#[test]
fn success_has_no_errors() {
    let outcome = Outcome::success("payload");

    assert!(outcome.is_success());
    assert!(!outcome.is_fail());
    assert!(outcome.errors().is_empty());
    assert_eq!(outcome.error_count(), 0);
}

#[test]
fn status_success_constant_is_payload_less_success() {
    assert!(Status::SUCCESS.is_success());
    assert_eq!(Status::SUCCESS, Outcome::success(()));
    assert_eq!(Status::SUCCESS.fail_message(), "");
}

#[test]
fn fail_from_text_holds_exactly_one_error() {
    let outcome = Outcome::<u8>::fail("m");

    assert!(outcome.is_fail());
    assert!(!outcome.is_success());
    assert_eq!(outcome.errors(), [Error::new("m")]);
}

#[test]
fn exactly_one_of_success_or_fail_holds() {
    let samples: Vec<Outcome<i32>> = vec![
        Outcome::success(0),
        Outcome::fail("a"),
        Outcome::from_errors(Errors::new("x").append(Errors::new("y"))),
    ];

    for outcome in samples {
        assert_ne!(outcome.is_success(), outcome.is_fail());
        assert_eq!(outcome.is_success(), outcome.errors().is_empty());
    }
}

#[test]
fn typed_outcome_views_as_status() {
    let failed = Outcome::<String>::fail("bad");
    let status = failed.to_status();

    assert_eq!(status.errors(), failed.errors());
    assert!(Outcome::success(5).into_status().is_success());
}

#[test]
fn outcome_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Error>();
    assert_send_sync::<Errors>();
    assert_send_sync::<Outcome<String>>();
    assert_send_sync::<Status>();
}
