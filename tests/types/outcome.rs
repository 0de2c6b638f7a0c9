use outcome_rail::{Error, Errors, Outcome, Status};
use std::cell::Cell;

#[derive(Debug, PartialEq)]
struct ApiError {
    status: u16,
    body: String,
}

#[test]
fn then_short_circuits_on_failure() {
    let calls = Cell::new(0);
    let failed = Outcome::<i32>::from_errors(Errors::new("a").append(Errors::new("b")));

    let next: Outcome<String> = failed.clone().then(|v| {
        calls.set(calls.get() + 1);
        Outcome::success(v.to_string())
    });

    assert_eq!(calls.get(), 0);
    assert!(next.is_fail());
    assert_eq!(next.errors(), failed.errors());
}

#[test]
fn then_returns_stage_result_verbatim() {
    let stage = |v: i32| -> Outcome<i32> {
        if v > 0 {
            Outcome::success(v * 10)
        } else {
            Outcome::fail("not positive")
        }
    };

    assert_eq!(Outcome::success(4).then(stage), stage(4));
    assert_eq!(Outcome::success(-1).then(stage), stage(-1));
}

#[test]
fn then_chains_and_stops_at_first_failure() {
    let reached = Cell::new(Vec::new());
    let record = |tag: &'static str| {
        let mut seen = reached.take();
        seen.push(tag);
        reached.set(seen);
    };

    let result = Outcome::success(1)
        .then(|v| {
            record("f");
            Outcome::success(v + 1)
        })
        .then(|_: i32| {
            record("g");
            Outcome::<i32>::fail("g failed")
        })
        .then(|v| {
            record("h");
            Outcome::success(v)
        });

    assert_eq!(result.fail_message(), "g failed");
    assert_eq!(reached.take(), vec!["f", "g"]);
}

#[test]
fn and_then_matches_then() {
    let a = Outcome::success(2).and_then(|x| Outcome::success(x + 1));
    let b = Outcome::success(2).then(|x| Outcome::success(x + 1));
    assert_eq!(a, b);
}

#[test]
fn combine_preserves_left_to_right_order() {
    let combined = Status::fail("a") + Status::fail("b");
    assert_eq!(combined.errors(), [Error::new("a"), Error::new("b")]);
}

#[test]
fn combine_with_success_keeps_other_side() {
    assert_eq!(Status::fail("a") + Status::SUCCESS, Status::fail("a"));
    assert_eq!(Status::SUCCESS + Status::fail("b"), Status::fail("b"));
    assert!((Status::SUCCESS + Status::SUCCESS).is_success());
}

#[test]
fn combine_keeps_duplicates() {
    let combined = Status::fail("same").combine(Status::fail("same"));
    assert_eq!(combined.error_count(), 2);
}

#[test]
fn add_assign_and_sum_accumulate() {
    let mut status = Status::SUCCESS;
    status += Status::fail("one");
    status += Status::SUCCESS;
    status += Status::fail("two");
    assert_eq!(status.fail_message(), "one\ntwo");

    let summed: Status = vec![Status::fail("x"), Status::SUCCESS, Status::fail("y")].into_iter().sum();
    assert_eq!(summed.fail_message(), "x\ny");
}

#[test]
fn fail_as_retypes_with_equal_but_separate_errors() {
    let failed = Outcome::<i32>::from_errors(Errors::new("p").append(Errors::new("q")));

    let once: Outcome<String> = failed.fail_as().unwrap();
    let twice: Outcome<String> = failed.fail_as().unwrap();

    assert!(once.is_fail());
    assert_eq!(once.errors(), failed.errors());
    assert_eq!(once, twice);
    assert_ne!(once.errors().as_ptr(), twice.errors().as_ptr());
}

#[test]
fn fail_as_on_success_is_none() {
    assert!(Outcome::success(1).fail_as::<u8>().is_none());
}

#[test]
fn conversions_build_expected_variants() {
    let from_error: Outcome<()> = Error::new("e").into();
    assert_eq!(from_error.errors(), [Error::new("e")]);

    let sequence = Errors::new("1").append(Errors::new("2"));
    let from_errors: Outcome<()> = sequence.clone().into();
    assert_eq!(from_errors.errors(), sequence.as_slice());

    let parse_error = "abc".parse::<i32>().unwrap_err();
    let from_std: Outcome<i32> = Outcome::from_std_error(&parse_error);
    assert_eq!(from_std.fail_message(), parse_error.to_string());
}

#[test]
fn map_and_map_errors() {
    assert_eq!(Outcome::success(3).map(|x| x * 2), Outcome::success(6));

    let failed = Outcome::<i32>::fail("x").map(|x| x * 2);
    assert_eq!(failed.fail_message(), "x");

    let renamed = Outcome::<()>::fail("x").map_errors(|e| Error::new(format!("io: {}", e)));
    assert_eq!(renamed.fail_message(), "io: x");
}

#[test]
fn or_else_only_runs_on_failure() {
    let recovered = Outcome::<i32>::fail("missing").or_else(|errors| {
        assert_eq!(errors.len(), 1);
        Outcome::success(0)
    });
    assert_eq!(recovered, Outcome::success(0));

    let untouched = Outcome::success(5).or_else(|_| Outcome::success(0));
    assert_eq!(untouched, Outcome::success(5));
}

#[test]
fn inspect_hooks_see_the_right_side() {
    let seen_value = Cell::new(None);
    let seen_errors = Cell::new(0);

    let _ = Outcome::success(9)
        .inspect(|v| seen_value.set(Some(*v)))
        .inspect_failure(|e| seen_errors.set(e.len()));
    assert_eq!(seen_value.get(), Some(9));
    assert_eq!(seen_errors.get(), 0);

    let _ = Outcome::<i32>::fail("f")
        .inspect(|_| seen_value.set(None))
        .inspect_failure(|e| seen_errors.set(e.len()));
    assert_eq!(seen_value.get(), Some(9));
    assert_eq!(seen_errors.get(), 1);
}

#[test]
fn unwrap_or_variants() {
    assert_eq!(Outcome::success(1).unwrap_or(0), 1);
    assert_eq!(Outcome::<i32>::fail("x").unwrap_or(0), 0);
    assert_eq!(Outcome::<usize>::fail("x").unwrap_or_else(|errors| errors.len()), 1);
}

#[test]
fn unwrap_or_raise_on_success_skips_builder() {
    let calls = Cell::new(0);
    let value = Outcome::success("ok").unwrap_or_raise(|message| {
        calls.set(calls.get() + 1);
        ApiError { status: 500, body: message }
    });

    assert_eq!(value, Ok("ok"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn unwrap_or_raise_builds_from_joined_message_once() {
    let calls = Cell::new(0);
    let failed = Outcome::<()>::from_errors(Errors::new("a").append(Errors::new("b")));

    let raised = failed.unwrap_or_raise(|message| {
        calls.set(calls.get() + 1);
        ApiError { status: 422, body: message }
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(raised, Err(ApiError { status: 422, body: "a\nb".to_string() }));
}

#[test]
fn unwrap_or_raise_errors_receives_full_sequence() {
    let calls = Cell::new(0);
    let failed = Outcome::<()>::from_errors(Errors::new("a").append(Errors::new("b")));

    let raised = failed.unwrap_or_raise_errors(|errors| {
        calls.set(calls.get() + 1);
        errors.messages().map(str::to_owned).collect::<Vec<_>>()
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(raised, Err(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn raised_failure_propagates_with_question_mark() {
    fn boundary(input: Outcome<u32>) -> Result<u32, Box<dyn std::error::Error>> {
        let value = input.into_result()?;
        Ok(value + 1)
    }

    assert_eq!(boundary(Outcome::success(1)).unwrap(), 2);
    let err = boundary(Outcome::fail("denied")).unwrap_err();
    assert_eq!(err.to_string(), "denied");
}

#[test]
fn result_round_trip_keeps_errors() {
    let failed = Outcome::<i32>::fail("x");
    let result: Result<i32, Errors> = failed.clone().into();
    let back: Outcome<i32> = result.into();
    assert_eq!(back, failed);
}

#[test]
fn collect_accumulates_every_error_in_order() {
    let items = vec![Outcome::fail("first"), Outcome::success(1), Outcome::fail("second")];
    let collected: Outcome<Vec<i32>> = items.into_iter().collect();

    assert_eq!(collected.fail_message(), "first\nsecond");

    let all_ok: Outcome<Vec<i32>> = (1..=3).map(Outcome::success).collect();
    assert_eq!(all_ok, Outcome::success(vec![1, 2, 3]));
}

#[test]
fn value_accessors() {
    let ok = Outcome::success(String::from("v"));
    assert_eq!(ok.value().map(String::as_str), Some("v"));
    assert_eq!(ok.clone().into_errors(), None);
    assert_eq!(ok.into_value(), Some(String::from("v")));

    let failed = Outcome::<String>::fail("e");
    assert_eq!(failed.value(), None);
    assert_eq!(failed.into_errors().map(|e| e.len()), Some(1));
}
