// ケース本体の振る舞いテスト
use construct_bench::cases::{
    dispatch, fault, object_size, sequence, task, wrapper, DISPATCH_TABLE, FILTER_THRESHOLD,
};
use construct_bench::{BenchError, CaseArg, CaseValue, Category, Suite};

const FILTERED_LEN: usize = 499_999;

#[test]
fn test_object_sizes_hold_initial_value() {
    let suite = Suite::new().unwrap();

    let flat = suite.invoke("FlatObject", &CaseArg::Int(3)).unwrap();
    let nested = suite.invoke("NestedObject", &CaseArg::Int(3)).unwrap();

    assert_eq!(flat.field_value(), Some(3));
    assert_eq!(nested.field_value(), Some(3));
    assert_eq!(object_size::nested_object(3).inner().value(), 3);
}

#[test]
fn test_division_variants_agree() {
    let suite = Suite::new().unwrap();

    for case in ["UseExceptions", "UseSpecificExceptions", "DontUseExceptions"] {
        assert_eq!(suite.invoke(case, &CaseArg::Int(3)).unwrap(), CaseValue::Int(5));
        assert_eq!(suite.invoke(case, &CaseArg::Int(0)).unwrap(), CaseValue::Int(0));
    }
}

#[test]
fn test_division_fault_does_not_leak() {
    fault::install_quiet_fault_hook();

    // 繰り返し発生させても呼び出し側には伝播しない
    for _ in 0..10 {
        assert_eq!(fault::use_exceptions(0), 0);
        assert_eq!(fault::use_specific_exceptions(0), 0);
    }
    assert_eq!(fault::dont_use_exceptions(0), 0);
}

#[test]
fn test_task_cases_through_suite() {
    let suite = Suite::new().unwrap();

    for case in ["UseTask", "DontUseTask"] {
        assert_eq!(
            suite.invoke(case, &CaseArg::Int(3)).unwrap().as_float(),
            Some(5.0)
        );
        assert_eq!(
            suite.invoke(case, &CaseArg::Int(1)).unwrap().as_float(),
            Some(15.0)
        );
    }
}

#[tokio::test]
async fn test_use_task_matches_sync_variant() {
    for init in [1, 3, 7] {
        assert_eq!(task::use_task(init).await, task::dont_use_task(init));
    }
}

#[test]
fn test_wrapper_cases_filtered_length() {
    let suite = Suite::new().unwrap();

    for case in ["IntWrapper", "ListOfInts"] {
        let value = suite.invoke(case, &CaseArg::Int(3)).unwrap();
        assert_eq!(value.sequence_len(), Some(FILTERED_LEN));
    }

    // 閾値を超える種は1件増える
    assert_eq!(wrapper::int_wrapper(FILTER_THRESHOLD + 1).len(), FILTERED_LEN + 1);
    assert_eq!(wrapper::list_of_ints(FILTER_THRESHOLD + 1).len(), FILTERED_LEN + 1);
    assert_eq!(wrapper::list_of_ints(FILTER_THRESHOLD).len(), FILTERED_LEN);
}

#[test]
fn test_wrapper_and_ints_hold_same_values() {
    let wrapped: Vec<i32> = wrapper::int_wrapper(-5)
        .iter()
        .map(|item| item.int_val)
        .collect();

    assert_eq!(wrapped, wrapper::list_of_ints(-5));
}

#[test]
fn test_lazy_and_eager_sequences_agree() {
    let suite = Suite::new().unwrap();

    let lazy = suite
        .invoke("GetIntsFromIEnumerable", &CaseArg::Int(-1))
        .unwrap();
    let eager = suite.invoke("GetIntsFromList", &CaseArg::Int(-1)).unwrap();

    assert_eq!(lazy.to_ints(), eager.to_ints());
    assert_eq!(lazy.sequence_len(), Some(FILTERED_LEN));

    for init in [0, 750_000] {
        assert_eq!(
            sequence::get_ints_from_ienumerable(init),
            sequence::get_ints_from_list(init)
        );
    }
}

#[test]
fn test_lazy_sequence_is_single_pass() {
    let mut ints = sequence::get_ints(42);

    assert_eq!(ints.next(), Some(42));
    assert_eq!(ints.next(), Some(0));
    assert_eq!(ints.by_ref().count(), 999_999);
    assert_eq!(ints.next(), None);
}

#[test]
fn test_dispatch_literals() {
    let suite = Suite::new().unwrap();
    let expectations = [("A", 2), ("Z", 1452), ("AI", 630)];

    for case in suite.registry().by_category(Category::Dispatch) {
        for (key, expected) in expectations {
            assert_eq!(
                suite.invoke_case(case, &CaseArg::key(key)).unwrap(),
                CaseValue::Int(expected),
                "{} with {key}",
                case.name()
            );
        }
        assert_eq!(
            suite
                .invoke_case(case, &CaseArg::key("unknown"))
                .unwrap(),
            CaseValue::Int(10870)
        );
    }
}

#[test]
fn test_dispatch_variants_agree_on_every_key() {
    let keys = DISPATCH_TABLE
        .iter()
        .map(|(key, _)| *key)
        .chain(["", "a", "AJ", "unknown"]);

    for key in keys {
        let expected = dispatch::get_switch_statement(key);
        assert_eq!(dispatch::get_switch_expression(key), expected, "key {key:?}");
        assert_eq!(dispatch::get_if_then_else(key), expected, "key {key:?}");
        assert_eq!(dispatch::get_dispatch_table(key), expected, "key {key:?}");
    }
}

#[test]
fn test_repeated_invocation_returns_same_value() {
    let suite = Suite::new().unwrap();

    for case in suite.registry().cases() {
        for argument in case.arguments() {
            let first = suite.invoke_case(case, argument).unwrap();
            let second = suite.invoke_case(case, argument).unwrap();
            assert_eq!(first, second, "{}({argument})", case.name());
        }
    }
}

#[test]
fn test_usage_errors_are_surfaced() {
    let suite = Suite::new().unwrap();

    assert!(matches!(
        suite.invoke("Missing", &CaseArg::Int(1)),
        Err(BenchError::UnknownCase { .. })
    ));
    assert!(matches!(
        suite.invoke("UseTask", &CaseArg::Int(0)),
        Err(BenchError::UndeclaredArgument { .. })
    ));
    assert!(matches!(
        suite.invoke_unchecked("FlatObject", &CaseArg::key("A")),
        Err(BenchError::ArgumentKindMismatch { .. })
    ));
}
