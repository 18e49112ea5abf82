// 測定ランナーとレポート出力の統合テスト
use construct_bench::cli::{run_measurements, RunCommandConfig};
use construct_bench::{
    BenchError, CaseArg, Category, MeasurementRunner, NoOpRunReporter, RunConfig, RunPreset,
    Suite, SuiteReport,
};
use std::fs;
use tempfile::TempDir;

fn quick(config: RunConfig) -> RunConfig {
    config
        .with_warmup_iterations(1)
        .with_measured_iterations(2)
}

#[test]
fn test_run_exceptions_category() {
    let config = quick(RunConfig::from_preset(RunPreset::Quick))
        .with_category(Some(Category::Exceptions));
    let runner = MeasurementRunner::new(Suite::new().unwrap(), config, NoOpRunReporter::new())
        .unwrap();

    let report = runner.run().unwrap();

    assert_eq!(report.measurements.len(), 6);
    assert!(report
        .measurements
        .iter()
        .all(|m| m.category == Category::Exceptions && m.measured_iterations == 2));
    for case in ["UseExceptions", "UseSpecificExceptions", "DontUseExceptions"] {
        assert_eq!(report.find(case, &CaseArg::Int(3)).unwrap().result, "Int(5)");
        assert_eq!(report.find(case, &CaseArg::Int(0)).unwrap().result, "Int(0)");
    }
}

#[test]
#[cfg(feature = "count-allocations")]
fn test_allocation_difference_between_flat_and_nested() {
    let config = quick(RunConfig::default()).with_category(Some(Category::ObjectSizes));
    let runner = MeasurementRunner::new(Suite::new().unwrap(), config, NoOpRunReporter::new())
        .unwrap();

    let report = runner.run().unwrap();
    let flat = report.find("FlatObject", &CaseArg::Int(3)).unwrap();
    let nested = report.find("NestedObject", &CaseArg::Int(3)).unwrap();

    assert_eq!(flat.allocated_bytes_per_op, 0);
    assert!(nested.allocated_bytes_per_op >= 4);
    assert!(nested.allocations_per_op >= 1.0);
}

#[test]
#[cfg(feature = "count-allocations")]
fn test_lazy_and_eager_both_materialize_and_filter() {
    let config = quick(RunConfig::default()).with_category(Some(Category::LazyVsList));
    let runner = MeasurementRunner::new(Suite::new().unwrap(), config, NoOpRunReporter::new())
        .unwrap();

    let report = runner.run().unwrap();
    let lazy = report
        .find("GetIntsFromIEnumerable", &CaseArg::Int(-1))
        .unwrap();
    let eager = report.find("GetIntsFromList", &CaseArg::Int(-1)).unwrap();

    // 1,000,001要素の実体化 + 499,999要素のフィルタ結果
    let minimum = ((1_000_001 + 499_999) * std::mem::size_of::<i32>()) as u64;
    assert!(lazy.allocated_bytes_per_op >= minimum);
    assert!(eager.allocated_bytes_per_op >= minimum);
    // 長さを知らないジェネレータは伸長しながら実体化する
    assert!(lazy.allocations_per_op > 2.0);
}

#[test]
#[cfg(feature = "count-allocations")]
fn test_async_case_adds_no_harness_allocation() {
    let config = quick(RunConfig::default()).with_category(Some(Category::TaskVsSync));
    let runner = MeasurementRunner::new(Suite::new().unwrap(), config, NoOpRunReporter::new())
        .unwrap();

    let report = runner.run().unwrap();

    for init in [1, 3] {
        let use_task = report.find("UseTask", &CaseArg::Int(init)).unwrap();
        let dont_use_task = report.find("DontUseTask", &CaseArg::Int(init)).unwrap();
        assert_eq!(use_task.allocated_bytes_per_op, 0);
        assert_eq!(dont_use_task.allocated_bytes_per_op, 0);
    }
}

#[test]
fn test_dispatch_run_records_every_declared_key() {
    let config = quick(RunConfig::default()).with_category(Some(Category::Dispatch));
    let runner = MeasurementRunner::new(Suite::new().unwrap(), config, NoOpRunReporter::new())
        .unwrap();

    let report = runner.run().unwrap();

    assert_eq!(report.measurements.len(), 12);
    assert_eq!(
        report
            .find("GetIfThenElse", &CaseArg::key("Z"))
            .unwrap()
            .result,
        "Int(1452)"
    );
}

#[test]
fn test_case_filter_and_category_without_overlap_is_rejected() {
    let config = quick(RunConfig::default())
        .with_case_filter(vec!["UseTask".to_string()])
        .with_category(Some(Category::Dispatch));
    let runner = MeasurementRunner::new(Suite::new().unwrap(), config, NoOpRunReporter::new())
        .unwrap();

    assert!(matches!(
        runner.run(),
        Err(BenchError::ConfigurationError { .. })
    ));
}

#[test]
fn test_unknown_case_filter_is_rejected() {
    let config = RunConfig::default().with_case_filter(vec!["Missing".to_string()]);
    let result = MeasurementRunner::new(Suite::new().unwrap(), config, NoOpRunReporter::new());

    assert!(matches!(result, Err(BenchError::UnknownCase { .. })));
}

#[test]
fn test_json_report_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("report.json");
    let command = RunCommandConfig {
        cases: vec!["FlatObject".to_string(), "GetSwitchExpression".to_string()],
        preset: RunPreset::Quick,
        output: Some(output.clone()),
        quiet: true,
        ..Default::default()
    };

    let report = run_measurements(&command, NoOpRunReporter::new()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let parsed: SuiteReport = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, report);
    assert_eq!(parsed.measurements.len(), 4);

    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["measurements"][0]["category"], "object-sizes");
    assert!(json["environment"]["logical_cpus"].as_u64().unwrap() >= 1);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let command = RunCommandConfig {
        cases: vec!["DontUseTask".to_string()],
        preset: RunPreset::Quick,
        output: Some(temp_dir.path().join("missing").join("report.json")),
        quiet: true,
        ..Default::default()
    };

    assert!(run_measurements(&command, NoOpRunReporter::new()).is_err());
}
