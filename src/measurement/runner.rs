//! 測定ランナー
//!
//! (ケース, 引数) の組ごとにウォームアップ + N回の計測を行い、
//! 経過時間と1回あたりの確保量を記録する

use super::alloc::{AllocationSnapshot, COUNTING_ENABLED};
use super::report::{Measurement, SuiteReport};
use crate::core::{BenchError, BenchResult, CaseArg, RunReporter};
use crate::registry::{CaseDefinition, Suite};
use crate::services::RunConfig;
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct MeasurementRunner<R: RunReporter> {
    suite: Suite,
    config: RunConfig,
    reporter: R,
}

impl<R: RunReporter> MeasurementRunner<R> {
    /// 設定を検証してランナーを作成
    pub fn new(suite: Suite, config: RunConfig, reporter: R) -> BenchResult<Self> {
        config.validate()?;
        for name in config.case_filter() {
            suite.registry().find(name)?;
        }

        Ok(Self {
            suite,
            config,
            reporter,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn suite(&self) -> &Suite {
        &self.suite
    }

    /// 設定で選択された全ての (ケース, 引数) を測定する
    pub fn run(&self) -> BenchResult<SuiteReport> {
        let runs: Vec<(&CaseDefinition, &CaseArg)> = self
            .suite
            .registry()
            .cases()
            .iter()
            .filter(|case| self.config.selects(case))
            .flat_map(|case| case.arguments().iter().map(move |arg| (case, arg)))
            .collect();

        if runs.is_empty() {
            return Err(BenchError::configuration("測定対象のケースがありません"));
        }

        let total = runs.len();
        info!(
            total,
            preset = self.config.preset().name(),
            warmup = self.config.warmup_iterations(),
            measured = self.config.measured_iterations(),
            "starting measurement run"
        );
        if !COUNTING_ENABLED {
            warn!("count-allocations feature is disabled, allocation columns will be zero");
        }
        self.reporter.report_started(total);

        let mut measurements = Vec::with_capacity(total);
        for (index, (case, argument)) in runs.into_iter().enumerate() {
            let measurement = match self.measure(case, argument) {
                Ok(measurement) => measurement,
                Err(error) => {
                    self.reporter
                        .report_error(case.name(), argument, &error.to_string());
                    return Err(error);
                }
            };
            self.reporter
                .report_measurement(index + 1, total, &measurement);
            measurements.push(measurement);
        }

        self.reporter.report_completed(measurements.len());
        Ok(SuiteReport::new(measurements))
    }

    /// 1組分の測定
    ///
    /// 全てのウォームアップ結果は最初の結果と等しくなければならない
    pub fn measure(&self, case: &CaseDefinition, argument: &CaseArg) -> BenchResult<Measurement> {
        let warmup = self.config.warmup_iterations();
        let measured = self.config.measured_iterations();

        let reference = self.suite.invoke_case(case, argument)?;
        for _ in 1..warmup {
            let value = self.suite.invoke_case(case, argument)?;
            if value != reference {
                return Err(BenchError::inconsistent_result(
                    case.name(),
                    argument,
                    reference.summary(),
                    value.summary(),
                ));
            }
        }
        let result = reference.summary();
        drop(reference);
        debug!(case = case.name(), %argument, warmup, "warmup finished");

        let snapshot = AllocationSnapshot::current();
        let start = Instant::now();
        for _ in 0..measured {
            black_box(self.suite.invoke_case(case, black_box(argument))?);
        }
        let elapsed = start.elapsed();
        let allocations = snapshot.elapsed();

        let measurement = Measurement::new(
            case.name(),
            case.category(),
            argument.clone(),
            warmup as u64,
            measured as u64,
            elapsed,
            allocations,
            result,
        );
        info!(
            case = case.name(),
            %argument,
            mean_ns = measurement.mean_ns,
            bytes_per_op = measurement.allocated_bytes_per_op,
            "measured"
        );
        Ok(measurement)
    }
}
