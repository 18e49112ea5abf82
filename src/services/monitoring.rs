// 進捗監視の具象実装

use crate::core::{CaseArg, RunReporter};
use crate::measurement::Measurement;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleRunReporter {
    quiet: bool,
}

impl ConsoleRunReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    /// 測定結果1行分の表示文字列
    pub fn format_measurement(measurement: &Measurement) -> String {
        format!(
            "{:<24} {:>8} {:>14.1} ns/op {:>12} B/op {:>10.1} allocs/op  {}",
            measurement.case,
            measurement.argument.to_string(),
            measurement.mean_ns,
            measurement.allocated_bytes_per_op,
            measurement.allocations_per_op,
            measurement.result,
        )
    }
}

impl RunReporter for ConsoleRunReporter {
    fn report_started(&self, total_runs: usize) {
        if !self.quiet {
            println!("🚀 Starting {total_runs} measurements...");
        }
    }

    fn report_measurement(&self, completed: usize, total: usize, measurement: &Measurement) {
        if !self.quiet {
            println!(
                "📊 [{completed}/{total}] {}",
                Self::format_measurement(measurement)
            );
        }
    }

    fn report_error(&self, case: &str, argument: &CaseArg, error: &str) {
        if !self.quiet {
            eprintln!("❌ Error measuring {case}({argument}): {error}");
        }
    }

    fn report_completed(&self, total_measured: usize) {
        if !self.quiet {
            println!("✅ Completed! Measured: {total_measured}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpRunReporter;

impl NoOpRunReporter {
    pub fn new() -> Self {
        Self
    }
}

impl RunReporter for NoOpRunReporter {
    fn report_started(&self, _total_runs: usize) {}

    fn report_measurement(&self, _completed: usize, _total: usize, _measurement: &Measurement) {}

    fn report_error(&self, _case: &str, _argument: &CaseArg, _error: &str) {}

    fn report_completed(&self, _total_measured: usize) {}
}
