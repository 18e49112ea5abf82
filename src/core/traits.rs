// 測定ランナーのトレイト定義

use super::types::CaseArg;
use crate::measurement::Measurement;
use mockall::automock;

/// 測定進捗報告の抽象化トレイト
#[automock]
pub trait RunReporter: Send + Sync {
    /// 測定開始時の報告
    fn report_started(&self, total_runs: usize);

    /// (ケース, 引数) 1組の測定完了の報告
    fn report_measurement(&self, completed: usize, total: usize, measurement: &Measurement);

    /// エラー発生時の報告
    fn report_error(&self, case: &str, argument: &CaseArg, error: &str);

    /// 測定完了時の報告
    fn report_completed(&self, total_measured: usize);
}

// RunReporter for Box<dyn RunReporter>
impl RunReporter for Box<dyn RunReporter> {
    fn report_started(&self, total_runs: usize) {
        self.as_ref().report_started(total_runs)
    }

    fn report_measurement(&self, completed: usize, total: usize, measurement: &Measurement) {
        self.as_ref().report_measurement(completed, total, measurement)
    }

    fn report_error(&self, case: &str, argument: &CaseArg, error: &str) {
        self.as_ref().report_error(case, argument, error)
    }

    fn report_completed(&self, total_measured: usize) {
        self.as_ref().report_completed(total_measured)
    }
}
