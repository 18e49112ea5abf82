//! 測定結果とJSONレポート
//!
//! 統計処理や表の整形は行わず、生の測定値と環境情報だけを保持する

use super::alloc::{AllocationDelta, COUNTING_ENABLED};
use crate::core::{BenchError, BenchResult, CaseArg, Category};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// (ケース, 引数) 1組分の測定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub case: String,
    pub category: Category,
    pub argument: CaseArg,
    pub warmup_iterations: u64,
    pub measured_iterations: u64,
    pub total_elapsed_ns: u64,
    pub mean_ns: f64,
    pub allocated_bytes_per_op: u64,
    pub allocations_per_op: f64,
    pub result: String,
}

impl Measurement {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        case: &str,
        category: Category,
        argument: CaseArg,
        warmup_iterations: u64,
        measured_iterations: u64,
        elapsed: Duration,
        allocations: AllocationDelta,
        result: String,
    ) -> Self {
        let total_elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let mean_ns = if measured_iterations > 0 {
            total_elapsed_ns as f64 / measured_iterations as f64
        } else {
            0.0
        };

        Self {
            case: case.to_string(),
            category,
            argument,
            warmup_iterations,
            measured_iterations,
            total_elapsed_ns,
            mean_ns,
            allocated_bytes_per_op: allocations.bytes_per(measured_iterations),
            allocations_per_op: allocations.count_per(measured_iterations),
            result,
        }
    }

    /// 1回あたりの平均時間
    pub fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean_ns.round() as u64)
    }
}

/// 測定環境の情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub logical_cpus: usize,
    pub os: String,
    pub arch: String,
    pub crate_version: String,
    /// falseなら確保量の列は測定されていない
    pub allocation_counting: bool,
}

impl EnvironmentInfo {
    pub fn detect() -> Self {
        Self {
            logical_cpus: num_cpus::get(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            allocation_counting: COUNTING_ENABLED,
        }
    }
}

/// スイート全体の測定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub timestamp: String,
    pub environment: EnvironmentInfo,
    pub measurements: Vec<Measurement>,
}

impl SuiteReport {
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            environment: EnvironmentInfo::detect(),
            measurements,
        }
    }

    pub fn find(&self, case: &str, argument: &CaseArg) -> Option<&Measurement> {
        self.measurements
            .iter()
            .find(|m| m.case == case && &m.argument == argument)
    }

    pub fn to_json(&self) -> BenchResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BenchError::export("<memory>", e.into()))
    }

    /// JSON形式でのレポート出力
    pub fn export_json(&self, path: &Path) -> BenchResult<()> {
        let display = path.display().to_string();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BenchError::export(display.clone(), e.into()))?;
        std::fs::write(path, json).map_err(|e| BenchError::export(display, e.into()))?;
        Ok(())
    }
}
