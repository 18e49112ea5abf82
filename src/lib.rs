//! 言語構文ペアのマイクロベンチマークスイート
//!
//! 各ケースは独立した関数で、レジストリに登録されたリテラル引数で呼び出される。
//! 統計的な測定はcriterionベンチ（`benches/construct_comparison.rs`）、
//! 確保量つきの簡易測定は`measurement::MeasurementRunner`が担当する

pub mod cases;
pub mod cli;
pub mod core;
pub mod measurement;
pub mod registry;
pub mod services;

pub use crate::core::{ArgKind, BenchError, BenchResult, CaseArg, CaseValue, Category};
pub use measurement::{Measurement, MeasurementRunner, SuiteReport};
pub use registry::{CaseDefinition, CaseRegistry, Suite};
pub use services::{ConsoleRunReporter, NoOpRunReporter, RunConfig, RunPreset};

// 確保量の測定はこのアロケータ経由で行う
#[cfg(feature = "count-allocations")]
#[global_allocator]
static GLOBAL: measurement::CountingAllocator = measurement::CountingAllocator;
