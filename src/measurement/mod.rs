//! 測定モジュール
//!
//! ハーネス契約「名前付きのケースをN回呼び出し、経過時間と確保量を報告する」を実装する。
//! 統計的な解析はcriterionベンチ側に任せる

pub mod alloc;
pub mod report;
pub mod runner;

pub use alloc::{AllocationDelta, AllocationSnapshot, CountingAllocator, COUNTING_ENABLED};
pub use report::{EnvironmentInfo, Measurement, SuiteReport};
pub use runner::MeasurementRunner;
