// サービス層 - 測定設定と進捗報告

pub mod config;
pub mod monitoring;

pub use config::{RunConfig, RunPreset};
pub use monitoring::{ConsoleRunReporter, NoOpRunReporter};
