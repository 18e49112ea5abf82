use crate::core::{Category, RunReporter};
use crate::measurement::{MeasurementRunner, SuiteReport};
use crate::registry::Suite;
use crate::services::{ConsoleRunReporter, NoOpRunReporter, RunConfig, RunPreset};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Configuration struct for run command to reduce argument count
#[derive(Debug, Clone, Default)]
pub struct RunCommandConfig {
    pub cases: Vec<String>,
    pub category: Option<Category>,
    pub preset: RunPreset,
    pub warmup: Option<usize>,
    pub iterations: Option<usize>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl RunCommandConfig {
    /// コマンド引数から測定設定を組み立てる
    pub fn to_run_config(&self) -> RunConfig {
        let mut config = RunConfig::from_preset(self.preset)
            .with_case_filter(self.cases.clone())
            .with_category(self.category);
        if let Some(warmup) = self.warmup {
            config = config.with_warmup_iterations(warmup);
        }
        if let Some(iterations) = self.iterations {
            config = config.with_measured_iterations(iterations);
        }
        config
    }
}

/// 測定を実行し、必要ならJSONレポートを書き出す
pub fn run_measurements<R: RunReporter>(
    config: &RunCommandConfig,
    reporter: R,
) -> Result<SuiteReport> {
    let suite = Suite::new()?;
    let runner = MeasurementRunner::new(suite, config.to_run_config(), reporter)?;
    let report = runner.run()?;

    if let Some(path) = &config.output {
        report
            .export_json(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(report)
}

/// Execute run command
pub fn execute_run(config: RunCommandConfig) -> Result<()> {
    let report = if config.quiet {
        run_measurements(&config, NoOpRunReporter::new())?
    } else {
        println!("🔬 {} preset: {}", config.preset.name(), config.preset.description());
        run_measurements(&config, ConsoleRunReporter::new())?
    };

    if let Some(path) = &config.output {
        println!("📄 詳細レポートを出力しました: {}", path.display());
    }
    if config.quiet {
        for measurement in &report.measurements {
            println!("{}", ConsoleRunReporter::format_measurement(measurement));
        }
    }
    Ok(())
}
