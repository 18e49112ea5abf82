use crate::core::Category;
use crate::services::RunPreset;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "construct_bench")]
#[command(about = "Micro-benchmarks comparing paired language constructs")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all cases with their declared arguments
    List {
        /// Only list cases of this category
        #[arg(short, long, value_enum)]
        category: Option<Category>,
    },

    /// Invoke a single case once and print its result
    Invoke {
        /// Case name (e.g. UseTask)
        case: String,

        /// Argument literal (integer or string key)
        #[arg(allow_hyphen_values = true)]
        argument: String,

        /// Allow arguments that are not declared for the case
        #[arg(long)]
        allow_undeclared: bool,
    },

    /// Measure elapsed time and allocated bytes for the selected cases
    Run {
        /// Case names to measure (repeatable, default: all)
        #[arg(short = 'c', long = "case")]
        cases: Vec<String>,

        /// Only measure cases of this category
        #[arg(long, value_enum)]
        category: Option<Category>,

        /// Configuration preset
        #[arg(short, long, value_enum, default_value_t = RunPreset::Default)]
        preset: RunPreset,

        /// Override the number of warm-up invocations
        #[arg(long)]
        warmup: Option<usize>,

        /// Override the number of measured invocations
        #[arg(short = 'n', long)]
        iterations: Option<usize>,

        /// Write the raw measurements as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress per-measurement console output
        #[arg(short, long)]
        quiet: bool,
    },
}
