use anyhow::Result;
use clap::Parser;
use construct_bench::cli::{
    execute_invoke, execute_list, execute_run, Cli, Commands, RunCommandConfig,
};
use construct_bench::BenchError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::List { category } => execute_list(category),
        Commands::Invoke {
            case,
            argument,
            allow_undeclared,
        } => execute_invoke(case, argument, allow_undeclared),
        Commands::Run {
            cases,
            category,
            preset,
            warmup,
            iterations,
            output,
            quiet,
        } => execute_run(RunCommandConfig {
            cases,
            category,
            preset,
            warmup,
            iterations,
            output,
            quiet,
        }),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            // 誤った呼び出しはclapと同じ終了コード2
            let usage = error
                .downcast_ref::<BenchError>()
                .is_some_and(BenchError::is_usage_error);
            if usage {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
