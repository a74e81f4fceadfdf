use clap::Parser;

use std::path::Path;
use std::process::ExitCode;

use faultcounter::cli::{self, Args};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter };
use tracing_bunyan_formatter::{JsonStorageLayer, BunyanFormattingLayer};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = parse_command_line_args();

    let _guard = init_tracing(&args.log_dir)?;

    let report = cli::run(&args);
    println!("{}", cli::render(&report, args.json)?);

    Ok(ExitCode::from(cli::exit_status(&report.verdict)))
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn init_tracing(log_dir: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "trace.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}
