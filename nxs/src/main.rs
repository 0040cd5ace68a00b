// nxs/src/main.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use nxs_common::config::Config;
use nxs_common::error::Result;
use nxs_common::model::SyncReport;
use nxs_core::SyncEngine;
use nxs_net::HttpTransport;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::CliArgs;

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("NXS_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

async fn run(cli_args: &CliArgs) -> Result<SyncReport> {
    let config = Config::load(cli_args.repository.overrides())?;
    let transport = HttpTransport::from_config(&config)?;
    let engine = SyncEngine::new(transport, config);
    cli_args.command.run(&engine).await
}

fn print_report(report: &SyncReport) {
    if report.is_up_to_date() {
        println!("{}", "(up to date)".dimmed());
        return;
    }
    for change in report.changes() {
        println!("{} {}", "-".green().bold(), change);
    }
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose);

    match run(&cli_args).await {
        Ok(report) => {
            print_report(&report);
            debug!("Command completed successfully.");
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            process::exit(1);
        }
    }
}
