mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Probe diagnostics at info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("lineprobe", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    let status = match &cli.command {
        Command::Run {
            options,
            class,
            withhold_line_numbers,
            fault,
        } => commands::run::run(
            options.as_deref(),
            class,
            *withhold_line_numbers,
            fault,
            &cli.global,
        )?,
        Command::Errors => commands::errors::run(&cli.global)?,
    };

    std::process::exit(status)
}
