use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Command;

mod cli;
mod commands;
mod config;
mod errors;
mod hooks;
mod service;

fn main() {
    let cli = cli::Cli::parse();

    init_tracing(resolve_verbose(&cli));

    let config = match config::load(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {}", err);
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Some(Command::Run(args)) => commands::run_demo(&config, args),
        Some(Command::Call(args)) => commands::run_call(&config, &args.operation),
        None => commands::run_demo(&config, &cli::RunArgs::default()),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn resolve_verbose(cli: &cli::Cli) -> bool {
    match &cli.command {
        Some(Command::Run(args)) => cli.verbose || args.verbose,
        Some(Command::Call(args)) => cli.verbose || args.verbose,
        None => cli.verbose,
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
