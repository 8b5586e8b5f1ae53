use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "hookwrap", version, about = "Hook-bracketed proxy service demo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file (default: ./hookwrap.toml)
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Construct the service and run every operation once
    Run(RunArgs),
    /// Invoke a single operation
    Call(CallArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[arg(long)]
    pub field_a: Option<String>,

    #[arg(long)]
    pub field_b: Option<i64>,

    /// Write the observation trace as JSON lines
    #[arg(long)]
    pub trace_file: Option<std::path::PathBuf>,

    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CallArgs {
    #[command(subcommand)]
    pub operation: Operation,

    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// One string argument, returns an optional error
    A { arg: String },
    /// No arguments, returns a value and an optional error
    B,
    /// One integer argument, returns nothing
    C { arg: i64 },
}
