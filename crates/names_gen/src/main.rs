//! Lookup table generator.
//!
//! Reads the blueprint dump and writes the squad/companion lookup functions
//! to a source file, for projects that commit the generated code instead of
//! building it through wotr_names' build script.
//!
//! Usage:
//!   cargo run -p names_gen -- generate --output src/data/names.rs
//!   cargo run -p names_gen -- check --output src/data/names.rs
//!   cargo run -p names_gen -- stats --json

mod cmd;
mod models;
mod utils;

use clap::{Parser, Subcommand};
use cmd::{check, generate, stats};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "names_gen")]
struct Cli {
    /// Be verbose
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the lookup file
    Generate(generate::GenerateArgs),

    /// Fail if the lookup file is missing or out of date
    Check(check::CheckArgs),

    /// Show what the dump classifies into each table
    Stats(stats::StatsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match cli.command {
        Some(Commands::Generate(args)) => generate::execute(args),
        Some(Commands::Check(args)) => {
            if !check::execute(args)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Stats(args)) => stats::execute(args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
