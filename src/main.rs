//! CLI entry point for quizrun.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Run on a thread with an explicit stack size so debug builds behave the
    // same on Windows (1MB default) as on Linux/macOS (8MB).
    const STACK_SIZE: usize = 8 * 1024 * 1024; // 8 MB

    let thread = std::thread::Builder::new()
        .stack_size(STACK_SIZE)
        .spawn(run)?;

    match thread.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => cmd::run::cmd_run(cli.run),
        Some(Commands::Levels) => cmd::levels::cmd_levels(cli.run.config.as_deref()),
        Some(Commands::Version { verbose }) => cmd::util::cmd_version(verbose),
        Some(Commands::Completion { shell }) => cmd::util::cmd_completion(shell),
        Some(Commands::Man { out_dir }) => cmd::util::cmd_man(out_dir.as_ref()),
    }
}
