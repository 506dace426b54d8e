//! CLI argument definitions for quizrun.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quizrun")]
#[command(version)]
#[command(about = "Take a multiple-choice quiz in the terminal", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    quizrun                    Answer the prompts for name, class and level\n    quizrun --level easy       Skip the level prompt\n    quizrun levels             Show the available levels"
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for taking a quiz (the default command)
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Respondent name (prompted for when omitted)
    #[arg(long)]
    pub name: Option<String>,
    /// Respondent class (prompted for when omitted)
    #[arg(long)]
    pub class: Option<String>,
    /// Difficulty level: easy, medium, hard, or a configured level
    #[arg(long)]
    pub level: Option<String>,
    /// Emit JSON lines instead of text
    #[arg(long)]
    pub json: bool,
    /// Config file to use instead of ./quizrun.md
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available levels
    Levels,
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    #[command(hide = true)]
    Man {
        /// Output directory for the man page (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}
