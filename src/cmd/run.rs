//! The default command: collect respondent details, run the quiz, report.

use anyhow::Result;

use quizrun::config::Config;
use quizrun::console::{Console, OutputMode};
use quizrun::error::QuizError;
use quizrun::level::Level;
use quizrun::session::{QuizSession, Respondent};

use crate::cli::RunArgs;

pub fn cmd_run(args: RunArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let mode = if args.json {
        OutputMode::Json
    } else {
        config.output_mode()?
    };

    let mut console = Console::stdio(mode);
    run_quiz(&args, &config, &mut console)
}

/// Run one quiz over `console`.
///
/// Flags win over config defaults; anything still missing is asked for.
pub fn run_quiz(args: &RunArgs, config: &Config, console: &mut Console) -> Result<()> {
    let name = match args.name.clone().or_else(|| config.defaults.name.clone()) {
        Some(name) => name,
        None => console.ask("Enter your name: ")?,
    };
    let class = match args.class.clone().or_else(|| config.defaults.class.clone()) {
        Some(class) => class,
        None => console.ask("Enter your class: ")?,
    };
    let level = match args.level.clone().or_else(|| config.defaults.level.clone()) {
        Some(level) => level,
        None => console.ask(&level_prompt(config))?,
    };

    let questions = config.questions_for(&level)?;
    if questions.is_empty() {
        return Err(QuizError::NoQuestions(level).into());
    }

    let mut session = QuizSession::new(questions, Respondent::new(name, class));
    session.start(console)?;
    session.show_result(console)?;
    Ok(())
}

fn level_prompt(config: &Config) -> String {
    let mut names: Vec<String> = Level::ALL.iter().map(|l| l.to_string()).collect();
    for custom in config.levels.keys() {
        if custom.parse::<Level>().is_err() {
            names.push(custom.clone());
        }
    }
    format!("Enter the level of difficulty ({}): ", names.join(", "))
}
