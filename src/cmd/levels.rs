//! `quizrun levels`: list built-in and configured levels.

use anyhow::Result;

use quizrun::config::Config;
use quizrun::level::Level;
use quizrun::question::Question;
use quizrun::ui::{colors, format};

/// One row of the level listing
#[derive(Debug, PartialEq, Eq)]
pub struct LevelSummary {
    pub name: String,
    pub questions: usize,
    pub points: u64,
    pub custom: bool,
}

pub fn cmd_levels(config_path: Option<&str>) -> Result<()> {
    let config = Config::load(config_path)?;
    let summaries = summarize(&config)?;

    println!("{}", colors::heading("Levels"));
    println!("{}", format::separator(40));
    for summary in &summaries {
        let origin = if summary.custom { "  (config)" } else { "" };
        println!(
            "{:<12} {}, {}{}",
            colors::identifier(&summary.name),
            format::count(summary.questions as u64, "question"),
            format::count(summary.points, "point"),
            colors::secondary(origin)
        );
    }

    Ok(())
}

/// Built-in levels in difficulty order, then custom levels by name.
/// A custom level shadowing a built-in replaces it in place.
pub fn summarize(config: &Config) -> Result<Vec<LevelSummary>> {
    let mut summaries = Vec::new();

    for level in Level::ALL {
        let custom = config
            .levels
            .keys()
            .any(|name| name.eq_ignore_ascii_case(level.as_str()));
        let questions = config.questions_for(level.as_str())?;
        summaries.push(summary(level.as_str(), &questions, custom));
    }

    for name in config.levels.keys() {
        if name.parse::<Level>().is_ok() {
            continue;
        }
        let questions = config.questions_for(name)?;
        summaries.push(summary(name, &questions, true));
    }

    Ok(summaries)
}

fn summary(name: &str, questions: &[Question], custom: bool) -> LevelSummary {
    LevelSummary {
        name: name.to_string(),
        questions: questions.len(),
        points: questions.iter().map(|q| u64::from(q.points())).sum(),
        custom,
    }
}
