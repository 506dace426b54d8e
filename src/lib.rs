//! # Quizrun - terminal quiz runner
//!
//! Quizrun presents multiple-choice questions grouped by difficulty level,
//! collects one answer per question from the console, scores the answers and
//! prints a graded report.
//!
//! ## Modules
//!
//! - [`question`] - Question model and answer checking
//! - [`grading`] - Letter grades from score and total
//! - [`level`] - Difficulty levels and their question sets
//! - [`session`] - One run of a quiz: answer loop and report
//! - [`console`] - Injected line reader and mode-aware output
//! - [`config`] - Global and project configuration files
//!
//! ## Example
//!
//! ```no_run
//! use quizrun::console::{Console, OutputMode};
//! use quizrun::level::Level;
//! use quizrun::session::{QuizSession, Respondent};
//!
//! let mut console = Console::stdio(OutputMode::Human);
//! let mut session = QuizSession::new(Level::Easy.questions(), Respondent::new("Ada", "7B"));
//! session.start(&mut console).expect("quiz interrupted");
//! session.show_result(&mut console).expect("report interrupted");
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod grading;
pub mod level;
pub mod question;
pub mod report;
pub mod session;
pub mod ui;

/// Default path constants.
pub mod paths {
    /// Project config file, looked up in the working directory: `quizrun.md`
    pub const PROJECT_CONFIG: &str = "quizrun.md";
}
