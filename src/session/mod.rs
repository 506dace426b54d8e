//! A single run of a quiz: banner, answer loop and result report.
//!
//! The session owns its questions and result lists for one run and does all
//! I/O through the [`Console`] it is handed, never through global streams.

use chrono::{DateTime, Utc};

use crate::console::{Console, OutputMode};
use crate::error::{QuizError, Result};
use crate::grading::{calculate_grade, Grade};
use crate::question::Question;
use crate::report::{CorrectEntry, QuizReport, WrongEntry};
use crate::ui;

mod state;

pub use state::SessionState;

/// Source of timestamps for the elapsed-time report.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The person taking the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Respondent {
    pub name: String,
    pub class: String,
}

impl Respondent {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
        }
    }
}

pub struct QuizSession {
    questions: Vec<Question>,
    respondent: Respondent,
    // Summed in u64 so no run of u32-point questions can overflow
    score: u64,
    total_points: u64,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    // Indices into `questions`, in answer order
    correct: Vec<usize>,
    incorrect: Vec<usize>,
    state: SessionState,
    clock: Box<dyn Clock>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, respondent: Respondent) -> Self {
        let total_points = questions.iter().map(|q| u64::from(q.points())).sum();
        Self {
            questions,
            respondent,
            score: 0,
            total_points,
            started_at: None,
            finished_at: None,
            correct: Vec::new(),
            incorrect: Vec::new(),
            state: SessionState::NotStarted,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used for start and end timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Show the banner, wait for confirmation, then ask every question in
    /// order and score the replies.
    pub fn start(&mut self, console: &mut Console) -> Result<()> {
        self.state = self.state.transition(SessionState::InProgress)?;

        let output = console.output().clone();
        output.blank();
        output.heading(&format!("Welcome, {}!", self.respondent.name));
        output.info(&format!("You are in class {}", self.respondent.class));
        output.heading("Rules:");
        output.info(&format!(
            "1. You will get {} points for this quiz.",
            self.total_points
        ));
        output.info("2. Each correct answer will earn you points based on the question.");
        output.info("3. There are no negative points for wrong answers.");
        output.info("4. Type the number corresponding to your answer and press Enter.");
        console.wait_for_enter("Press Enter to start the quiz...")?;

        self.started_at = Some(self.clock.now());

        for (index, question) in self.questions.iter().enumerate() {
            output.blank();
            output.heading(question.prompt());
            if let Some(options) = question.options() {
                for (number, option) in options.iter().enumerate() {
                    output.info(&format!("{}. {}", number + 1, option));
                }
            }

            let answer = console.read_line()?;
            if question.check_answer(&answer) {
                self.score += u64::from(question.points());
                self.correct.push(index);
            } else {
                self.incorrect.push(index);
            }
        }

        self.finished_at = Some(self.clock.now());
        self.state = self.state.transition(SessionState::Finished)?;
        Ok(())
    }

    /// Print the score summary, wait for confirmation, then list correct and
    /// wrong answers. Only valid once the session has finished.
    pub fn show_result(&self, console: &mut Console) -> Result<()> {
        if self.state != SessionState::Finished {
            return Err(QuizError::NotFinished(self.state));
        }

        let output = console.output().clone();
        let grade = self.grade();

        output.blank();
        output.heading(&format!(
            "Quiz ended. Your score: {}/{}",
            self.score, self.total_points
        ));
        output.colored("Grade:", &grade.to_string(), ui::grade_color(grade));
        output.info(&format!(
            "Time taken: {} seconds",
            self.elapsed_seconds().unwrap_or(0)
        ));
        console.wait_for_enter("Press Enter to show the detailed result!")?;

        output.blank();
        output.heading("Correct answers:");
        for question in self.correct_questions() {
            output.info(question.prompt());
        }

        output.blank();
        output.heading("Wrong answers:");
        for question in self.incorrect_questions() {
            output.info(&format!(
                "{} Correct answer: {}",
                question.prompt(),
                question.correct_answer_text()
            ));
        }

        if output.mode() == OutputMode::Json {
            if let Some(report) = self.report() {
                output.json(&report.to_event());
            }
        }

        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn respondent(&self) -> &Respondent {
        &self.respondent
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn grade(&self) -> Grade {
        calculate_grade(self.score, self.total_points)
    }

    /// Whole seconds between start and finish, once both are recorded.
    pub fn elapsed_seconds(&self) -> Option<i64> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds().max(0)),
            _ => None,
        }
    }

    pub fn correct_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.correct.iter().map(move |&i| &self.questions[i])
    }

    pub fn incorrect_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.incorrect.iter().map(move |&i| &self.questions[i])
    }

    /// Snapshot of the results, available once the session has finished.
    pub fn report(&self) -> Option<QuizReport> {
        if self.state != SessionState::Finished {
            return None;
        }
        let started_at = self.started_at?;
        let finished_at = self.finished_at?;

        Some(QuizReport {
            name: self.respondent.name.clone(),
            class: self.respondent.class.clone(),
            score: self.score,
            total_points: self.total_points,
            grade: self.grade(),
            elapsed_seconds: self.elapsed_seconds().unwrap_or(0),
            started_at,
            finished_at,
            correct: self
                .correct_questions()
                .map(|q| CorrectEntry {
                    prompt: q.prompt().to_string(),
                    points: q.points(),
                })
                .collect(),
            wrong: self
                .incorrect_questions()
                .map(|q| WrongEntry {
                    prompt: q.prompt().to_string(),
                    correct_answer: q.correct_answer_text().to_string(),
                })
                .collect(),
        })
    }
}
