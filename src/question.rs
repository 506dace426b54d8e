//! Question model and answer checking.
//!
//! [`Question`] is a tagged variant so new question kinds (true/false,
//! short answer) slot in as additional variants without touching callers.

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    MultipleChoice(MultipleChoiceQuestion),
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.prompt,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Question::MultipleChoice(q) => q.points,
        }
    }

    /// Options to display as a numbered list, if the question has any.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Question::MultipleChoice(q) => Some(&q.options),
        }
    }

    pub fn check_answer(&self, user_answer: &str) -> bool {
        match self {
            Question::MultipleChoice(q) => q.check_answer(user_answer),
        }
    }

    pub fn correct_answer_text(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => q.correct_answer_text(),
        }
    }
}

impl From<MultipleChoiceQuestion> for Question {
    fn from(q: MultipleChoiceQuestion) -> Self {
        Question::MultipleChoice(q)
    }
}

/// A question answered by typing the 1-based number of one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoiceQuestion {
    prompt: String,
    points: u32,
    options: Vec<String>,
    correct_index: usize,
}

impl MultipleChoiceQuestion {
    /// Build a question from a 1-based correct option number.
    pub fn new(
        prompt: impl Into<String>,
        points: u32,
        options: Vec<String>,
        correct_option: usize,
    ) -> Result<Self> {
        let prompt = prompt.into();
        if points == 0 {
            return Err(QuizError::InvalidQuestion(format!(
                "'{}' must be worth at least one point",
                prompt
            )));
        }
        if options.is_empty() {
            return Err(QuizError::InvalidQuestion(format!(
                "'{}' has no options",
                prompt
            )));
        }
        if correct_option == 0 || correct_option > options.len() {
            return Err(QuizError::InvalidQuestion(format!(
                "'{}' marks option {} as correct but has {} options",
                prompt,
                correct_option,
                options.len()
            )));
        }

        Ok(Self {
            prompt,
            points,
            options,
            correct_index: correct_option - 1,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Zero-based index of the correct option.
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Anything other than a plain run of ASCII digits is a wrong answer,
    /// as is a number too large to be an option.
    pub fn check_answer(&self, user_answer: &str) -> bool {
        if user_answer.is_empty() || !user_answer.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        match user_answer.parse::<usize>() {
            Ok(number) => number.checked_sub(1) == Some(self.correct_index),
            Err(_) => false,
        }
    }

    pub fn correct_answer_text(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Serialized form of a multiple-choice question, as written in config files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionDef {
    pub prompt: String,
    #[serde(default = "default_points")]
    pub points: u32,
    pub options: Vec<String>,
    /// 1-based number of the correct option
    pub correct: usize,
}

fn default_points() -> u32 {
    2
}

impl TryFrom<&QuestionDef> for Question {
    type Error = QuizError;

    fn try_from(def: &QuestionDef) -> Result<Self> {
        MultipleChoiceQuestion::new(
            def.prompt.clone(),
            def.points,
            def.options.clone(),
            def.correct,
        )
        .map(Question::from)
    }
}
