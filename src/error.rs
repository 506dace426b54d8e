//! Error type shared by the quiz library.

use std::fmt;
use std::io;

use crate::session::SessionState;

#[derive(Debug)]
pub enum QuizError {
    /// The requested difficulty level is neither built in nor configured
    UnknownLevel(String),
    /// A level resolved to an empty question set
    NoQuestions(String),
    /// Input ended while the session was waiting for a line
    InputClosed,
    /// A question definition violates construction rules
    InvalidQuestion(String),
    InvalidTransition {
        from: SessionState,
        to: SessionState,
    },
    /// Results were requested before the session finished
    NotFinished(SessionState),
    Io(io::Error),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::UnknownLevel(level) => write!(
                f,
                "Unknown level '{}'. Run `quizrun levels` to see the available levels",
                level
            ),
            QuizError::NoQuestions(level) => write!(f, "Level '{}' has no questions", level),
            QuizError::InputClosed => write!(f, "Input closed before the quiz finished"),
            QuizError::InvalidQuestion(msg) => write!(f, "Invalid question: {}", msg),
            QuizError::InvalidTransition { from, to } => {
                write!(f, "Invalid session transition from {} to {}", from, to)
            }
            QuizError::NotFinished(state) => {
                write!(f, "Quiz results are not available while the session is {}", state)
            }
            QuizError::Io(err) => write!(f, "Console I/O failed: {}", err),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
