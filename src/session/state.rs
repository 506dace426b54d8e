//! Lifecycle states of a quiz session.

use std::fmt;

use crate::error::{QuizError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl SessionState {
    /// Check that `self -> to` is a legal step and return the new state.
    ///
    /// A session only moves forward, one step at a time.
    pub fn transition(self, to: SessionState) -> Result<SessionState> {
        match (self, to) {
            (SessionState::NotStarted, SessionState::InProgress)
            | (SessionState::InProgress, SessionState::Finished) => Ok(to),
            (from, to) => Err(QuizError::InvalidTransition { from, to }),
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::NotStarted => write!(f, "not started"),
            SessionState::InProgress => write!(f, "in progress"),
            SessionState::Finished => write!(f, "finished"),
        }
    }
}
