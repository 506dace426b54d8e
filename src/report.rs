//! Serializable summary of a finished quiz.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grading::Grade;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuizReport {
    pub name: String,
    pub class: String,
    pub score: u64,
    pub total_points: u64,
    pub grade: Grade,
    pub elapsed_seconds: i64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub correct: Vec<CorrectEntry>,
    pub wrong: Vec<WrongEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CorrectEntry {
    pub prompt: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WrongEntry {
    pub prompt: String,
    pub correct_answer: String,
}

impl QuizReport {
    /// The report as a JSON event line for [`crate::console::Output::json`].
    pub fn to_event(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        if let Some(obj) = value.as_object_mut() {
            obj.insert("level".to_string(), serde_json::json!("report"));
        }
        value
    }
}
