//! Centralized UI formatting and color utilities
//!
//! Colors and text helpers shared by the quiz session and the CLI commands.

use colored::{Color, ColoredString, Colorize};

use crate::grading::Grade;

/// Color used for a grade letter.
///
/// - A, B: green
/// - C, D: yellow
/// - F: red
pub fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::A | Grade::B => Color::Green,
        Grade::C | Grade::D => Color::Yellow,
        Grade::F => Color::Red,
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use super::*;

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Cyan for identifiers (level names)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// "1 question", "5 questions"
    pub fn count(n: u64, noun: &str) -> String {
        if n == 1 {
            format!("{} {}", n, noun)
        } else {
            format!("{} {}s", n, noun)
        }
    }

    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}

/// Print a warning to stderr.
pub fn warn(msg: &str) {
    eprintln!("{} {}", colors::warning("Warning:"), msg);
}
