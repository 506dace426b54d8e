//! Mode-aware output for the quiz console.
//!
//! Provides a unified interface for writing quiz text in different modes:
//! - Human: plain lines, with colored headings and prefixes on a terminal
//! - Json: one `{"level": ..., "msg": ...}` object per line for scripting
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::{Color, Colorize};
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text
    Human,
    /// JSON-formatted structured output
    Json,
}

impl OutputMode {
    /// Parse a mode name as written in config files.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "human" | "text" => Some(OutputMode::Human),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false, // Assume non-TTY for custom writers
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(msg),
            OutputMode::Json => self.write_json("info", msg, None),
        }
    }

    /// Output a section heading, bold on a terminal
    pub fn heading(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                if self.is_tty {
                    self.write_line(&msg.bold().to_string());
                } else {
                    self.write_line(msg);
                }
            }
            OutputMode::Json => self.write_json("heading", msg, None),
        }
    }

    /// Output an empty separator line (human mode only)
    pub fn blank(&self) {
        if self.mode == OutputMode::Human {
            self.write_line("");
        }
    }

    /// Output a prompt without a trailing newline and flush it
    pub fn prompt(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                if let Ok(mut writer) = self.writer.lock() {
                    let _ = write!(writer, "{}", msg);
                    let _ = writer.flush();
                }
            }
            OutputMode::Json => self.write_json("prompt", msg.trim_end(), None),
        }
    }

    /// Output a colored message with a custom prefix and color
    pub fn colored(&self, prefix: &str, msg: &str, color: Color) {
        match self.mode {
            OutputMode::Human => {
                let formatted_prefix = if self.is_tty {
                    prefix.color(color).to_string()
                } else {
                    prefix.to_string()
                };
                self.write_line(&format!("{} {}", formatted_prefix, msg));
            }
            OutputMode::Json => {
                self.write_json("message", msg, Some(("prefix", prefix)));
            }
        }
    }

    /// Output a structured JSON event
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Write a JSON-formatted line
    fn write_json(&self, level: &str, msg: &str, extra: Option<(&str, &str)>) {
        if let Ok(mut writer) = self.writer.lock() {
            let mut obj = json!({
                "level": level,
                "msg": msg,
            });

            if let Some((key, value)) = extra {
                obj[key] = json!(value);
            }

            let _ = writeln!(writer, "{}", obj);
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Test-specific writer that wraps Arc<Mutex<Vec<u8>>>
    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.buffer.lock().unwrap().flush()
        }
    }

    fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_human_mode_output() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Human, Box::new(writer));

        output.heading("Rules:");
        output.info("1. Venus");
        output.blank();
        output.colored("Grade:", "A", Color::Green);
        output.prompt("Enter your name: ");

        assert_eq!(
            captured(&buffer),
            "Rules:\n1. Venus\n\nGrade: A\nEnter your name: "
        );
    }

    #[test]
    fn test_json_mode_output() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Json, Box::new(writer));

        output.info("Starting");
        output.blank();
        output.prompt("Enter your class: ");
        output.colored("Grade:", "B", Color::Green);

        let result = captured(&buffer);
        assert!(result.contains(r#""level":"info""#));
        assert!(result.contains(r#""msg":"Starting""#));
        assert!(result.contains(r#""level":"prompt""#));
        assert!(result.contains(r#""msg":"Enter your class:""#));
        assert!(result.contains(r#""prefix":"Grade:""#));
        assert_eq!(result.lines().count(), 3);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(OutputMode::parse("JSON"), Some(OutputMode::Json));
        assert_eq!(OutputMode::parse("human"), Some(OutputMode::Human));
        assert_eq!(OutputMode::parse("xml"), None);
    }

    #[test]
    fn test_mode_getter() {
        let output = Output::new(OutputMode::Json);
        assert_eq!(output.mode(), OutputMode::Json);
    }
}
