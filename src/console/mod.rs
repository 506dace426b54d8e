//! Line-oriented console the quiz talks to.
//!
//! A [`Console`] pairs a buffered line reader with an [`Output`]. The binary
//! builds one over stdin/stdout; tests substitute scripted input and a
//! capturing writer.

use std::io::{self, BufRead};

use crate::error::{QuizError, Result};

pub mod output;

pub use output::{Output, OutputMode};

pub struct Console {
    input: Box<dyn BufRead>,
    output: Output,
}

impl Console {
    pub fn new(input: Box<dyn BufRead>, output: Output) -> Self {
        Self { input, output }
    }

    /// Console over the process standard streams.
    pub fn stdio(mode: OutputMode) -> Self {
        Self::new(Box::new(io::BufReader::new(io::stdin())), Output::new(mode))
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Read one line without its terminator.
    ///
    /// End of input is an error: the quiz always needs another line when it
    /// asks for one.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Show a prompt and read the reply.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.output.prompt(prompt);
        self.read_line()
    }

    /// Show a message and block until a line arrives; its content is ignored.
    pub fn wait_for_enter(&mut self, msg: &str) -> Result<()> {
        self.output.info(msg);
        self.read_line().map(|_| ())
    }
}
