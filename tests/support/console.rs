use quizrun::console::{Console, Output, OutputMode};
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

/// Writer that appends into a shared buffer so tests can read it back.
#[derive(Clone, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console fed from `input` line by line, writing into the returned capture.
pub fn scripted(input: &str, mode: OutputMode) -> (Console, Capture) {
    let capture = Capture::default();
    let console = Console::new(
        Box::new(Cursor::new(input.to_string())),
        Output::with_writer(mode, Box::new(capture.clone())),
    );
    (console, capture)
}

/// Input lines for a full run: start gate, one line per answer, report gate.
pub fn answers(lines: &[&str]) -> String {
    let mut input = String::from("\n");
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    input.push('\n');
    input
}
