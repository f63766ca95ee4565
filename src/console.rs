use std::io::{self, Write};

/// Line-oriented output the dispatcher and commands write through.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn output(&mut self, text: &str);
}

/// Writes to the process' standard output.
#[derive(Debug, Default)]
pub struct Terminal;

impl Console for Terminal {
    fn output(&mut self, text: &str) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // A closed stdout is not something a command can recover from.
        let _ = writeln!(out, "{text}");
    }
}

/// Keeps everything written in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    buf: String,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn text(&self) -> &str {
        &self.buf
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

impl Console for Recorder {
    fn output(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }
}
