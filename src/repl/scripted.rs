use std::collections::VecDeque;
use std::io;

use super::console::Console;

/// One recorded output call
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Write(String),
    WriteLine(String),
}

impl Output {
    pub fn text(&self) -> &str {
        match self {
            Output::Write(text) | Output::WriteLine(text) => text,
        }
    }
}

/// In-memory console: feeds queued lines and records every write.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<Output>,
    exhausted: bool,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut console = Self::new();
        console.push_input(lines);
        console
    }

    pub fn push_input<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.extend(lines.into_iter().map(Into::into));
    }

    /// Text of each output call, one entry per call
    pub fn output_lines(&self) -> Vec<&str> {
        self.output.iter().map(Output::text).collect()
    }

    /// Output as a terminal would show it, without echoed input
    pub fn transcript(&self) -> String {
        let mut transcript = String::new();
        for entry in &self.output {
            transcript.push_str(entry.text());
            if let Output::WriteLine(_) = entry {
                transcript.push('\n');
            }
        }
        transcript
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push(Output::Write(text.to_string()));
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(Output::WriteLine(text.to_string()));
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        match self.input.pop_front() {
            Some(line) => Ok(line),
            None => {
                self.exhausted = true;
                Ok(String::new())
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
