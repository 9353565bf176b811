use std::io::{self, BufRead, Write};

/// Line-based text I/O used by the interaction loop
pub trait Console {
    /// Write `text` without a trailing newline.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its line terminator. Returns an empty string
    /// at end of input.
    fn read_line(&mut self) -> io::Result<String>;

    /// True once a read has hit end of input.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Console over a buffered reader and a writer, normally the process streams
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
    exhausted: bool,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            exhausted: false,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        // Prompts must be visible before the next blocking read
        self.writer.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            self.exhausted = true;
            return Ok(String::new());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
