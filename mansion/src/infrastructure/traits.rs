//! I/O boundary traits for testability
//!
//! The builder and the explorer talk to the user only through [`Console`],
//! so the whole dialogue can be driven from an in-memory script.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented text console.
pub trait Console {
    /// Write text as-is.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write a prompt (no trailing newline) and flush so it is visible before blocking.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its line terminator.
    /// Returns `None` once the input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Prompt, then read the answer.
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        self.prompt(text)?;
        self.read_line()
    }
}

// ============================================================
// REAL IMPLEMENTATION
// ============================================================

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect a captured transcript.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl TextConsole<BufReader<Stdin>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        // Bytes that are not UTF-8 (e.g. a Latin-1 terminal) are kept as U+FFFD.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
