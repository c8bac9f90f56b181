use std::io::{self, Write};

use crate::{FormattedLine, Palette, Result};

/// Destination for collected lines.
///
/// The collector calls [`Sink::write_line`] once per line, in the order lines
/// arrive on the result queue, and [`Sink::flush`] once the queue is closed.
pub trait Sink {
    fn write_line(&mut self, prefix: &str, line: &FormattedLine) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes each line, newline-terminated, to an [`io::Write`].
///
/// With a palette the highlighted spans are painted with ANSI colors,
/// without one the plain text is written.
pub struct WriterSink<W: Write> {
    writer: W,
    palette: Option<Palette>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, palette: Option<Palette>) -> Self {
        Self { writer, palette }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout(palette: Option<Palette>) -> Self {
        WriterSink::new(io::stdout(), palette)
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write_line(&mut self, prefix: &str, line: &FormattedLine) -> Result<()> {
        match &self.palette {
            Some(palette) => writeln!(self.writer, "{prefix}{}", line.paint(palette))?,
            None => writeln!(self.writer, "{prefix}{line}")?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps the plain text of every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, prefix: &str, line: &FormattedLine) -> Result<()> {
        self.lines.push(format!("{prefix}{line}"));
        Ok(())
    }
}
