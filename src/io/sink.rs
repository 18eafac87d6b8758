use anyhow::{Context, Result};
use std::io::Write;

/// Receives the estimate produced by one run.
pub trait ResultSink {
    fn report(&mut self, estimate: f64) -> Result<()>;
}

/// Writes `Ans = <estimate>` lines to any writer.
///
/// The estimate is printed with every significant digit, never truncated to
/// an integer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultSink for WriterSink<W> {
    fn report(&mut self, estimate: f64) -> Result<()> {
        writeln!(self.writer, "Ans = {:?}", estimate).context("failed to write estimate")?;
        self.writer.flush().context("failed to flush estimate")
    }
}

/// Keeps every reported estimate in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySink {
    pub values: Vec<f64>,
}

impl ResultSink for MemorySink {
    fn report(&mut self, estimate: f64) -> Result<()> {
        self.values.push(estimate);
        Ok(())
    }
}
