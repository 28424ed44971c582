//! Final output writers: one row per tag-pair key.

use crate::core::KeyAverage;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Json,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &[KeyAverage]) -> anyhow::Result<()>;
}

/// Tab-separated rows, `"<start>...<end>\t<average>"`.
///
/// Averages are rendered in shortest round-trip form with a mandatory
/// decimal point, so a whole-number average reads `3.0` rather than `3`.
pub struct TsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TsvWriter<W> {
    fn write_results(&mut self, results: &[KeyAverage]) -> anyhow::Result<()> {
        for row in results {
            writeln!(self.writer, "{}\t{:?}", row.key, row.average)?;
        }
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &[KeyAverage]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Build the writer for a format over any output sink.
pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Tsv => Box::new(TsvWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
