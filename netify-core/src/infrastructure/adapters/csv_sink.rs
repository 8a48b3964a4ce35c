// netify-core/src/infrastructure/adapters/csv_sink.rs

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// Hexagonal imports
use crate::domain::record::{OUTPUT_HEADER, OutputRecord};
use crate::error::NetifyError;
use crate::infrastructure::csv::DELIMITER;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::sink::RecordSink;

/// `netify.csv` writer: ';' delimited, minimal quoting, '\n' line endings.
pub struct CsvRecordSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvRecordSink<File> {
    /// Creates (or truncates) the output file.
    pub fn create(path: &Path) -> Result<Self, InfrastructureError> {
        let file = File::create(path).map_err(|source| InfrastructureError::OutputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> CsvRecordSink<W> {
    pub fn from_writer(wtr: W) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote(b'"')
            .quote_style(QuoteStyle::Necessary)
            .double_quote(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(wtr);
        Self { writer }
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W, NetifyError> {
        self.writer
            .into_inner()
            .map_err(|e| NetifyError::from(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvRecordSink<W> {
    fn write_header(&mut self) -> Result<(), NetifyError> {
        self.writer.write_record(OUTPUT_HEADER)?;
        Ok(())
    }

    fn write_record(&mut self, record: &OutputRecord<'_>) -> Result<(), NetifyError> {
        let reliability = record.reliability_text();
        self.writer.write_record([
            record.record_type.as_str(),
            record.key,
            record.value,
            reliability.as_str(),
            record.validity,
            record.details,
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), NetifyError> {
        self.writer.flush()?;
        Ok(())
    }
}
