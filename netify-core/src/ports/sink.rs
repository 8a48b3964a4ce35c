// netify-core/src/ports/sink.rs

// What the pipeline needs from its destination, without knowing whether it is
// a file on disk, an in-memory buffer or something else.

use crate::domain::record::OutputRecord;
use crate::error::NetifyError;

pub trait RecordSink {
    /// Writes the `type;key;value;...` header line.
    fn write_header(&mut self) -> Result<(), NetifyError>;

    /// Writes one record immediately (no batching beyond the writer's own buffer).
    fn write_record(&mut self, record: &OutputRecord<'_>) -> Result<(), NetifyError>;

    fn flush(&mut self) -> Result<(), NetifyError>;
}
