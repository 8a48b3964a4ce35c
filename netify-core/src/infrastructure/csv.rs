// netify-core/src/infrastructure/csv.rs
//
// Reading side of the ';'-delimited Netify tables.

use csv::{Position, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::domain::error::DomainError;
use crate::error::NetifyError;
use crate::infrastructure::error::InfrastructureError;

pub const DELIMITER: u8 = b';';

/// Keeps the raw bytes the csv reader has pulled but not yet moved past.
/// csv-core discards empty lines on its own; this lets us see them.
struct ByteWindow<R> {
    inner: R,
    start: u64,
    bytes: Vec<u8>,
}

impl<R: Read> Read for ByteWindow<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}

impl<R> ByteWindow<R> {
    fn byte_at(&self, offset: u64) -> Option<u8> {
        let idx = usize::try_from(offset.checked_sub(self.start)?).ok()?;
        self.bytes.get(idx).copied()
    }

    fn discard_before(&mut self, offset: u64) {
        let n = usize::try_from(offset.saturating_sub(self.start))
            .unwrap_or(usize::MAX)
            .min(self.bytes.len());
        self.bytes.drain(..n);
        self.start += n as u64;
    }

    /// Counts the empty lines starting at record offset `at`.
    /// Returns (count, line number of the first one, offset past them).
    fn blank_run(&self, at: &Position) -> (u64, u64, u64) {
        let mut offset = at.byte();
        let mut line = at.line();
        // With CRLF endings the previous record stops after '\r'.
        if offset > 0
            && self.byte_at(offset - 1) == Some(b'\r')
            && self.byte_at(offset) == Some(b'\n')
        {
            offset += 1;
            line += 1;
        }
        let mut count = 0;
        loop {
            match self.byte_at(offset) {
                Some(b'\n') => offset += 1,
                Some(b'\r') => {
                    offset += 1;
                    if self.byte_at(offset) == Some(b'\n') {
                        offset += 1;
                    }
                }
                _ => break,
            }
            count += 1;
        }
        (count, line, offset)
    }
}

/// A positional table: header skipped, rows handed out as raw records.
/// Empty lines come out as rows with zero fields, the way Python's csv module
/// yields them, so positional access on them fails.
pub struct DelimitedSource<R: Read> {
    name: String,
    reader: csv::Reader<ByteWindow<R>>,
    blank_lines: u64,
    next_blank_line: u64,
    pending: Option<StringRecord>,
}

impl DelimitedSource<File> {
    pub fn open(path: &Path) -> Result<Self, InfrastructureError> {
        let file = File::open(path).map_err(|source| InfrastructureError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(path.display().to_string(), file))
    }
}

impl<R: Read> DelimitedSource<R> {
    pub fn from_reader(name: impl Into<String>, rdr: R) -> Self {
        // Headers are handled positionally by skip_header, never by name.
        let reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(ByteWindow {
                inner: rdr,
                start: 0,
                bytes: Vec::new(),
            });
        Self {
            name: name.into(),
            reader,
            blank_lines: 0,
            next_blank_line: 0,
            pending: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drops row 1, whatever it holds (an empty line counts as row 1).
    /// A table without even a header line is rejected.
    pub fn skip_header(&mut self) -> Result<(), NetifyError> {
        let mut header = StringRecord::new();
        if !self.next_row(&mut header)? {
            return Err(DomainError::MissingHeader {
                source_name: self.name.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Reads the next row into `record`, reusing its allocation.
    pub fn next_row(&mut self, record: &mut StringRecord) -> Result<bool, NetifyError> {
        if self.blank_lines > 0 {
            self.blank_lines -= 1;
            record.clear();
            let mut position = Position::new();
            position.set_line(self.next_blank_line);
            record.set_position(Some(position));
            self.next_blank_line += 1;
            return Ok(true);
        }
        if let Some(row) = self.pending.take() {
            *record = row;
            return Ok(true);
        }

        let more = self.reader.read_record(record)?;
        let start = record.position().cloned().unwrap_or_else(Position::new);
        let (blanks, first_line, offset) = self.reader.get_ref().blank_run(&start);

        let consumed = self.reader.position().byte();
        self.reader
            .get_mut()
            .discard_before(consumed.saturating_sub(1));

        if more {
            // Point at the record itself, past any CR-LF remainder and blank lines.
            let mut position = start;
            position.set_byte(offset).set_line(first_line + blanks);
            record.set_position(Some(position));
        }
        if blanks == 0 {
            return Ok(more);
        }
        if more {
            self.pending = Some(std::mem::take(record));
        }
        self.blank_lines = blanks;
        self.next_blank_line = first_line;
        self.next_row(record)
    }
}

/// Positional field access; a short row means the table layout is not the expected one.
pub fn column<'r>(
    record: &'r StringRecord,
    index: usize,
    source_name: &str,
) -> Result<&'r str, DomainError> {
    record.get(index).ok_or_else(|| DomainError::MissingColumn {
        source_name: source_name.to_string(),
        line: record.position().map(|p| p.line()).unwrap_or_default(),
        index,
        found: record.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_skip_header_then_rows() -> Result<()> {
        let data = "id;domain;app\n1;zoom.us;A1\n2;\"semi;colon.com\";A2\n";
        let mut source = DelimitedSource::from_reader("domains", data.as_bytes());
        source.skip_header()?;

        let mut row = StringRecord::new();
        assert!(source.next_row(&mut row)?);
        assert_eq!(column(&row, 1, source.name())?, "zoom.us");

        assert!(source.next_row(&mut row)?);
        assert_eq!(column(&row, 1, source.name())?, "semi;colon.com");

        assert!(!source.next_row(&mut row)?);
        Ok(())
    }

    #[test]
    fn test_empty_table_has_no_header() {
        let mut source = DelimitedSource::from_reader("ips", "".as_bytes());
        let err = source.skip_header();
        assert!(matches!(
            err,
            Err(NetifyError::Domain(DomainError::MissingHeader { .. }))
        ));
    }

    #[test]
    fn test_short_row_reports_line_and_index() -> Result<()> {
        let data = "h1;h2;h3\n1;only-two\n";
        let mut source = DelimitedSource::from_reader("domains", data.as_bytes());
        source.skip_header()?;

        let mut row = StringRecord::new();
        assert!(source.next_row(&mut row)?);
        match column(&row, 2, source.name()) {
            Err(DomainError::MissingColumn {
                source_name,
                line,
                index,
                found,
            }) => {
                assert_eq!(source_name, "domains");
                assert_eq!(line, 2);
                assert_eq!(index, 2);
                assert_eq!(found, 2);
            }
            other => anyhow::bail!("Expected MissingColumn, got {:?}", other),
        }
        Ok(())
    }

    fn rows(data: &str) -> Result<Vec<(u64, Vec<String>)>> {
        let mut source = DelimitedSource::from_reader("domains", data.as_bytes());
        source.skip_header()?;
        let mut row = StringRecord::new();
        let mut out = Vec::new();
        while source.next_row(&mut row)? {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            out.push((line, row.iter().map(str::to_string).collect()));
        }
        Ok(out)
    }

    #[test]
    fn test_blank_line_is_an_empty_row() -> Result<()> {
        let rows = rows("id;domain;app\n_;zoom.us;A1\n\n_;b.zoom.us;A1\n")?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].1, vec!["_", "zoom.us", "A1"]);
        assert_eq!(rows[1], (3, Vec::new()));
        assert_eq!(rows[2].0, 4);
        assert_eq!(rows[2].1, vec!["_", "b.zoom.us", "A1"]);
        Ok(())
    }

    #[test]
    fn test_consecutive_and_trailing_blank_lines() -> Result<()> {
        let rows = rows("h\na;1\n\n\nb;2\n\n")?;
        let lines: Vec<u64> = rows.iter().map(|(line, _)| *line).collect();
        let widths: Vec<usize> = rows.iter().map(|(_, f)| f.len()).collect();
        assert_eq!(lines, vec![2, 3, 4, 5, 6]);
        assert_eq!(widths, vec![2, 0, 0, 2, 0]);
        Ok(())
    }

    #[test]
    fn test_crlf_endings_add_no_rows() -> Result<()> {
        let rows = rows("h1;h2\r\na;1\r\nb;2\r\n")?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 2);
        assert_eq!(rows[1], (3, vec!["b".to_string(), "2".to_string()]));
        Ok(())
    }

    #[test]
    fn test_crlf_blank_line_is_an_empty_row() -> Result<()> {
        let rows = rows("h1;h2\r\na;1\r\n\r\nb;2\r\n")?;
        let widths: Vec<usize> = rows.iter().map(|(_, f)| f.len()).collect();
        assert_eq!(widths, vec![2, 0, 2]);
        assert_eq!(rows[1].0, 3);
        Ok(())
    }

    #[test]
    fn test_blank_line_inside_quotes_is_data() -> Result<()> {
        let rows = rows("h\n1;\"multi\n\nline\";A1\n")?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1[1], "multi\n\nline");
        Ok(())
    }

    #[test]
    fn test_leading_blank_line_takes_the_header_slot() -> Result<()> {
        let rows = rows("\nid;domain;app\n_;zoom.us;A1\n")?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1, vec!["id", "domain", "app"]);
        Ok(())
    }

    #[test]
    fn test_blank_row_fails_positional_access() -> Result<()> {
        let mut source = DelimitedSource::from_reader("ips", "h\n\n1;2\n".as_bytes());
        source.skip_header()?;
        let mut row = StringRecord::new();
        assert!(source.next_row(&mut row)?);
        assert!(matches!(
            column(&row, 4, source.name()),
            Err(DomainError::MissingColumn {
                line: 2,
                index: 4,
                found: 0,
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        let result = DelimitedSource::open(Path::new("/nonexistent/netify/domains.csv"));
        assert!(matches!(
            result,
            Err(InfrastructureError::SourceUnavailable { .. })
        ));
    }
}
