// netify-core/src/infrastructure/json.rs
//
// Encoding of the `details` column. Existing netify_data rows were produced by
// Python's `json.dumps`, so the blob keeps that exact shape:
// `{"Tag": "x", "ShortName": "y"}` with every non printable-ASCII character
// escaped as \uXXXX.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

use crate::domain::catalog::ApplicationDetails;
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiSpacedFormatter;

impl Formatter for AsciiSpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // Quotes, backslashes and C0 controls never reach this point: serde_json
    // escapes them itself before handing over the remaining fragments.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

pub fn to_details_string<T: Serialize + ?Sized>(value: &T) -> Result<String, InfrastructureError> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiSpacedFormatter);
    value.serialize(&mut ser)?;
    // Every byte written above is ASCII.
    String::from_utf8(buf)
        .map_err(|e| InfrastructureError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn encode_details(details: &ApplicationDetails) -> Result<String, InfrastructureError> {
    to_details_string(details)
}
