//! Pipe-delimited line format shared by both backing files
//!
//! ```text
//! name|quantity|unit|added_date|expires_in
//! ```
//!
//! Quantity is written with exactly two decimals. The on-hand loader is strict
//! (all five fields required), the standing-list loader is lenient (only the
//! name is required, missing trailing fields take their zero value).

use crate::error::{PantryError, Result};
use crate::record::Record;
use csv::StringRecord;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

const DELIMITER: u8 = b'|';

/// How a backing file's lines are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Five non-empty fields with parseable numbers, otherwise skipped
    Strict,
    /// Name required, trailing fields defaulted
    Lenient,
}

impl DecodeMode {
    pub fn decode(self, fields: &StringRecord) -> Option<Record> {
        match self {
            DecodeMode::Strict => strict_record(fields),
            DecodeMode::Lenient => lenient_record(fields),
        }
    }
}

/// Unquoted, headerless reader that tolerates short rows
fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

fn writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(inner)
}

fn line_fields(record: &Record) -> [String; 5] {
    [
        record.name.clone(),
        format!("{:.2}", record.quantity),
        record.unit.clone(),
        record.added_date.clone(),
        record.expires_in.to_string(),
    ]
}

/// Encode a record as one line (without the trailing newline)
pub fn encode(record: &Record) -> Result<String> {
    let mut wtr = writer(Vec::new());
    wtr.write_record(&line_fields(record))?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes)
        .trim_end_matches('\n')
        .to_string())
}

/// Split one line into its fields
fn parse_line(line: &str) -> Option<StringRecord> {
    reader_builder()
        .from_reader(line.as_bytes())
        .records()
        .next()?
        .ok()
}

/// Decode an on-hand line; `None` if any of the five fields is missing or corrupt
pub fn decode_strict(line: &str) -> Option<Record> {
    strict_record(&parse_line(line)?)
}

/// Decode a standing-list line; only a non-empty name is required
pub fn decode_lenient(line: &str) -> Option<Record> {
    lenient_record(&parse_line(line)?)
}

fn strict_record(fields: &StringRecord) -> Option<Record> {
    if fields.len() < 5 || fields.iter().take(5).any(|f| f.trim().is_empty()) {
        return None;
    }

    let quantity: f64 = fields[1].trim().parse().ok()?;
    if !quantity.is_finite() || quantity < 0.0 {
        return None;
    }
    let expires_in: i32 = fields[4].trim().parse().ok()?;

    Some(Record::new(
        &fields[0],
        quantity,
        &fields[2],
        &fields[3],
        expires_in,
    ))
}

fn lenient_record(fields: &StringRecord) -> Option<Record> {
    let field = |i: usize| fields.get(i).unwrap_or_default();
    let name = field(0);
    if name.trim().is_empty() {
        return None;
    }

    let quantity = field(1)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q >= 0.0)
        .unwrap_or(0.0);
    let expires_in = field(4).trim().parse::<i32>().unwrap_or(0);

    Some(Record::new(name, quantity, field(2), field(3), expires_in))
}

/// Read every decodable record from `path`
///
/// A missing or unreadable file yields an empty list. Lines that fail to
/// decode are skipped with a warning.
pub fn read_records(path: &Path, mode: DecodeMode) -> Vec<Record> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found, starting with an empty list", path.display());
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Cannot read {}: {}, starting with an empty list", path.display(), e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    let mut reader = reader_builder().from_reader(file);
    for result in reader.records() {
        let fields = match result {
            Ok(fields) => fields,
            Err(e) if e.is_io_error() => {
                log::warn!("Stopped reading {}: {}", path.display(), e);
                break;
            }
            Err(e) => {
                log::warn!("Skipping unreadable line in {}: {}", path.display(), e);
                continue;
            }
        };
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        match mode.decode(&fields) {
            Some(record) => records.push(record),
            None => log::warn!(
                "Skipping malformed line {} in {}: {:?}",
                fields.position().map_or(0, |p| p.line()),
                path.display(),
                fields
            ),
        }
    }

    log::debug!("Loaded {} records from {}", records.len(), path.display());
    records
}

/// Truncate `path` and write all records, one per line
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let write = || -> io::Result<()> {
        let mut wtr = writer(File::create(path)?);
        for record in records {
            wtr.write_record(&line_fields(record))?;
        }
        wtr.flush()
    };
    write().map_err(|e| PantryError::io(path, e))?;

    log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// False when the file is non-empty and its last byte is not `\n`
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Append one record to `path`, creating the file if needed
///
/// A hand-edited file may lack its final newline; one is added first so the
/// last existing line stays intact.
pub fn append_record(path: &Path, record: &Record) -> Result<()> {
    let append = || -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }
        let mut wtr = writer(file);
        wtr.write_record(&line_fields(record))?;
        wtr.flush()
    };
    append().map_err(|e| PantryError::io(path, e))?;

    log::debug!("Appended '{}' to {}", record.name, path.display());
    Ok(())
}
