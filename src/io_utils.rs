//! I/O utilities for reading product files and writing combination reports.
//!
//! - **Delimiter resolution**: the input file's extension picks the field
//!   delimiter (`.csv` → comma, `.tsv` → tab). Anything else is rejected
//!   before a single row is read.
//! - **Encoding**: input bytes are decoded through `encoding_rs`, defaulting
//!   to UTF-8.
//! - **Reader/writer construction**: readers are headerless and flexible so
//!   the header row and ragged data rows reach the pipeline untouched.

use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use csv::QuoteStyle;
use encoding_rs::{Encoding, UTF_8};

use crate::error::ParseError;

/// Field separator of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => f.write_str(","),
            Delimiter::Tab => f.write_str("\\t"),
        }
    }
}

pub fn resolve_delimiter(path: &Path) -> Result<Delimiter, ParseError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Delimiter::Comma),
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => Ok(Delimiter::Tab),
        _ => Err(ParseError::UnsupportedExtension {
            path: path.to_path_buf(),
        }),
    }
}

pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding, ParseError> {
    match label {
        Some(value) => Encoding::for_label(value.trim().as_bytes()).ok_or_else(|| {
            ParseError::UnknownEncoding {
                label: value.to_string(),
            }
        }),
        None => Ok(UTF_8),
    }
}

pub fn open_csv_reader<R>(reader: R, delimiter: Delimiter) -> csv::Reader<R>
where
    R: Read,
{
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .delimiter(delimiter.as_byte())
        .double_quote(true)
        .flexible(true);
    builder.from_reader(reader)
}

pub fn open_csv_reader_from_path(
    path: &Path,
    delimiter: Delimiter,
) -> Result<csv::Reader<BufReader<File>>> {
    let reader =
        BufReader::new(File::open(path).with_context(|| format!("Opening input file {path:?}"))?);
    Ok(open_csv_reader(reader, delimiter))
}

pub fn open_csv_writer(path: &Path) -> Result<csv::Writer<Box<dyn Write>>> {
    let file = File::create(path).with_context(|| format!("Creating output file {path:?}"))?;
    Ok(open_csv_writer_to(Box::new(BufWriter::new(file))))
}

pub fn open_csv_writer_to<W>(writer: W) -> csv::Writer<W>
where
    W: Write,
{
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .double_quote(true);
    builder.from_writer(writer)
}

pub fn decode_record(record: &csv::ByteRecord, encoding: &'static Encoding) -> Result<Vec<String>> {
    record
        .iter()
        .map(|field| {
            let (text, _, had_errors) = encoding.decode(field);
            if had_errors {
                anyhow::bail!("Failed to decode text with encoding {}", encoding.name());
            }
            Ok(text.into_owned())
        })
        .collect()
}
