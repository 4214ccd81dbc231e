use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::{debug, info, warn};

use crate::{
    aggregate::Aggregator,
    error::ParseError,
    io_utils,
    record::Record,
    schema::FieldIndexMap,
};

/// Reads `input` once and aggregates every data row.
///
/// The whole file is a single unit of work: the first invalid row aborts the
/// run and the partially built aggregation is dropped.
pub fn parse_file(input: &Path, encoding: &'static Encoding) -> Result<Aggregator> {
    if input.as_os_str().is_empty() {
        return Err(ParseError::MissingInput.into());
    }
    if !input.is_file() {
        return Err(ParseError::InputNotFound {
            path: input.to_path_buf(),
        }
        .into());
    }
    let delimiter = io_utils::resolve_delimiter(input)?;
    info!(
        "Parsing '{}' with delimiter '{}'",
        input.display(),
        delimiter
    );

    let mut reader = io_utils::open_csv_reader_from_path(input, delimiter)?;
    let mut index_map: Option<FieldIndexMap> = None;
    let mut aggregator = Aggregator::new();

    for (row_idx, record) in reader.byte_records().enumerate() {
        let row_number = row_idx + 1;
        let record = record.with_context(|| format!("Reading row {row_number} of {input:?}"))?;
        let decoded = io_utils::decode_record(&record, encoding)
            .with_context(|| format!("Decoding row {row_number} of {input:?}"))?;
        if let Some(map) = &index_map {
            aggregator.ingest(Record::normalize(&decoded, map, row_number)?);
        } else {
            index_map = Some(map_header(&decoded));
        }
    }

    info!(
        "Aggregated {} record(s) into {} unique combination(s)",
        aggregator.records().len(),
        aggregator.entries().len()
    );
    Ok(aggregator)
}

fn map_header(header: &[String]) -> FieldIndexMap {
    let map = FieldIndexMap::from_header(header);
    debug!("Header mapping: {map}");
    for field in map.missing_fields() {
        if field.is_required() {
            warn!("Header has no column for required field '{field}'; its values will be empty");
        } else {
            debug!("Header has no column for '{field}'; defaulting to empty values");
        }
    }
    map
}
