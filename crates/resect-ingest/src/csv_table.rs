use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::cell::{CellValue, RawRow};
use crate::error::{IngestError, Result};

/// Options controlling how delimited text is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Promote numeric- and boolean-looking cells.
    pub dynamic_typing: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            dynamic_typing: true,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_dynamic_typing(mut self, enable: bool) -> Self {
        self.dynamic_typing = enable;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Read header-keyed rows from delimited text.
///
/// The first record supplies field names. Records may be shorter or longer
/// than the header: missing trailing cells are simply absent from the row and
/// extra cells are ignored.
pub fn read_raw_rows<R: Read>(reader: R, options: &IngestOptions) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| {
                (
                    header.clone(),
                    CellValue::parse(normalize_cell(value), options.dynamic_typing),
                )
            })
            .collect();
        rows.push(row);
    }
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        "read delimited rows"
    );
    Ok(rows)
}

pub fn read_raw_rows_from_path(path: &Path, options: &IngestOptions) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_raw_rows(file, options)
}
