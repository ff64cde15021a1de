//! Raw rows to normalized case records.

use std::io::Read;
use std::path::Path;

use resect_model::{CaseCollection, CaseRecord, redact_value};
use serde_json::{Map, Value};
use tracing::{debug, info, info_span, warn};

use crate::cell::{CellValue, RawRow};
use crate::csv_table::{IngestOptions, read_raw_rows, read_raw_rows_from_path};
use crate::embedded::decode_embedded_object;
use crate::error::Result;
use crate::template::{CASE_RECORD_TEMPLATE, normalize_to_template};

/// Columns copied as plain text.
const TEXT_COLUMNS: &[&str] = &[
    "model",
    "tumor_morphology",
    "tumor_size",
    "adjacent_organ_invasion",
    "tumor_location",
    "peritoneal_seeding",
    "final_hematogenous_metastasis_status",
    "hematogenous_metastasis",
    "final_peritoneal_seeding_status",
];

/// Columns holding single-quoted pseudo-JSON objects.
///
/// `branches_and_other` has no slot in [`CaseRecord`]; it is decoded so that
/// malformed cells still surface in the logs, then dropped by the template.
const EMBEDDED_COLUMNS: &[&str] = &[
    "arterial_variations",
    "artery",
    "inferior_vena_cava",
    "aorta",
    "branches_and_other",
    "vein",
    "regional_lymph_node",
    "distant_lymph_node",
    "bile_duct",
    "main_pancreatic_duct",
];

/// A row is a case when it has a truthy `model` and more than one populated cell.
pub fn is_case_row(row: &RawRow) -> bool {
    row.populated_count() > 1 && row.get("model").is_some_and(CellValue::is_truthy)
}

/// Build the normalized record for one row. Never fails: anything missing or
/// malformed resolves to the template default.
pub fn build_case_record(row: &RawRow) -> CaseRecord {
    let mut candidate = Map::new();
    for column in TEXT_COLUMNS {
        candidate.insert((*column).to_string(), Value::String(row.text(column)));
    }
    for column in EMBEDDED_COLUMNS {
        let decoded = decode_cell(column, row.get(column));
        candidate.insert(
            (*column).to_string(),
            decoded.map_or(Value::Null, Value::Object),
        );
    }

    let normalized = normalize_to_template(Some(&Value::Object(candidate)), &CASE_RECORD_TEMPLATE);
    serde_json::from_value(normalized).unwrap_or_else(|error| {
        warn!(%error, "normalized record did not fit the case shape; using defaults");
        CaseRecord::default()
    })
}

fn decode_cell(column: &str, cell: Option<&CellValue>) -> Option<Map<String, Value>> {
    match cell {
        None | Some(CellValue::Null) => None,
        Some(CellValue::Text(raw)) => decode_embedded_object(Some(raw.as_str())),
        Some(other) => {
            let text = other.to_text();
            warn!(
                column,
                value = %redact_value(&text),
                "expected an embedded object, found a scalar"
            );
            None
        }
    }
}

/// Keep case rows in input order and normalize each one.
pub fn build_case_collection(rows: &[RawRow]) -> CaseCollection {
    let mut excluded = 0usize;
    let collection: CaseCollection = rows
        .iter()
        .enumerate()
        .filter(|(index, row)| {
            let keep = is_case_row(row);
            if !keep {
                excluded += 1;
                debug!(row = index + 1, "excluding row without model or data");
            }
            keep
        })
        .map(|(_, row)| build_case_record(row))
        .collect();
    info!(
        rows = rows.len(),
        cases = collection.len(),
        excluded,
        "built case collection"
    );
    collection
}

pub fn read_case_collection<R: Read>(reader: R, options: &IngestOptions) -> Result<CaseCollection> {
    let rows = read_raw_rows(reader, options)?;
    Ok(build_case_collection(&rows))
}

pub fn read_case_collection_from_path(
    path: &Path,
    options: &IngestOptions,
) -> Result<CaseCollection> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let rows = read_raw_rows_from_path(path, options)?;
    Ok(build_case_collection(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(column, raw)| (*column, CellValue::parse(raw, true)))
            .collect()
    }

    #[test]
    fn rows_need_model_and_two_populated_cells() {
        assert!(is_case_row(&row(&[("model", "m1"), ("tumor_size", "2")])));
        assert!(!is_case_row(&row(&[("model", "m1"), ("tumor_size", "")])));
        assert!(!is_case_row(&row(&[("model", ""), ("tumor_size", "2"), ("aorta", "x")])));
        assert!(!is_case_row(&row(&[("tumor_size", "2"), ("aorta", "x")])));
        assert!(!is_case_row(&row(&[("model", "0"), ("tumor_size", "2")])));
    }

    #[test]
    fn numeric_cells_become_text() {
        let record = build_case_record(&row(&[
            ("model", "42"),
            ("tumor_size", "3.0"),
            ("final_hematogenous_metastasis_status", "H0"),
        ]));
        assert_eq!(record.model, "42");
        assert_eq!(record.tumor_size, "3");
        assert_eq!(record.final_hematogenous_metastasis_status, "H0");
    }

    #[test]
    fn falsy_cells_in_text_columns_are_blank() {
        let record = build_case_record(&row(&[
            ("model", "m"),
            ("tumor_size", "0"),
            ("tumor_morphology", "false"),
            ("tumor_location", "true"),
        ]));
        assert_eq!(record.tumor_size, "");
        assert_eq!(record.tumor_morphology, "");
        assert_eq!(record.tumor_location, "true");
    }

    #[test]
    fn scalar_in_embedded_column_defaults() {
        let record = build_case_record(&row(&[("model", "m"), ("aorta", "12")]));
        assert_eq!(record.aorta.status, "");
        assert_eq!(record.aorta.reference, "");
    }
}
