use std::path::Path;

use anyhow::{Context, Result, bail};
use resect_engine::{CaseReport, evaluate};
use resect_ingest::{IngestOptions, read_case_collection_from_path};
use resect_model::CaseCollection;
use tracing::{debug, info_span};

use crate::render::{
    OutputFormat, Styling, SummaryRow, render_case_json, render_case_report, render_codes_table,
    render_summary_json, render_summary_table,
};

/// Read and normalize every case in `path`. Fails when no row qualifies as a case.
pub fn load_cases(path: &Path, options: &IngestOptions) -> Result<CaseCollection> {
    let collection = read_case_collection_from_path(path, options)
        .with_context(|| format!("load cases from {}", path.display()))?;
    if collection.is_empty() {
        bail!("no case rows found in {}", path.display());
    }
    Ok(collection)
}

pub fn run_show(
    path: &Path,
    options: &IngestOptions,
    position: usize,
    format: OutputFormat,
    styling: Styling,
) -> Result<String> {
    let span = info_span!("show", case = position);
    let _guard = span.enter();
    let collection = load_cases(path, options)?;
    let record = collection.case(position)?;
    match format {
        OutputFormat::Table => {
            let report = CaseReport::build(record);
            Ok(render_case_report(position, collection.len(), &report, styling))
        }
        OutputFormat::Json => render_case_json(position, record, &evaluate(record)),
    }
}

pub fn run_summary(
    path: &Path,
    options: &IngestOptions,
    format: OutputFormat,
    styling: Styling,
) -> Result<String> {
    let span = info_span!("summary");
    let _guard = span.enter();
    let collection = load_cases(path, options)?;
    let rows: Vec<SummaryRow<'_>> = collection
        .iter()
        .enumerate()
        .map(|(index, record)| SummaryRow {
            case: index + 1,
            model: &record.model,
            verdict: evaluate(record),
        })
        .collect();
    debug!(cases = rows.len(), "evaluated collection");
    match format {
        OutputFormat::Table => Ok(render_summary_table(&rows, styling)),
        OutputFormat::Json => render_summary_json(&rows),
    }
}

pub fn run_codes(styling: Styling) -> String {
    render_codes_table(styling)
}
