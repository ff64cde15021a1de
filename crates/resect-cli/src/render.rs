//! Table and JSON output.

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use resect_engine::{CaseReport, FindingLine, Tone, tone_for_label};
use resect_model::{CaseRecord, OverallLevel, STATUS_LABELS, Verdict};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// One evaluated case, as listed by `summary`.
#[derive(Debug, Serialize)]
pub struct SummaryRow<'a> {
    pub case: usize,
    pub model: &'a str,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Whether table cells carry colour and attribute escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Styling {
    /// Style only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Serialize)]
struct CaseDocument<'a> {
    case: usize,
    record: &'a CaseRecord,
    verdict: &'a Verdict,
}

pub fn render_case_report(
    position: usize,
    total: usize,
    report: &CaseReport,
    styling: Styling,
) -> String {
    let mut out = format!("Case {position} of {total}: {}\n", model_label(&report.model));
    for section in &report.sections {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Finding"),
            header_cell("Value"),
            header_cell("Evidence"),
        ]);
        apply_case_table_style(&mut table);
        apply_styling(&mut table, styling);
        for line in &section.lines {
            table.add_row(vec![
                Cell::new(line.label).add_attribute(Attribute::Bold),
                value_cell(line),
                evidence_cell(line.evidence.as_deref()),
            ]);
        }
        out.push_str(&format!("\n{}\n{table}\n", section.title));
    }
    out
}

pub fn render_case_json(position: usize, record: &CaseRecord, verdict: &Verdict) -> Result<String> {
    let document = CaseDocument {
        case: position,
        record,
        verdict,
    };
    serde_json::to_string_pretty(&document).context("serialize case")
}

pub fn render_summary_table(rows: &[SummaryRow<'_>], styling: Styling) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Case"),
        header_cell("Model"),
        header_cell("Vascular"),
        header_cell("Metastasis"),
        header_cell("Overall"),
        header_cell("Causes"),
    ]);
    apply_summary_table_style(&mut table);
    apply_styling(&mut table, styling);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows {
        let causes = row.verdict.cause_labels();
        table.add_row(vec![
            Cell::new(row.case),
            Cell::new(model_label(row.model))
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            label_cell(row.verdict.vascular.as_str()),
            label_cell(row.verdict.metastasis.as_str()),
            label_cell(row.verdict.overall.as_str()).add_attribute(Attribute::Bold),
            if causes.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(causes.join(", "))
            },
        ]);
    }

    let mut totals = Table::new();
    totals.set_header(vec![header_cell("Overall"), header_cell("Cases")]);
    apply_table_style(&mut totals);
    apply_styling(&mut totals, styling);
    align_column(&mut totals, 1, CellAlignment::Right);
    for level in [
        OverallLevel::Resectable,
        OverallLevel::PotentiallyResectable,
        OverallLevel::Borderline,
        OverallLevel::PotentiallyBorderline,
        OverallLevel::Unresectable,
    ] {
        let count = rows
            .iter()
            .filter(|row| row.verdict.overall == level)
            .count();
        totals.add_row(vec![label_cell(level.as_str()), count_cell(count)]);
    }
    totals.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(rows.len()).add_attribute(Attribute::Bold),
    ]);

    format!("{table}\n{totals}\n")
}

pub fn render_summary_json(rows: &[SummaryRow<'_>]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("serialize summary")
}

pub fn render_codes_table(styling: Styling) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Label")]);
    apply_table_style(&mut table);
    apply_styling(&mut table, styling);
    for &(code, label) in STATUS_LABELS {
        table.add_row(vec![
            Cell::new(code).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(label),
        ]);
    }
    format!("{table}\n")
}

fn model_label(model: &str) -> &str {
    if model.trim().is_empty() { "-" } else { model }
}

fn value_cell(line: &FindingLine) -> Cell {
    match line.tone {
        Some(tone) => tone_cell(&line.value, tone),
        None => Cell::new(&line.value),
    }
}

fn evidence_cell(evidence: Option<&str>) -> Cell {
    match evidence {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn label_cell(label: &str) -> Cell {
    tone_cell(label, tone_for_label(label))
}

fn tone_cell(value: &str, tone: Tone) -> Cell {
    let color = match tone {
        Tone::Favorable => Color::Green,
        Tone::Guarded => Color::Yellow,
        Tone::Adverse => Color::Red,
        Tone::Neutral => Color::DarkGrey,
    };
    Cell::new(value).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_styling(table: &mut Table, styling: Styling) {
    match styling {
        Styling::Auto => {}
        Styling::Always => {
            table.enforce_styling();
        }
        Styling::Never => {
            table.force_no_tty();
        }
    }
}

fn apply_case_table_style(table: &mut Table) {
    apply_table_style(table);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(26)),
        ColumnConstraint::UpperBoundary(Width::Fixed(24)),
        ColumnConstraint::UpperBoundary(Width::Percentage(60)),
    ]);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Fixed(24)),
        ColumnConstraint::LowerBoundary(Width::Fixed(16)),
        ColumnConstraint::LowerBoundary(Width::Fixed(12)),
        ColumnConstraint::LowerBoundary(Width::Fixed(22)),
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
    ]);
}
