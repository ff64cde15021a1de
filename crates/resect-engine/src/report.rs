//! Read-only case view.
//!
//! Lays a case out as titled sections of labelled lines, the way a reviewer
//! reads it: tumor characteristics, vascular involvement, metastasis, and the
//! overall verdict. Renderers only decide styling; which evidence to show and
//! how codes read is settled here.

use resect_model::{CaseRecord, CodedFinding, OverallLevel, Verdict, display_status};

use crate::verdict::evaluate;

const NOT_AVAILABLE: &str = "N/A";

/// Severity band of a display label, for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Favorable,
    Guarded,
    Adverse,
    /// Nothing recorded.
    Neutral,
}

pub fn tone_for_label(label: &str) -> Tone {
    match label {
        "Resectable" | "Negative" => Tone::Favorable,
        "Borderline" | "Indeterminate" | "Potentially Borderline" | "Potentially Resectable" => {
            Tone::Guarded
        }
        NOT_AVAILABLE => Tone::Neutral,
        _ => Tone::Adverse,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingLine {
    pub label: &'static str,
    pub value: String,
    /// `None` for lines shown without a severity colour.
    pub tone: Option<Tone>,
    pub evidence: Option<String>,
}

impl FindingLine {
    fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            tone: None,
            evidence: None,
        }
    }

    fn toned(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label,
            tone: Some(tone_for_label(&value)),
            value,
            evidence: None,
        }
    }

    fn with_evidence(mut self, evidence: Option<&str>) -> Self {
        self.evidence = evidence.map(str::to_string);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: &'static str,
    pub lines: Vec<FindingLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub model: String,
    pub verdict: Verdict,
    pub sections: Vec<ReportSection>,
}

fn text_or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

fn coded_value(status: &str) -> &str {
    if status.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        display_status(status)
    }
}

fn finding_line(label: &'static str, finding: &CodedFinding, baseline: &[&str]) -> FindingLine {
    FindingLine::toned(label, coded_value(&finding.status))
        .with_evidence(finding.evidence_unless(baseline))
}

/// Narrative text shown unless the final status is the baseline code.
fn narrative(status: &str, baseline: &str, text: &str) -> Option<String> {
    (status != baseline && !text.trim().is_empty()).then(|| text.to_string())
}

impl CaseReport {
    pub fn build(record: &CaseRecord) -> Self {
        let verdict = evaluate(record);
        let sections = vec![
            tumor_section(record),
            vascular_section(record, &verdict),
            metastasis_section(record, &verdict),
            overall_section(&verdict),
        ];
        Self {
            model: record.model.clone(),
            verdict,
            sections,
        }
    }
}

fn tumor_section(record: &CaseRecord) -> ReportSection {
    let size = if record.tumor_size.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{} cm", record.tumor_size)
    };
    ReportSection {
        title: "Tumor Characteristics",
        lines: vec![
            FindingLine::plain("Location", text_or_na(&record.tumor_location)),
            FindingLine::plain("Size", size),
            FindingLine::plain("Morphology", text_or_na(&record.tumor_morphology)),
            FindingLine::plain(
                "Adjacent Organ Invasion",
                text_or_na(&record.adjacent_organ_invasion),
            ),
            FindingLine::plain(
                "Main Pancreatic Duct",
                coded_value(&record.main_pancreatic_duct.status),
            )
            .with_evidence(record.main_pancreatic_duct.evidence_unless(&["D0"])),
            FindingLine::plain("Bile Duct", coded_value(&record.bile_duct.status))
                .with_evidence(record.bile_duct.evidence_unless(&["D0"])),
        ],
    }
}

fn vascular_section(record: &CaseRecord, verdict: &Verdict) -> ReportSection {
    const ARTERY_BASELINE: &[&str] = &["A0", "A9"];
    const VEIN_BASELINE: &[&str] = &["V0", "V9"];
    ReportSection {
        title: "Vascular Involvement",
        lines: vec![
            FindingLine::plain(
                "Arterial Variations",
                coded_value(&record.arterial_variations.status),
            )
            .with_evidence(record.arterial_variations.evidence_unless(&["VAR9"])),
            finding_line("Celiac Axis", &record.artery.celiac_axis, ARTERY_BASELINE),
            finding_line(
                "Common Hepatic Artery",
                &record.artery.common_hepatic_artery,
                ARTERY_BASELINE,
            ),
            finding_line(
                "Superior Mesenteric Artery",
                &record.artery.superior_mesenteric_artery,
                ARTERY_BASELINE,
            ),
            finding_line("Main Portal Vein", &record.vein.main_portal_vein, VEIN_BASELINE),
            finding_line(
                "Superior Mesenteric Vein",
                &record.vein.superior_mesenteric_vein,
                VEIN_BASELINE,
            ),
            finding_line("Inferior Vena Cava", &record.inferior_vena_cava, &["I0", "I9"]),
            finding_line("Aorta", &record.aorta, ARTERY_BASELINE),
            FindingLine::toned("Resectability", verdict.vascular.as_str()),
        ],
    }
}

fn metastasis_section(record: &CaseRecord, verdict: &Verdict) -> ReportSection {
    let hematogenous = &record.final_hematogenous_metastasis_status;
    let peritoneal = &record.final_peritoneal_seeding_status;
    ReportSection {
        title: "Metastasis",
        lines: vec![
            finding_line("Regional Lymph Nodes", &record.regional_lymph_node, &["LN0"]),
            finding_line("Distant Lymph Nodes", &record.distant_lymph_node, &["LN0"]),
            FindingLine {
                evidence: narrative(hematogenous, "H0", &record.hematogenous_metastasis),
                ..FindingLine::toned("Hematogenous Metastasis", coded_value(hematogenous))
            },
            FindingLine {
                evidence: narrative(peritoneal, "P0", &record.peritoneal_seeding),
                ..FindingLine::toned("Peritoneal Seeding", coded_value(peritoneal))
            },
            FindingLine::toned("Resectability", verdict.metastasis.as_str()),
        ],
    }
}

fn overall_section(verdict: &Verdict) -> ReportSection {
    let mut lines = vec![FindingLine::toned("Overall", verdict.overall.as_str())];
    if verdict.overall != OverallLevel::Resectable {
        lines.push(FindingLine::plain("Causes", verdict.cause_labels().join(", ")));
    }
    ReportSection {
        title: "Overall Resectability",
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones() {
        assert_eq!(tone_for_label("Negative"), Tone::Favorable);
        assert_eq!(tone_for_label("Potentially Resectable"), Tone::Guarded);
        assert_eq!(tone_for_label("Locally Advanced"), Tone::Adverse);
        assert_eq!(tone_for_label("X7"), Tone::Adverse);
        assert_eq!(tone_for_label("N/A"), Tone::Neutral);
    }

    #[test]
    fn narrative_needs_abnormal_status_and_text() {
        assert_eq!(narrative("H1", "H0", "liver lesion"), Some("liver lesion".to_string()));
        assert_eq!(narrative("H0", "H0", "liver lesion"), None);
        assert_eq!(narrative("H2", "H0", " "), None);
        assert_eq!(narrative("", "H0", "pending"), Some("pending".to_string()));
    }
}
