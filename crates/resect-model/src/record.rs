use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A status code plus free-text evidence for one anatomic structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodedFinding {
    pub status: String,
    /// Supporting evidence, meaningful only for non-baseline statuses.
    #[serde(rename = "ref")]
    pub reference: String,
}

impl CodedFinding {
    pub fn new(status: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            reference: reference.into(),
        }
    }

    /// The status code, or `None` when nothing was recorded.
    pub fn status_code(&self) -> Option<&str> {
        if self.status.trim().is_empty() {
            None
        } else {
            Some(self.status.as_str())
        }
    }

    pub fn has_status(&self, code: &str) -> bool {
        self.status == code
    }

    /// Evidence text, unless the status is one of `baseline` or the text is empty.
    pub fn evidence_unless(&self, baseline: &[&str]) -> Option<&str> {
        if baseline.contains(&self.status.as_str()) || self.reference.trim().is_empty() {
            None
        } else {
            Some(self.reference.as_str())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artery {
    pub celiac_axis: CodedFinding,
    pub common_hepatic_artery: CodedFinding,
    pub superior_mesenteric_artery: CodedFinding,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vein {
    pub main_portal_vein: CodedFinding,
    pub superior_mesenteric_vein: CodedFinding,
}

/// The normalized, fully-keyed record for one patient case.
///
/// Every field is always present; absent source data shows up as an empty
/// string or an empty [`CodedFinding`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    pub model: String,
    pub arterial_variations: CodedFinding,
    pub artery: Artery,
    pub vein: Vein,
    pub inferior_vena_cava: CodedFinding,
    pub aorta: CodedFinding,
    pub regional_lymph_node: CodedFinding,
    pub distant_lymph_node: CodedFinding,
    pub tumor_morphology: String,
    pub tumor_size: String,
    pub adjacent_organ_invasion: String,
    pub tumor_location: String,
    pub bile_duct: CodedFinding,
    pub main_pancreatic_duct: CodedFinding,
    pub peritoneal_seeding: String,
    pub final_hematogenous_metastasis_status: String,
    pub hematogenous_metastasis: String,
    pub final_peritoneal_seeding_status: String,
}

/// Ordered case records from one ingest, in input row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseCollection {
    cases: Vec<CaseRecord>,
}

impl CaseCollection {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Looks up a case by its one-based position.
    pub fn case(&self, position: usize) -> Result<&CaseRecord> {
        position
            .checked_sub(1)
            .and_then(|index| self.cases.get(index))
            .ok_or(ModelError::CaseOutOfRange {
                position,
                len: self.cases.len(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaseRecord> {
        self.cases.iter()
    }
}

impl From<Vec<CaseRecord>> for CaseCollection {
    fn from(cases: Vec<CaseRecord>) -> Self {
        Self { cases }
    }
}

impl FromIterator<CaseRecord> for CaseCollection {
    fn from_iter<I: IntoIterator<Item = CaseRecord>>(iter: I) -> Self {
        Self {
            cases: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CaseCollection {
    type Item = &'a CaseRecord;
    type IntoIter = std::slice::Iter<'a, CaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
