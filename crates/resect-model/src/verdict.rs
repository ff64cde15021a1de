//! Derived resectability classification.
//!
//! Levels serialize as their display labels so JSON consumers see the same
//! strings a clinician reads on screen.

use serde::Serialize;
use std::fmt;

/// Resectability from vascular involvement alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VascularLevel {
    Resectable,
    Borderline,
    #[serde(rename = "Locally Advanced")]
    LocallyAdvanced,
}

impl VascularLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VascularLevel::Resectable => "Resectable",
            VascularLevel::Borderline => "Borderline",
            VascularLevel::LocallyAdvanced => "Locally Advanced",
        }
    }
}

impl fmt::Display for VascularLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resectability from distant spread (distant nodes, hematogenous, peritoneal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetastasisLevel {
    Resectable,
    Indeterminate,
    Unresectable,
}

impl MetastasisLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetastasisLevel::Resectable => "Resectable",
            MetastasisLevel::Indeterminate => "Indeterminate",
            MetastasisLevel::Unresectable => "Unresectable",
        }
    }
}

impl fmt::Display for MetastasisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall verdict combining the vascular and metastasis axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OverallLevel {
    Resectable,
    Borderline,
    #[serde(rename = "Potentially Resectable")]
    PotentiallyResectable,
    #[serde(rename = "Potentially Borderline")]
    PotentiallyBorderline,
    Unresectable,
}

impl OverallLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallLevel::Resectable => "Resectable",
            OverallLevel::Borderline => "Borderline",
            OverallLevel::PotentiallyResectable => "Potentially Resectable",
            OverallLevel::PotentiallyBorderline => "Potentially Borderline",
            OverallLevel::Unresectable => "Unresectable",
        }
    }
}

impl fmt::Display for OverallLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contributing cause attached to a non-resectable verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cause {
    #[serde(rename = "Vascular Involvement")]
    VascularInvolvement,
    #[serde(rename = "Distant Lymph Node Involvement")]
    DistantLymphNodeInvolvement,
    #[serde(rename = "Hematogenous Metastasis")]
    HematogenousMetastasis,
    #[serde(rename = "Peritoneal Seeding")]
    PeritonealSeeding,
    #[serde(rename = "Indeterminate Distant Lymph Node Involvement")]
    IndeterminateDistantLymphNodeInvolvement,
    #[serde(rename = "Indeterminate Hematogenous Metastasis")]
    IndeterminateHematogenousMetastasis,
    #[serde(rename = "Indeterminate Peritoneal Seeding")]
    IndeterminatePeritonealSeeding,
}

impl Cause {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cause::VascularInvolvement => "Vascular Involvement",
            Cause::DistantLymphNodeInvolvement => "Distant Lymph Node Involvement",
            Cause::HematogenousMetastasis => "Hematogenous Metastasis",
            Cause::PeritonealSeeding => "Peritoneal Seeding",
            Cause::IndeterminateDistantLymphNodeInvolvement => {
                "Indeterminate Distant Lymph Node Involvement"
            }
            Cause::IndeterminateHematogenousMetastasis => "Indeterminate Hematogenous Metastasis",
            Cause::IndeterminatePeritonealSeeding => "Indeterminate Peritoneal Seeding",
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification outcome for one case. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub vascular: VascularLevel,
    pub metastasis: MetastasisLevel,
    pub overall: OverallLevel,
    pub causes: Vec<Cause>,
}

impl Verdict {
    pub fn cause_labels(&self) -> Vec<&'static str> {
        self.causes.iter().map(Cause::as_str).collect()
    }
}
