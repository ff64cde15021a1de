//! Per-axis and overall classification rules.
//!
//! Each axis is an existential test over the whole status set with strict
//! precedence: the most severe group present wins, regardless of which site
//! reported it.

use resect_model::{CaseRecord, MetastasisLevel, OverallLevel, VascularLevel};

const VASCULAR_LOCALLY_ADVANCED: &[&str] = &["A2", "V2", "I2"];
const VASCULAR_BORDERLINE: &[&str] = &["A1", "V1", "I1"];
const METASTASIS_POSITIVE: &[&str] = &["LN2", "H2", "P2"];
const METASTASIS_INDETERMINATE: &[&str] = &["LN1", "H1", "P1"];

fn any_in<S: AsRef<str>>(statuses: &[S], group: &[&str]) -> bool {
    statuses
        .iter()
        .any(|status| group.contains(&status.as_ref()))
}

/// Classify vascular involvement from arterial, venous, IVC and aortic codes.
pub fn classify_vascular<S: AsRef<str>>(statuses: &[S]) -> VascularLevel {
    if any_in(statuses, VASCULAR_LOCALLY_ADVANCED) {
        VascularLevel::LocallyAdvanced
    } else if any_in(statuses, VASCULAR_BORDERLINE) {
        VascularLevel::Borderline
    } else {
        VascularLevel::Resectable
    }
}

/// Classify distant spread from distant nodes, hematogenous and peritoneal codes.
pub fn classify_metastasis<S: AsRef<str>>(statuses: &[S]) -> MetastasisLevel {
    if any_in(statuses, METASTASIS_POSITIVE) {
        MetastasisLevel::Unresectable
    } else if any_in(statuses, METASTASIS_INDETERMINATE) {
        MetastasisLevel::Indeterminate
    } else {
        MetastasisLevel::Resectable
    }
}

/// Combine both axes.
///
/// `LocallyAdvanced` and `Unresectable` absorb everything. Indeterminate
/// spread turns the vascular read into its "Potentially" form; it never
/// improves it.
pub fn classify_overall(vascular: VascularLevel, metastasis: MetastasisLevel) -> OverallLevel {
    match (vascular, metastasis) {
        (VascularLevel::LocallyAdvanced, _) | (_, MetastasisLevel::Unresectable) => {
            OverallLevel::Unresectable
        }
        (VascularLevel::Borderline, MetastasisLevel::Indeterminate) => {
            OverallLevel::PotentiallyBorderline
        }
        (VascularLevel::Resectable, MetastasisLevel::Indeterminate) => {
            OverallLevel::PotentiallyResectable
        }
        (VascularLevel::Borderline, MetastasisLevel::Resectable) => OverallLevel::Borderline,
        (VascularLevel::Resectable, MetastasisLevel::Resectable) => OverallLevel::Resectable,
    }
}

/// Recorded vascular codes: celiac axis, CHA, SMA, main portal vein, SMV, IVC, aorta.
pub fn vascular_statuses(record: &CaseRecord) -> Vec<&str> {
    [
        &record.artery.celiac_axis,
        &record.artery.common_hepatic_artery,
        &record.artery.superior_mesenteric_artery,
        &record.vein.main_portal_vein,
        &record.vein.superior_mesenteric_vein,
        &record.inferior_vena_cava,
        &record.aorta,
    ]
    .into_iter()
    .filter_map(|finding| finding.status_code())
    .collect()
}

/// Recorded distant-spread codes: distant nodes, final hematogenous, final peritoneal.
pub fn metastasis_statuses(record: &CaseRecord) -> Vec<&str> {
    [
        record.distant_lymph_node.status.as_str(),
        record.final_hematogenous_metastasis_status.as_str(),
        record.final_peritoneal_seeding_status.as_str(),
    ]
    .into_iter()
    .filter(|status| !status.trim().is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use resect_model::CodedFinding;

    #[test]
    fn vascular_precedence() {
        assert_eq!(classify_vascular(&["A0", "V1"]), VascularLevel::Borderline);
        assert_eq!(classify_vascular(&["A2", "V1"]), VascularLevel::LocallyAdvanced);
        assert_eq!(classify_vascular(&["I2"]), VascularLevel::LocallyAdvanced);
        assert_eq!(classify_vascular(&["A9", "V9", "I0"]), VascularLevel::Resectable);
        assert_eq!(classify_vascular::<&str>(&[]), VascularLevel::Resectable);
    }

    #[test]
    fn vascular_ignores_unknown_codes() {
        assert_eq!(classify_vascular(&["X2", "a2", "LN2"]), VascularLevel::Resectable);
    }

    #[test]
    fn metastasis_precedence() {
        assert_eq!(classify_metastasis(&["LN1", "H2"]), MetastasisLevel::Unresectable);
        assert_eq!(classify_metastasis(&["LN1"]), MetastasisLevel::Indeterminate);
        assert_eq!(classify_metastasis(&["P1", "H0"]), MetastasisLevel::Indeterminate);
        assert_eq!(classify_metastasis::<String>(&[]), MetastasisLevel::Resectable);
    }

    #[test]
    fn overall_lattice() {
        use MetastasisLevel as M;
        use VascularLevel as V;

        assert_eq!(classify_overall(V::LocallyAdvanced, M::Resectable), OverallLevel::Unresectable);
        assert_eq!(classify_overall(V::LocallyAdvanced, M::Indeterminate), OverallLevel::Unresectable);
        assert_eq!(classify_overall(V::Resectable, M::Unresectable), OverallLevel::Unresectable);
        assert_eq!(classify_overall(V::Borderline, M::Unresectable), OverallLevel::Unresectable);
        assert_eq!(classify_overall(V::Borderline, M::Indeterminate), OverallLevel::PotentiallyBorderline);
        assert_eq!(classify_overall(V::Resectable, M::Indeterminate), OverallLevel::PotentiallyResectable);
        assert_eq!(classify_overall(V::Borderline, M::Resectable), OverallLevel::Borderline);
        assert_eq!(classify_overall(V::Resectable, M::Resectable), OverallLevel::Resectable);
    }

    #[test]
    fn status_lists_skip_unrecorded_sites() {
        let mut record = CaseRecord::default();
        assert!(vascular_statuses(&record).is_empty());
        assert!(metastasis_statuses(&record).is_empty());

        record.artery.superior_mesenteric_artery = CodedFinding::new("A1", "");
        record.aorta = CodedFinding::new("A0", "");
        record.final_peritoneal_seeding_status = "P1".to_string();
        assert_eq!(vascular_statuses(&record), vec!["A1", "A0"]);
        assert_eq!(metastasis_statuses(&record), vec!["P1"]);
    }
}
