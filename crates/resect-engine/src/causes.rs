use resect_model::{CaseRecord, Cause, MetastasisLevel, OverallLevel, VascularLevel};

/// Attribute a verdict to its contributing findings.
///
/// Causes come out in a fixed order: vascular, distant nodes, hematogenous,
/// peritoneal. The metastasis level is implied by the record's own codes, so
/// only the vascular and overall levels steer the result.
pub fn derive_causes(
    record: &CaseRecord,
    vascular: VascularLevel,
    _metastasis: MetastasisLevel,
    overall: OverallLevel,
) -> Vec<Cause> {
    let distant_nodes = &record.distant_lymph_node;
    let hematogenous = record.final_hematogenous_metastasis_status.as_str();
    let peritoneal = record.final_peritoneal_seeding_status.as_str();

    match overall {
        OverallLevel::Unresectable => [
            (
                vascular == VascularLevel::LocallyAdvanced,
                Cause::VascularInvolvement,
            ),
            (distant_nodes.has_status("LN2"), Cause::DistantLymphNodeInvolvement),
            (hematogenous == "H2", Cause::HematogenousMetastasis),
            (peritoneal == "P2", Cause::PeritonealSeeding),
        ]
        .into_iter()
        .filter_map(|(present, cause)| present.then_some(cause))
        .collect(),
        // The vessel that triggered it is not singled out.
        OverallLevel::Borderline => vec![Cause::VascularInvolvement],
        OverallLevel::PotentiallyBorderline | OverallLevel::PotentiallyResectable => [
            (
                distant_nodes.has_status("LN1"),
                Cause::IndeterminateDistantLymphNodeInvolvement,
            ),
            (hematogenous == "H1", Cause::IndeterminateHematogenousMetastasis),
            (peritoneal == "P1", Cause::IndeterminatePeritonealSeeding),
        ]
        .into_iter()
        .filter_map(|(present, cause)| present.then_some(cause))
        .collect(),
        OverallLevel::Resectable => Vec::new(),
    }
}
