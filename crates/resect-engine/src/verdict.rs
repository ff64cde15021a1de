use resect_model::{CaseRecord, Verdict, is_known_code};
use tracing::{debug, trace};

use crate::causes::derive_causes;
use crate::classify::{
    classify_metastasis, classify_overall, classify_vascular, metastasis_statuses,
    vascular_statuses,
};

/// Derive the full verdict for one case.
pub fn evaluate(record: &CaseRecord) -> Verdict {
    let vascular_codes = vascular_statuses(record);
    let metastasis_codes = metastasis_statuses(record);
    for code in vascular_codes
        .iter()
        .chain(&metastasis_codes)
        .filter(|code| !is_known_code(code))
    {
        debug!(model = %record.model, code = %code, "unrecognized status code does not affect classification");
    }

    let vascular = classify_vascular(&vascular_codes);
    let metastasis = classify_metastasis(&metastasis_codes);
    let overall = classify_overall(vascular, metastasis);
    let causes = derive_causes(record, vascular, metastasis, overall);
    trace!(
        model = %record.model,
        vascular = %vascular,
        metastasis = %metastasis,
        overall = %overall,
        causes = causes.len(),
        "evaluated case"
    );
    Verdict {
        vascular,
        metastasis,
        overall,
        causes,
    }
}
