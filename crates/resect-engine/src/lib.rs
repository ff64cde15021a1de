//! Resectability classification engine.
//!
//! Pure functions over a normalized [`CaseRecord`](resect_model::CaseRecord):
//! nothing here performs I/O or mutates its input, so every operation can be
//! called repeatedly and from any thread.

pub mod causes;
pub mod classify;
pub mod report;
pub mod verdict;

pub use causes::derive_causes;
pub use classify::{
    classify_metastasis, classify_overall, classify_vascular, metastasis_statuses,
    vascular_statuses,
};
pub use report::{CaseReport, FindingLine, ReportSection, Tone, tone_for_label};
pub use verdict::evaluate;
