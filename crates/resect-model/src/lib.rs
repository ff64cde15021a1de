//! Data model for pancreatic cancer resectability staging.
//!
//! The types here are plain data: the normalized [`CaseRecord`] built by
//! `resect-ingest`, and the [`Verdict`] derived from it by `resect-engine`.
//! Everything serializes to nested key-value JSON so renderers can consume it
//! without depending on the engine.

pub mod codes;
pub mod error;
pub mod privacy;
pub mod record;
pub mod verdict;

pub use codes::{STATUS_LABELS, display_status, is_known_code, status_label};
pub use error::{ModelError, Result};
pub use privacy::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
pub use record::{Artery, CaseCollection, CaseRecord, CodedFinding, Vein};
pub use verdict::{Cause, MetastasisLevel, OverallLevel, VascularLevel, Verdict};
