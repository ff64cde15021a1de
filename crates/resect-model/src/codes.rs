//! Status code vocabulary.
//!
//! Each coded finding carries a short status token whose prefix names the
//! structure family:
//!
//! - `A*`: arteries (celiac axis, common hepatic artery, SMA, aorta)
//! - `V*`: veins (main portal vein, SMV)
//! - `I*`: inferior vena cava
//! - `VAR*`: arterial variations
//! - `LN*`: regional and distant lymph nodes
//! - `H*`: hematogenous metastasis
//! - `P*`: peritoneal seeding
//! - `D*`: bile duct and main pancreatic duct
//!
//! Vascular codes ending in `9` share the label of their `0` counterpart.

/// Display label for every known status code.
pub const STATUS_LABELS: &[(&str, &str)] = &[
    ("D0", "Negative"),
    ("D1", "Positive"),
    ("A0", "Resectable"),
    ("A1", "Borderline"),
    ("A2", "Locally Advanced"),
    ("A9", "Resectable"),
    ("V0", "Resectable"),
    ("V1", "Borderline"),
    ("V2", "Locally Advanced"),
    ("V9", "Resectable"),
    ("I0", "Resectable"),
    ("I1", "Borderline"),
    ("I2", "Locally Advanced"),
    ("I9", "Resectable"),
    ("VAR1", "Present"),
    ("VAR9", "Absent"),
    ("LN0", "Negative"),
    ("LN1", "Indeterminate"),
    ("LN2", "Positive"),
    ("H0", "Negative"),
    ("H1", "Indeterminate"),
    ("H2", "Positive"),
    ("P0", "Negative"),
    ("P1", "Indeterminate"),
    ("P2", "Positive"),
];

/// Returns the display label for a known code.
pub fn status_label(code: &str) -> Option<&'static str> {
    STATUS_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
}

/// Returns the display label, or the code itself when it is not in the table.
pub fn display_status(code: &str) -> &str {
    status_label(code).unwrap_or(code)
}

pub fn is_known_code(code: &str) -> bool {
    status_label(code).is_some()
}
