//! Deep merge of loosely shaped values onto a fixed schema.
//!
//! A [`Template`] describes the exact key set of a normalized record. Merging
//! a candidate value onto it keeps every template key at every depth, fills
//! gaps with defaults, and drops keys the template does not know.

use serde_json::{Map, Number, Value};

use crate::cell::format_numeric;

/// Static schema description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// A string slot with its default.
    Scalar(&'static str),
    /// A nested object with a fixed, ordered key set.
    Object(&'static [(&'static str, Template)]),
}

const TEXT: Template = Template::Scalar("");

/// Shape of one coded finding: `{ status, ref }`.
pub const CODED_FINDING_TEMPLATE: Template =
    Template::Object(&[("status", TEXT), ("ref", TEXT)]);

/// Shape of a normalized case record.
pub const CASE_RECORD_TEMPLATE: Template = Template::Object(&[
    ("model", TEXT),
    ("arterial_variations", CODED_FINDING_TEMPLATE),
    (
        "artery",
        Template::Object(&[
            ("celiac_axis", CODED_FINDING_TEMPLATE),
            ("common_hepatic_artery", CODED_FINDING_TEMPLATE),
            ("superior_mesenteric_artery", CODED_FINDING_TEMPLATE),
        ]),
    ),
    (
        "vein",
        Template::Object(&[
            ("main_portal_vein", CODED_FINDING_TEMPLATE),
            ("superior_mesenteric_vein", CODED_FINDING_TEMPLATE),
        ]),
    ),
    ("inferior_vena_cava", CODED_FINDING_TEMPLATE),
    ("aorta", CODED_FINDING_TEMPLATE),
    ("regional_lymph_node", CODED_FINDING_TEMPLATE),
    ("distant_lymph_node", CODED_FINDING_TEMPLATE),
    ("tumor_morphology", TEXT),
    ("tumor_size", TEXT),
    ("adjacent_organ_invasion", TEXT),
    ("tumor_location", TEXT),
    ("bile_duct", CODED_FINDING_TEMPLATE),
    ("main_pancreatic_duct", CODED_FINDING_TEMPLATE),
    ("peritoneal_seeding", TEXT),
    ("final_hematogenous_metastasis_status", TEXT),
    ("hematogenous_metastasis", TEXT),
    ("final_peritoneal_seeding_status", TEXT),
]);

impl Template {
    /// The fully defaulted value for this template.
    pub fn default_value(&self) -> Value {
        normalize_to_template(None, self)
    }

    /// Top-level keys, empty for scalars.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let fields: &'static [(&'static str, Template)] = match *self {
            Template::Scalar(_) => &[],
            Template::Object(fields) => fields,
        };
        fields.iter().map(|(key, _)| *key)
    }

    /// Template of a named field, `None` for scalars and unknown keys.
    pub fn child(&self, key: &str) -> Option<&'static Template> {
        match *self {
            Template::Scalar(_) => None,
            Template::Object(fields) => fields
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, template)| template),
        }
    }
}

/// Merge `candidate` onto `template`.
///
/// Object slots recurse with the candidate's same-named child, or with nothing
/// when the candidate is not an object. Scalar slots take candidate strings as
/// is and the textual form of numbers and booleans; anything else (absent,
/// `null`, arrays, objects) falls back to the template default. The result
/// always has exactly the template's keys, and merging it again is a no-op.
pub fn normalize_to_template(candidate: Option<&Value>, template: &Template) -> Value {
    match template {
        Template::Scalar(default) => Value::String(match candidate {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number_text(number),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => (*default).to_string(),
        }),
        Template::Object(fields) => {
            let source = candidate.and_then(Value::as_object);
            let mut result = Map::with_capacity(fields.len());
            for (key, child) in *fields {
                let value = source.and_then(|object| object.get(*key));
                result.insert((*key).to_string(), normalize_to_template(value, child));
            }
            Value::Object(result)
        }
    }
}

fn number_text(number: &Number) -> String {
    if let Some(value) = number.as_i64() {
        value.to_string()
    } else if let Some(value) = number.as_u64() {
        value.to_string()
    } else {
        number.as_f64().map(format_numeric).unwrap_or_else(|| number.to_string())
    }
}
