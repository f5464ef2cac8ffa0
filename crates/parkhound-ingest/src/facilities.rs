//! Facility tag derivation from raw record fields.
//!
//! Two passes: a generic keyword scan driven by the configured
//! [`FacilityLexicon`], then a fixed set of mapped boolean-like dataset
//! fields. Both feed the same set, so a tag discovered twice still
//! appears once.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use parkhound_core::facility;
use parkhound_core::FacilityLexicon;

/// The tri-state reading of a boolean-like dataset field. The sources
/// disagree on how to say "yes" (`true`, `1`, `"Y"`, `"YES"`), so every
/// mapped field goes through this one parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Affirmation {
    Affirmed,
    Denied,
    Absent,
}

impl Affirmation {
    pub(crate) fn parse(value: Option<&Value>, lexicon: &FacilityLexicon) -> Self {
        match value {
            None | Some(Value::Null) => Affirmation::Absent,
            Some(Value::Bool(true)) => Affirmation::Affirmed,
            Some(Value::Bool(false)) => Affirmation::Denied,
            Some(Value::Number(n)) => {
                if n.as_f64() == Some(1.0) {
                    Affirmation::Affirmed
                } else {
                    Affirmation::Denied
                }
            }
            Some(Value::String(s)) => {
                if lexicon.affirms(s) {
                    Affirmation::Affirmed
                } else {
                    Affirmation::Denied
                }
            }
            Some(_) => Affirmation::Denied,
        }
    }

    pub(crate) fn is_affirmed(self) -> bool {
        self == Affirmation::Affirmed
    }
}

/// Derives the facility tag set for one record.
///
/// Starts from the unconditional "Dog Friendly" tag, then scans every
/// field name and textual value against the lexicon keywords, then the
/// configured free-text fields, then the mapped boolean-like fields.
pub(crate) fn extract_facilities(
    bag: &Map<String, Value>,
    lexicon: &FacilityLexicon,
) -> BTreeSet<String> {
    let mut facilities = BTreeSet::new();
    facilities.insert(facility::DOG_FRIENDLY.to_string());

    scan_keyed_fields(bag, lexicon, &mut facilities);
    scan_text_fields(bag, lexicon, &mut facilities);
    apply_mapped_fields(bag, lexicon, &mut facilities);

    facilities
}

/// A field counts as evidence of a facility when its *name* contains the
/// keyword (present-by-naming), or when its textual *value* contains the
/// keyword and the value affirms it.
fn scan_keyed_fields(
    bag: &Map<String, Value>,
    lexicon: &FacilityLexicon,
    facilities: &mut BTreeSet<String>,
) {
    for (key, value) in bag {
        let lower_key = key.to_lowercase();
        let lower_value = value.as_str().map(str::to_lowercase).unwrap_or_default();

        // A longer value can both mention the keyword and affirm it
        // ("yes - bbq available"), so affirmation here accepts either an
        // exact affirmative value or an embedded "yes".
        let value_affirms = Affirmation::parse(Some(value), lexicon).is_affirmed()
            || lower_value.contains("yes");

        for (keyword, tag) in &lexicon.keywords {
            if lower_key.contains(keyword.as_str()) {
                facilities.insert(tag.clone());
            } else if lower_value.contains(keyword.as_str()) && value_affirms {
                facilities.insert(tag.clone());
            }
        }
    }
}

/// Free-text fields (descriptions, amenity lists) are scanned wholesale:
/// a keyword appearing anywhere in the text counts.
fn scan_text_fields(
    bag: &Map<String, Value>,
    lexicon: &FacilityLexicon,
    facilities: &mut BTreeSet<String>,
) {
    for field_name in &lexicon.text_fields {
        let Some(value) = bag.get(field_name) else {
            continue;
        };

        let text = match value {
            Value::String(s) => s.to_lowercase(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase(),
            _ => continue,
        };
        if text.is_empty() {
            continue;
        }

        for (keyword, tag) in &lexicon.keywords {
            if text.contains(keyword.as_str()) {
                facilities.insert(tag.clone());
            }
        }
    }
}

/// The off-leash dataset carries explicit per-park attribute columns.
/// Each one independently appends a fixed tag when affirmed; fencing is
/// special-cased to an exact "fully fenced" value so partially fenced
/// areas never count.
fn apply_mapped_fields(
    bag: &Map<String, Value>,
    lexicon: &FacilityLexicon,
    facilities: &mut BTreeSet<String>,
) {
    if Affirmation::parse(mapped_field(bag, "LIGHTING"), lexicon).is_affirmed() {
        facilities.insert(facility::NIGHT_LIGHTING.to_string());
    }

    if let Some(fencing) = mapped_field(bag, "FENCING").and_then(Value::as_str) {
        if fencing.trim().eq_ignore_ascii_case("fully fenced") {
            facilities.insert(facility::FENCING.to_string());
        }
    }

    if Affirmation::parse(mapped_field(bag, "SMALL_DOG_ENCLOSURE"), lexicon).is_affirmed() {
        facilities.insert(facility::SMALL_DOG_ENCLOSURE.to_string());
    }

    if Affirmation::parse(mapped_field(bag, "DOG_AGILITY_EQUIPMENT"), lexicon).is_affirmed() {
        facilities.insert(facility::DOG_AGILITY_EQUIPMENT.to_string());
    }
}

/// The datasets expose these columns in upper case, but exports have
/// been seen with lower-cased keys. Upper case wins when both exist.
fn mapped_field<'a>(bag: &'a Map<String, Value>, upper_key: &str) -> Option<&'a Value> {
    bag.get(upper_key)
        .or_else(|| bag.get(upper_key.to_lowercase().as_str()))
}
