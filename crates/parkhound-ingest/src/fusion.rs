//! Merges the three raw datasets into one canonical park collection.
//!
//! The fountain dataset contributes no parks of its own: it is reduced
//! to a set of normalized park names, and any fused park whose
//! normalized name appears in that set gains the "Water Fountain" tag.

use std::collections::BTreeSet;

use serde_json::Value;

use parkhound_core::{facility, FacilityLexicon, Park, ParkKind, RegionBounds};

use crate::extract::extract_park;
use crate::normalize::normalize_park_name;

/// Name candidates for fountain-site records. Slightly different
/// priority than park records: fountain exports favor `site_name`.
const FOUNTAIN_NAME_FIELDS: &[&str] = &["park_name", "name", "site_name", "facility_name", "title"];

/// Fuses the three raw record collections into the canonical `Vec<Park>`.
///
/// Regular parks come first, off-leash areas after, each preserving
/// source order; ids reflect the final position. Records that fail
/// extraction are dropped silently. An empty result is a valid outcome;
/// the caller decides whether to fall back to sample data.
#[must_use]
pub fn fuse_parks(
    parks: &[Value],
    off_leash_areas: &[Value],
    water_fountains: &[Value],
    region: &RegionBounds,
    lexicon: &FacilityLexicon,
) -> Vec<Park> {
    let fountain_names = fountain_name_set(water_fountains);
    tracing::debug!(
        fountain_names = fountain_names.len(),
        "built fountain membership set"
    );

    let mut fused: Vec<Park> = Vec::new();
    let mut regular_processed = 0usize;
    let mut off_leash_processed = 0usize;

    for (index, record) in parks.iter().enumerate() {
        if let Some(mut park) = extract_park(record, index, ParkKind::Regular, region, lexicon) {
            tag_water_fountain(&mut park, &fountain_names);
            fused.push(park);
            regular_processed += 1;
        }
    }

    for (index, record) in off_leash_areas.iter().enumerate() {
        if let Some(mut park) = extract_park(record, index, ParkKind::OffLeash, region, lexicon) {
            tag_water_fountain(&mut park, &fountain_names);
            fused.push(park);
            off_leash_processed += 1;
        }
    }

    // Final ids follow fused order, stable until the next load.
    for (id, park) in fused.iter_mut().enumerate() {
        park.id = id;
    }

    tracing::info!(
        regular = regular_processed,
        regular_input = parks.len(),
        off_leash = off_leash_processed,
        off_leash_input = off_leash_areas.len(),
        total = fused.len(),
        "fused park datasets"
    );

    fused
}

/// The set of normalized park names that have a drinking fountain.
fn fountain_name_set(water_fountains: &[Value]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for record in water_fountains {
        let Some(bag) = crate::extract::field_bag(record) else {
            continue;
        };

        let raw_name = FOUNTAIN_NAME_FIELDS
            .iter()
            .filter_map(|key| bag.get(*key))
            .filter_map(Value::as_str)
            .find(|s| !s.trim().is_empty());

        if let Some(raw_name) = raw_name {
            let key = normalize_park_name(raw_name);
            if !key.is_empty() {
                names.insert(key);
            }
        }
    }
    names
}

fn tag_water_fountain(park: &mut Park, fountain_names: &BTreeSet<String>) {
    let key = normalize_park_name(&park.name);
    if !key.is_empty() && fountain_names.contains(&key) {
        park.facilities.insert(facility::WATER_FOUNTAIN.to_string());
    }
}

#[cfg(test)]
#[path = "fusion_test.rs"]
mod fusion_test;
