use serde_json::{json, Value};

use super::*;

fn brisbane() -> RegionBounds {
    RegionBounds::BRISBANE
}

fn lexicon() -> FacilityLexicon {
    FacilityLexicon::default()
}

fn fuse(parks: &[Value], off_leash: &[Value], fountains: &[Value]) -> Vec<Park> {
    fuse_parks(parks, off_leash, fountains, &brisbane(), &lexicon())
}

fn park_record(name: &str) -> Value {
    json!({"park_name": name, "geopoint": [-27.5, 153.0]})
}

#[test]
fn fountain_join_matches_decorated_names() {
    let parks = vec![park_record("Riverside Park")];
    let fountains = vec![json!({"park_name": "RIVERSIDE PARK!!"})];

    let fused = fuse(&parks, &[], &fountains);
    assert_eq!(fused.len(), 1);
    assert!(fused[0].has_facility("Water Fountain"));
}

#[test]
fn fountain_join_strips_off_leash_decoration() {
    let off_leash = vec![park_record("New Farm Park Off-Leash Area")];
    let fountains = vec![json!({"site_name": "New Farm"})];

    let fused = fuse(&[], &off_leash, &fountains);
    assert_eq!(fused.len(), 1);
    assert!(fused[0].has_facility("Water Fountain"));
}

#[test]
fn dog_off_leash_names_do_not_match_bare_fountain_names() {
    // "Riverside Dog Off Leash Area" keys as "riverside dog", not
    // "riverside", so the bare park name never joins it.
    let off_leash = vec![park_record("Riverside Dog Off Leash Area")];
    let fountains = vec![json!({"park_name": "Riverside Park"})];

    let fused = fuse(&[], &off_leash, &fountains);
    assert_eq!(fused.len(), 1);
    assert!(!fused[0].has_facility("Water Fountain"));
}

#[test]
fn unmatched_parks_get_no_fountain_tag() {
    let parks = vec![park_record("Victoria Park")];
    let fountains = vec![json!({"park_name": "Somewhere Else"})];

    let fused = fuse(&parks, &[], &fountains);
    assert!(!fused[0].has_facility("Water Fountain"));
}

#[test]
fn fountain_tag_not_duplicated_when_already_present() {
    // The record's own fields already yield "Water Fountain" via the
    // keyword scan; the join must not add a second copy.
    let parks = vec![json!({
        "park_name": "Riverside Park",
        "geopoint": [-27.5, 153.0],
        "water_fountain": "yes"
    })];
    let fountains = vec![json!({"park_name": "Riverside Park"})];

    let fused = fuse(&parks, &[], &fountains);
    assert_eq!(
        fused[0]
            .facilities
            .iter()
            .filter(|t| *t == "Water Fountain")
            .count(),
        1
    );
}

#[test]
fn regular_parks_precede_off_leash_areas() {
    let parks = vec![park_record("Alpha"), park_record("Beta")];
    let off_leash = vec![park_record("Gamma")];

    let fused = fuse(&parks, &off_leash, &[]);
    let names: Vec<&str> = fused.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    assert!(!fused[0].is_off_leash);
    assert!(fused[2].is_off_leash);
}

#[test]
fn ids_follow_fused_positions() {
    let parks = vec![
        json!({"park_name": "Dropped", "latitude": -33.0, "longitude": 151.0}),
        park_record("Kept"),
    ];
    let off_leash = vec![park_record("Off Leash Kept")];

    let fused = fuse(&parks, &off_leash, &[]);
    assert_eq!(fused.len(), 2);
    let ids: Vec<usize> = fused.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn malformed_records_silently_dropped() {
    let parks = vec![
        json!("not an object"),
        json!({"park_name": "No Coordinates"}),
        park_record("Survivor"),
    ];
    let fused = fuse(&parks, &[], &[]);
    assert_eq!(fused.len(), 1);
    assert_eq!(fused[0].name, "Survivor");
}

#[test]
fn all_empty_inputs_fuse_to_empty() {
    assert!(fuse(&[], &[], &[]).is_empty());
}

#[test]
fn fountain_records_without_names_ignored() {
    let parks = vec![park_record("Riverside Park")];
    let fountains = vec![json!({"asset_id": 42}), json!({"park_name": "   "})];
    let fused = fuse(&parks, &[], &fountains);
    assert!(!fused[0].has_facility("Water Fountain"));
}

#[test]
fn nested_fountain_records_join() {
    let parks = vec![park_record("Riverside Park")];
    let fountains = vec![json!({
        "record": {"fields": {"name": "Riverside Park Fountain Site"}}
    })];
    let fused = fuse(&parks, &[], &fountains);
    // "fountain site" does not normalize away, so no match here...
    assert!(!fused[0].has_facility("Water Fountain"));

    let fountains = vec![json!({
        "record": {"fields": {"name": "Riverside Park"}}
    })];
    let fused = fuse(&parks, &[], &fountains);
    assert!(fused[0].has_facility("Water Fountain"));
}
