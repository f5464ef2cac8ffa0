use std::collections::BTreeSet;

use super::*;
use crate::model::ParkKind;

fn make_park(id: usize, name: &str, longitude: f64, latitude: f64) -> Park {
    Park {
        id,
        name: name.to_string(),
        coordinates: Coordinates::new(longitude, latitude),
        kind: ParkKind::Regular,
        is_off_leash: false,
        suburb: String::new(),
        address: String::new(),
        hours: String::new(),
        restrictions: String::new(),
        description: String::new(),
        facilities: BTreeSet::new(),
        distance_km: None,
    }
}

/// The five built-in sample parks, by coordinates only.
fn sample_parks() -> Vec<Park> {
    vec![
        make_park(0, "South Bank Parklands", 153.0251, -27.4748),
        make_park(1, "New Farm Park Off-Leash Area", 153.0515, -27.4689),
        make_park(2, "Roma Street Parkland", 153.0186, -27.4634),
        make_park(3, "Kangaroo Point Cliffs Park", 153.0351, -27.4798),
        make_park(4, "City Botanic Gardens", 153.0298, -27.4738),
    ]
}

/// Brisbane CBD, the default reference point.
fn cbd() -> Coordinates {
    Coordinates::new(153.0251, -27.4698)
}

#[test]
fn nearest_sample_park_to_cbd_is_south_bank() {
    let ranked = rank_parks(&sample_parks(), Some(cbd()), 1);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "South Bank Parklands");
}

#[test]
fn ranked_parks_sorted_ascending() {
    let ranked = rank_parks(&sample_parks(), Some(cbd()), 20);
    assert_eq!(ranked.len(), 5);
    let distances: Vec<f64> = ranked.iter().map(|p| p.distance_km.unwrap()).collect();
    let mut sorted = distances.clone();
    sorted.sort_by(f64::total_cmp);
    assert_eq!(distances, sorted);
}

#[test]
fn distances_rounded_to_one_decimal() {
    let ranked = rank_parks(&sample_parks(), Some(cbd()), 20);
    for park in &ranked {
        let d = park.distance_km.unwrap();
        assert!((d * 10.0 - (d * 10.0).round()).abs() < 1e-9, "not 1dp: {d}");
    }
}

#[test]
fn limit_truncates_results() {
    let ranked = rank_parks(&sample_parks(), Some(cbd()), 3);
    assert_eq!(ranked.len(), 3);
}

#[test]
fn no_reference_returns_input_order_without_distances() {
    let ranked = rank_parks(&sample_parks(), None, 3);
    assert_eq!(ranked.len(), 3);
    let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "South Bank Parklands",
            "New Farm Park Off-Leash Area",
            "Roma Street Parkland"
        ]
    );
    assert!(ranked.iter().all(|p| p.distance_km.is_none()));
}

#[test]
fn invalid_reference_falls_back_to_unranked() {
    for bad in [
        Coordinates::new(f64::NAN, -27.4698),
        Coordinates::new(153.0251, f64::NAN),
        Coordinates::new(153.0251, 120.0),
        Coordinates::new(400.0, -27.4698),
    ] {
        let ranked = rank_parks(&sample_parks(), Some(bad), 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "South Bank Parklands");
        assert!(ranked.iter().all(|p| p.distance_km.is_none()));
    }
}

#[test]
fn ranking_does_not_mutate_input() {
    let parks = sample_parks();
    let _ranked = rank_parks(&parks, Some(cbd()), 5);
    assert!(parks.iter().all(|p| p.distance_km.is_none()));
    assert_eq!(parks[0].name, "South Bank Parklands");
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(rank_parks(&[], Some(cbd()), 20).is_empty());
    assert!(rank_parks(&[], None, 20).is_empty());
}
