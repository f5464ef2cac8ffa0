//! Built-in sample parks, used when the live datasets yield nothing
//! usable. A defined degraded mode for demos and offline operation, not
//! an error path.

use std::collections::BTreeSet;

use parkhound_core::{Coordinates, Park, ParkKind};

struct SamplePark {
    name: &'static str,
    kind: ParkKind,
    longitude: f64,
    latitude: f64,
    suburb: &'static str,
    address: &'static str,
    facilities: &'static [&'static str],
}

const SAMPLE_PARKS: &[SamplePark] = &[
    SamplePark {
        name: "South Bank Parklands",
        kind: ParkKind::Regular,
        longitude: 153.0251,
        latitude: -27.4748,
        suburb: "South Brisbane",
        address: "Grey Street, South Brisbane QLD 4101",
        facilities: &["Toilets", "Parking", "Water Fountain", "Seating"],
    },
    SamplePark {
        name: "New Farm Park Off-Leash Area",
        kind: ParkKind::OffLeash,
        longitude: 153.0515,
        latitude: -27.4689,
        suburb: "New Farm",
        address: "Brunswick Street, New Farm QLD 4005",
        facilities: &["Toilets", "Parking", "Water Fountain"],
    },
    SamplePark {
        name: "Roma Street Parkland",
        kind: ParkKind::Regular,
        longitude: 153.0186,
        latitude: -27.4634,
        suburb: "Brisbane City",
        address: "1 Parkland Boulevard, Brisbane City QLD 4000",
        facilities: &["Toilets", "Parking", "Playground", "BBQ"],
    },
    SamplePark {
        name: "Kangaroo Point Cliffs Park",
        kind: ParkKind::OffLeash,
        longitude: 153.0351,
        latitude: -27.4798,
        suburb: "Kangaroo Point",
        address: "River Terrace, Kangaroo Point QLD 4169",
        facilities: &["Parking", "Seating"],
    },
    SamplePark {
        name: "City Botanic Gardens",
        kind: ParkKind::Regular,
        longitude: 153.0298,
        latitude: -27.4738,
        suburb: "Brisbane City",
        address: "Alice Street, Brisbane City QLD 4000",
        facilities: &["Toilets", "Water Fountain", "Seating"],
    },
];

/// The five built-in Brisbane parks, both kinds represented.
#[must_use]
pub fn sample_parks() -> Vec<Park> {
    SAMPLE_PARKS
        .iter()
        .enumerate()
        .map(|(id, sample)| Park {
            id,
            name: sample.name.to_string(),
            coordinates: Coordinates::new(sample.longitude, sample.latitude),
            kind: sample.kind,
            is_off_leash: sample.kind == ParkKind::OffLeash,
            suburb: sample.suburb.to_string(),
            address: sample.address.to_string(),
            hours: String::new(),
            restrictions: String::new(),
            description: String::new(),
            facilities: sample
                .facilities
                .iter()
                .map(|s| (*s).to_string())
                .collect::<BTreeSet<_>>(),
            distance_km: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_parks_with_both_kinds() {
        let parks = sample_parks();
        assert_eq!(parks.len(), 5);
        assert_eq!(parks.iter().filter(|p| p.is_off_leash).count(), 2);
        assert_eq!(parks.iter().filter(|p| !p.is_off_leash).count(), 3);
    }

    #[test]
    fn sample_coordinates_are_in_region() {
        use parkhound_core::RegionBounds;
        let parks = sample_parks();
        assert!(parks.iter().all(|p| RegionBounds::BRISBANE
            .contains(p.coordinates.latitude, p.coordinates.longitude)));
    }

    #[test]
    fn ids_are_sequential() {
        let ids: Vec<usize> = sample_parks().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
