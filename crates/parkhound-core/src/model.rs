use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Whether a park came from the general park-locations dataset or the
/// dedicated off-leash-areas dataset. A provenance tag, not a behavior
/// switch: filtering keys off [`Park::is_off_leash`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParkKind {
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "off-leash")]
    OffLeash,
}

impl std::fmt::Display for ParkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParkKind::Regular => write!(f, "regular"),
            ParkKind::OffLeash => write!(f, "off-leash"),
        }
    }
}

/// A WGS84 point. Longitude first to match the GeoJSON pair ordering the
/// source datasets use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// A usable ranking reference point: finite and inside the valid
    /// WGS84 range. Out-of-range points would produce NaN-tainted or
    /// nonsensical distances, so ranking refuses them up front.
    #[must_use]
    pub fn is_valid_reference(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The canonical park entity produced by fusion.
///
/// Every park in a fused collection has in-region coordinates; records
/// that fail region validation are dropped during extraction, never
/// repaired. The collection is rebuilt wholesale on each load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Park {
    /// Position in the fused collection. Stable within one load cycle.
    pub id: usize,
    /// Never empty; extraction falls back to `"<kind> <n>"`.
    pub name: String,
    pub coordinates: Coordinates,
    pub kind: ParkKind,
    pub is_off_leash: bool,
    #[serde(default)]
    pub suburb: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub restrictions: String,
    #[serde(default)]
    pub description: String,
    /// A set: the same tag can be discovered by several extraction paths
    /// but must appear once.
    pub facilities: BTreeSet<String>,
    /// Attached by ranking only; `None` everywhere else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl Park {
    #[must_use]
    pub fn has_facility(&self, tag: &str) -> bool {
        self.facilities.contains(tag)
    }
}
