//! Bounding-box checks and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::model::Coordinates;

/// Mean Earth radius in kilometers, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// The geographic box that decides which records count as "in region".
/// Records outside it are dropped during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl RegionBounds {
    /// Greater Brisbane.
    pub const BRISBANE: RegionBounds = RegionBounds {
        south: -27.7,
        north: -27.2,
        west: 152.8,
        east: 153.3,
    };

    /// Inclusive containment check. NaN coordinates never pass.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.south
            && latitude <= self.north
            && longitude >= self.west
            && longitude <= self.east
    }
}

impl Default for RegionBounds {
    fn default() -> Self {
        Self::BRISBANE
    }
}

/// Great-circle distance between two points in kilometers (haversine).
#[must_use]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Rounds a distance to one decimal place, the precision reported to
/// consumers and used for ordering.
#[must_use]
pub fn round_km_1dp(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
