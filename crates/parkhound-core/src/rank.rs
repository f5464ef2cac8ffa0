//! Distance ranking over a filtered park collection.

use crate::geo::{haversine_km, round_km_1dp};
use crate::model::{Coordinates, Park};

/// Result-limit applied by consumers that do not pass an explicit limit.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Returns up to `limit` parks nearest to `reference`, ascending by
/// great-circle distance. Each returned park carries `distance_km`
/// rounded to one decimal place; ordering uses the rounded value, so
/// parks reported at the same distance keep their input order.
///
/// Without a reference point, or with a non-finite/out-of-range one, the
/// first `limit` parks are returned in input order with `distance_km`
/// left as `None`; distance is then unknown, not zero.
///
/// Pure over its input: parks are cloned before the distance is
/// attached, so the base collection and its facility sets are never
/// touched.
#[must_use]
pub fn rank_parks(parks: &[Park], reference: Option<Coordinates>, limit: usize) -> Vec<Park> {
    let Some(reference) = reference.filter(Coordinates::is_valid_reference) else {
        return parks.iter().take(limit).cloned().collect();
    };

    let mut ranked: Vec<Park> = parks
        .iter()
        .map(|park| {
            let mut park = park.clone();
            park.distance_km = Some(round_km_1dp(haversine_km(reference, park.coordinates)));
            park
        })
        .collect();

    // Stable sort; distances are finite by construction (in-region
    // coordinates against a validated reference).
    ranked.sort_by(|a, b| {
        a.distance_km
            .unwrap_or(f64::MAX)
            .total_cmp(&b.distance_km.unwrap_or(f64::MAX))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod rank_test;
