//! Predicate-based selection over a fused park collection.

use serde::{Deserialize, Serialize};

use crate::facility;
use crate::model::Park;

/// The six independently toggleable filter flags. All default to off,
/// which imposes no constraint at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub night_lighting: bool,
    pub fenced: bool,
    pub off_leash: bool,
    pub small_dog_enclosure: bool,
    pub agility: bool,
    pub water_fountain: bool,
}

impl FilterSet {
    /// True when no flag is active, i.e. filtering is the identity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }

    /// AND-combined across active flags only; inactive flags impose no
    /// constraint. In particular `off_leash == false` never excludes
    /// off-leash parks; the flag is positive-only.
    #[must_use]
    pub fn matches(&self, park: &Park) -> bool {
        if self.night_lighting && !park.has_facility(facility::NIGHT_LIGHTING) {
            return false;
        }
        if self.fenced && !park.has_facility(facility::FENCING) {
            return false;
        }
        if self.off_leash && !park.is_off_leash {
            return false;
        }
        if self.small_dog_enclosure && !park.has_facility(facility::SMALL_DOG_ENCLOSURE) {
            return false;
        }
        if self.agility && !park.has_facility(facility::DOG_AGILITY_EQUIPMENT) {
            return false;
        }
        if self.water_fountain && !park.has_facility(facility::WATER_FOUNTAIN) {
            return false;
        }
        true
    }
}

/// Returns the parks matching `filters`, preserving input order. Pure:
/// the input collection is never mutated.
#[must_use]
pub fn filter_parks(parks: &[Park], filters: &FilterSet) -> Vec<Park> {
    parks
        .iter()
        .filter(|park| filters.matches(park))
        .cloned()
        .collect()
}
