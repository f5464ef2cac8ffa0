//! Canonical facility tag strings.
//!
//! Tags are plain strings rather than an enum because the keyword→tag
//! mapping is operator configuration (see [`crate::FacilityLexicon`]) and
//! may introduce tags this crate has never heard of. The constants below
//! cover the tags the filter engine and the mapped dataset fields rely on.

pub const DOG_FRIENDLY: &str = "Dog Friendly";
pub const WATER_FOUNTAIN: &str = "Water Fountain";
pub const NIGHT_LIGHTING: &str = "Night Lighting";
pub const FENCING: &str = "Fencing";
// Upper-case spelling matches the source dataset's own labels for these two.
pub const SMALL_DOG_ENCLOSURE: &str = "SMALL DOG ENCLOSURE";
pub const DOG_AGILITY_EQUIPMENT: &str = "DOG AGILITY EQUIPMENT";
