//! Best-effort extraction of a [`Park`] from one raw dataset record.
//!
//! The civic datasets share no schema: coordinates hide under half a
//! dozen shapes and names under another handful of keys. Extraction is
//! an ordered fallback chain per concern: the first strategy that
//! structurally matches wins, with no merging across levels.

use serde_json::{Map, Value};

use parkhound_core::{Coordinates, FacilityLexicon, Park, ParkKind, RegionBounds};

use crate::facilities::extract_facilities;

/// Field-name candidates for the display name, in priority order.
const NAME_FIELDS: &[&str] = &["park_name", "name", "facility_name", "site_name", "title"];

/// Generic coordinate-ish field names scanned as a last resort.
const COORDINATE_FIELDS: &[&str] = &["coordinates", "coord", "position", "geo", "point"];

/// Produce a populated [`Park`] from one raw record, or `None` when the
/// record has no field bag, no recognizable coordinates, or coordinates
/// outside `region`. Rejection is silent by design; a debug log is the
/// only trace.
///
/// `index` is the record's position within its source dataset; it seeds
/// the synthetic name fallback and the provisional id (fusion assigns
/// the final id).
#[must_use]
pub fn extract_park(
    record: &Value,
    index: usize,
    kind: ParkKind,
    region: &RegionBounds,
    lexicon: &FacilityLexicon,
) -> Option<Park> {
    let bag = field_bag(record)?;

    let Some(coordinates) = extract_coordinates(bag) else {
        tracing::debug!(%kind, index, "record rejected: no coordinates");
        return None;
    };

    if !region.contains(coordinates.latitude, coordinates.longitude) {
        tracing::debug!(
            %kind,
            index,
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "record rejected: outside region bounds"
        );
        return None;
    }

    let name = extract_name(bag)
        .unwrap_or_else(|| format!("{kind} {n}", n = index + 1));

    Some(Park {
        id: index,
        name,
        coordinates,
        kind,
        is_off_leash: kind == ParkKind::OffLeash,
        suburb: first_string(bag, &["suburb", "locality", "district"]),
        address: first_string(bag, &["address", "street_address", "full_address"]),
        hours: first_string(bag, &["hours", "opening_hours", "operating_hours"]),
        restrictions: first_string(bag, &["restrictions", "rules"]),
        description: first_string(bag, &["description"]),
        facilities: extract_facilities(bag, lexicon),
        distance_km: None,
    })
}

/// Locates the field bag: `record.record.fields`, then `record.fields`,
/// then the record itself. First match wins; the chosen level must be a
/// JSON object.
pub(crate) fn field_bag(record: &Value) -> Option<&Map<String, Value>> {
    if let Some(fields) = record
        .get("record")
        .and_then(|r| r.get("fields"))
        .and_then(Value::as_object)
    {
        return Some(fields);
    }
    if let Some(fields) = record.get("fields").and_then(Value::as_object) {
        return Some(fields);
    }
    record.as_object()
}

/// Ordered coordinate extraction strategies; the first structural match
/// wins even if a later strategy would also apply.
const COORDINATE_STRATEGIES: &[(&str, fn(&Map<String, Value>) -> Option<Coordinates>)] = &[
    ("geopoint", from_geopoint),
    ("geo_shape", from_geo_shape),
    ("geometry", from_geometry),
    ("location", from_location),
    ("lat/long", from_lat_long),
    ("latitude/longitude", from_latitude_longitude),
    ("lat/lng", from_lat_lng),
    ("generic", from_generic_fields),
];

fn extract_coordinates(bag: &Map<String, Value>) -> Option<Coordinates> {
    for (strategy, extract) in COORDINATE_STRATEGIES {
        if let Some(coordinates) = extract(bag) {
            tracing::trace!(strategy, "coordinates extracted");
            return Some(coordinates);
        }
    }
    None
}

/// `geopoint` pairs arrive as `[lat, lng]` and are flipped.
fn from_geopoint(bag: &Map<String, Value>) -> Option<Coordinates> {
    let pair = bag.get("geopoint")?.as_array()?;
    if pair.len() < 2 {
        return None;
    }
    Some(Coordinates::new(coord_num(&pair[1]), coord_num(&pair[0])))
}

fn from_geo_shape(bag: &Map<String, Value>) -> Option<Coordinates> {
    point_coordinates(bag.get("geo_shape")?)
}

fn from_geometry(bag: &Map<String, Value>) -> Option<Coordinates> {
    point_coordinates(bag.get("geometry")?)
}

/// GeoJSON-style `{ "type": "Point", "coordinates": [lng, lat] }`.
fn point_coordinates(value: &Value) -> Option<Coordinates> {
    if value.get("type").and_then(Value::as_str) != Some("Point") {
        return None;
    }
    lng_lat_pair(value.get("coordinates")?)
}

/// A `location` object with a coordinate pair; no type check, some
/// exports omit the GeoJSON `type` here.
fn from_location(bag: &Map<String, Value>) -> Option<Coordinates> {
    lng_lat_pair(bag.get("location")?.get("coordinates")?)
}

fn from_lat_long(bag: &Map<String, Value>) -> Option<Coordinates> {
    pair_fields(bag, "lat", "long")
}

fn from_latitude_longitude(bag: &Map<String, Value>) -> Option<Coordinates> {
    pair_fields(bag, "latitude", "longitude")
}

fn from_lat_lng(bag: &Map<String, Value>) -> Option<Coordinates> {
    pair_fields(bag, "lat", "lng")
}

/// Last resort: any commonly named field holding a `[lng, lat]` array.
fn from_generic_fields(bag: &Map<String, Value>) -> Option<Coordinates> {
    COORDINATE_FIELDS
        .iter()
        .filter_map(|name| bag.get(*name))
        .find_map(lng_lat_pair)
}

fn pair_fields(bag: &Map<String, Value>, lat_key: &str, lng_key: &str) -> Option<Coordinates> {
    let lat = coord_field(bag, lat_key)?;
    let lng = coord_field(bag, lng_key)?;
    Some(Coordinates::new(coord_num(lng), coord_num(lat)))
}

/// Null and blank-string values do not count as a structural match for a
/// coordinate pair; the chain falls through to the next strategy instead.
fn coord_field<'a>(bag: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    bag.get(key)
        .filter(|v| !v.is_null())
        .filter(|v| v.as_str().map_or(true, |s| !s.trim().is_empty()))
}

fn lng_lat_pair(value: &Value) -> Option<Coordinates> {
    let pair = value.as_array()?;
    if pair.len() < 2 {
        return None;
    }
    Some(Coordinates::new(coord_num(&pair[0]), coord_num(&pair[1])))
}

/// Coordinate values arrive as JSON numbers or numeric strings in the
/// wild. Anything unparseable becomes NaN, which the region check then
/// rejects; a structurally matched strategy never falls through to the
/// next one.
fn coord_num(value: &Value) -> f64 {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .unwrap_or(f64::NAN)
}

fn extract_name(bag: &Map<String, Value>) -> Option<String> {
    first_non_empty(bag, NAME_FIELDS)
}

fn first_string(bag: &Map<String, Value>, candidates: &[&str]) -> String {
    first_non_empty(bag, candidates).unwrap_or_default()
}

fn first_non_empty(bag: &Map<String, Value>, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|key| bag.get(*key))
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
