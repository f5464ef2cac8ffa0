use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_environment_yields_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.result_limit, DEFAULT_RESULT_LIMIT);
    assert_eq!(config.request_timeout_secs, 30);
    assert!(config.lexicon_path.is_none());
    assert!(config
        .park_locations_url
        .contains("datasets/park-locations"));
    assert!(config
        .off_leash_url
        .contains("park-dog-off-leash-areas"));
    assert!(config
        .water_fountain_url
        .contains("park-drinking-fountain-tap-locations"));
}

#[test]
fn default_region_is_brisbane() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config.region, RegionBounds::BRISBANE);
}

#[test]
fn region_overridable_from_env() {
    let mut map = HashMap::new();
    map.insert("PARKHOUND_BOUNDS_SOUTH", "-28.5");
    map.insert("PARKHOUND_BOUNDS_NORTH", "-28.0");
    map.insert("PARKHOUND_BOUNDS_WEST", "153.0");
    map.insert("PARKHOUND_BOUNDS_EAST", "153.6");
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((config.region.south - -28.5).abs() < f64::EPSILON);
    assert!((config.region.east - 153.6).abs() < f64::EPSILON);
}

#[test]
fn invalid_bound_value_fails() {
    let mut map = HashMap::new();
    map.insert("PARKHOUND_BOUNDS_SOUTH", "southwards");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARKHOUND_BOUNDS_SOUTH"),
        "expected InvalidEnvVar(PARKHOUND_BOUNDS_SOUTH), got: {result:?}"
    );
}

#[test]
fn inverted_bounds_fail_validation() {
    let mut map = HashMap::new();
    map.insert("PARKHOUND_BOUNDS_SOUTH", "-27.2");
    map.insert("PARKHOUND_BOUNDS_NORTH", "-27.7");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::Validation(_))),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn invalid_bind_addr_fails() {
    let mut map = HashMap::new();
    map.insert("PARKHOUND_BIND_ADDR", "not-an-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARKHOUND_BIND_ADDR")
    );
}

#[test]
fn invalid_result_limit_fails() {
    let mut map = HashMap::new();
    map.insert("PARKHOUND_RESULT_LIMIT", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PARKHOUND_RESULT_LIMIT")
    );
}

#[test]
fn lexicon_path_read_when_set() {
    let mut map = HashMap::new();
    map.insert("PARKHOUND_LEXICON_PATH", "./config/lexicon.yaml");
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        config.lexicon_path.as_deref(),
        Some(std::path::Path::new("./config/lexicon.yaml"))
    );
}

#[test]
fn dataset_urls_overridable() {
    let mut map = HashMap::new();
    map.insert("PARKHOUND_PARK_LOCATIONS_URL", "http://localhost:9000/parks");
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config.park_locations_url, "http://localhost:9000/parks");
}
