use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use parkhound_core::{filter_parks, rank_parks, Coordinates, FilterSet, Park};

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct HealthData {
    status: &'static str,
    parks: usize,
}

pub(super) async fn health(State(state): State<AppState>) -> Json<HealthData> {
    let parks = state.parks.read().await;
    Json(HealthData {
        status: "ok",
        parks: parks.len(),
    })
}

/// The full fused collection, pre-filter. Consumers use it to build
/// filter option lists and counts.
pub(super) async fn list_parks(State(state): State<AppState>) -> Json<ApiResponse<Vec<Park>>> {
    let parks = state.parks.read().await;
    let data: Vec<Park> = parks.clone();
    let count = data.len();
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(count),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct NearbyQuery {
    lat: Option<f64>,
    lng: Option<f64>,
    limit: Option<usize>,
    night_lighting: bool,
    fenced: bool,
    off_leash: bool,
    small_dog_enclosure: bool,
    agility: bool,
    water_fountain: bool,
}

impl NearbyQuery {
    fn filters(&self) -> FilterSet {
        FilterSet {
            night_lighting: self.night_lighting,
            fenced: self.fenced,
            off_leash: self.off_leash,
            small_dog_enclosure: self.small_dog_enclosure,
            agility: self.agility,
            water_fountain: self.water_fountain,
        }
    }

    /// Both coordinates or nothing; a half-specified reference point is
    /// treated as absent, which downgrades to unranked truncation.
    fn reference(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lng, lat)),
            _ => None,
        }
    }
}

/// Filtered, distance-ranked view. Without a usable reference point the
/// first `limit` filtered parks come back in input order with unknown
/// distance.
pub(super) async fn nearby_parks(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Json<ApiResponse<Vec<Park>>> {
    let limit = query.limit.unwrap_or(state.config.result_limit);
    let parks = state.parks.read().await;

    let filtered = filter_parks(&parks, &query.filters());
    let ranked = rank_parks(&filtered, query.reference(), limit);

    let count = ranked.len();
    Json(ApiResponse {
        data: ranked,
        meta: ResponseMeta::new(count),
    })
}

#[derive(Debug, Serialize)]
pub(super) struct ReloadData {
    parks: usize,
}

/// Wholesale rebuild from the sources. The previous collection stays
/// visible until the new one is ready.
pub(super) async fn reload_parks(State(state): State<AppState>) -> Json<ApiResponse<ReloadData>> {
    let fresh =
        parkhound_ingest::load_parks(&state.client, &state.config, &state.lexicon).await;
    let count = fresh.len();
    *state.parks.write().await = fresh;
    tracing::info!(parks = count, "park collection reloaded");

    Json(ApiResponse {
        data: ReloadData { parks: count },
        meta: ResponseMeta::new(count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_query_defaults_to_no_filters() {
        let query = NearbyQuery::default();
        assert!(query.filters().is_empty());
        assert!(query.reference().is_none());
        assert!(query.limit.is_none());
    }

    #[test]
    fn nearby_query_maps_flags() {
        let query: NearbyQuery =
            serde_json::from_value(serde_json::json!({"off_leash": true, "fenced": true}))
                .unwrap();
        let filters = query.filters();
        assert!(filters.off_leash);
        assert!(filters.fenced);
        assert!(!filters.water_fountain);
    }

    #[test]
    fn half_specified_reference_is_absent() {
        let query: NearbyQuery =
            serde_json::from_value(serde_json::json!({"lat": -27.4698})).unwrap();
        assert!(query.reference().is_none());
    }

    #[test]
    fn full_reference_preserves_lat_lng() {
        let query: NearbyQuery =
            serde_json::from_value(serde_json::json!({"lat": -27.4698, "lng": 153.0251}))
                .unwrap();
        let reference = query.reference().unwrap();
        assert!((reference.latitude - -27.4698).abs() < 1e-9);
        assert!((reference.longitude - 153.0251).abs() < 1e-9);
    }
}
