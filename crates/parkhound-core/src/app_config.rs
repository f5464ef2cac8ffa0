use std::net::SocketAddr;
use std::path::PathBuf;

use crate::geo::RegionBounds;

/// Runtime configuration shared by the server and CLI.
///
/// Everything has a default; the service comes up against the Brisbane
/// open-data portal with no environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Park-locations dataset (one record per park).
    pub park_locations_url: String,
    /// Off-leash-areas dataset; every record is treated as off-leash.
    pub off_leash_url: String,
    /// Drinking-fountain dataset; used only for the name-based join.
    pub water_fountain_url: String,
    /// Records outside this box are rejected during extraction.
    pub region: RegionBounds,
    /// Maximum number of parks returned by ranked queries.
    pub result_limit: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Optional YAML file overriding the built-in facility lexicon.
    pub lexicon_path: Option<PathBuf>,
}
