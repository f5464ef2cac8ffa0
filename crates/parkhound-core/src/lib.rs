//! Domain model and pure engines for the Brisbane dog-park directory.
//!
//! This crate owns the canonical [`Park`] model, the geographic helpers,
//! and the two pure stages of the pipeline: filtering ([`filter_parks`])
//! and distance ranking ([`rank_parks`]). Dataset ingestion lives in
//! `parkhound-ingest`; this crate has no I/O besides config loading.

mod app_config;
mod config;
pub mod facility;
mod filter;
pub mod geo;
mod lexicon;
mod model;
mod rank;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use filter::{filter_parks, FilterSet};
pub use geo::{haversine_km, RegionBounds};
pub use lexicon::{load_lexicon, FacilityLexicon};
pub use model::{Coordinates, Park, ParkKind};
pub use rank::{rank_parks, DEFAULT_RESULT_LIMIT};
