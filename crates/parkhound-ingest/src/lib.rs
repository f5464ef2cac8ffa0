//! Dataset ingestion and fusion for the park directory.
//!
//! Three independently shaped civic datasets go in; one canonical
//! `Vec<Park>` comes out. Per-record and per-source failures are fully
//! absorbed here: a malformed record is dropped, an unreachable source
//! becomes an empty collection, and only a totally empty fusion triggers
//! the built-in sample-data fallback. Nothing below the fusion boundary
//! raises past [`load_parks`].

pub mod client;
pub mod error;
mod extract;
mod facilities;
pub mod fusion;
pub mod normalize;
pub mod sample;

pub use client::{load_parks, DatasetClient};
pub use error::IngestError;
pub use extract::extract_park;
pub use fusion::fuse_parks;
pub use normalize::normalize_park_name;
pub use sample::sample_parks;
