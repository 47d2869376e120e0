//! Geo taxonomy store
//!
//! This module handles:
//! - Reading region/district/city tables from YAML
//! - Checking the taxonomy invariants once at load
//! - Slug and id lookups over precomputed indexes
//! - Region aggregates and nearby-city queries

mod integrity;
mod loader;
mod stats;
mod store;
mod types;


pub use integrity::{check_tables, GeoViolation};
pub use loader::{load_store, load_tables, parse_tables};
pub use stats::RegionStats;
pub use store::GeoStore;
pub use types::{
    City, CityId, Coordinates, District, DistrictId, EntityKind, EntityRef, GeoEntity, GeoParent,
    GeoTables, Region, RegionId,
};
