//! Reading geo tables from disk

use std::path::Path;

use tracing::debug;

use super::store::GeoStore;
use super::types::GeoTables;
use crate::error::GeoError;
use crate::fs::list_files;

/// Parse one YAML table document
pub fn parse_tables(content: &str, path: &Path) -> Result<GeoTables, GeoError> {
    serde_yaml::from_str(content).map_err(|source| GeoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and merge every `*.yaml`/`*.yml` table in `dir`
pub fn load_tables(dir: &Path) -> Result<GeoTables, GeoError> {
    let files = list_files(dir, &["yaml", "yml"]).map_err(GeoError::Pattern)?;
    if files.is_empty() {
        return Err(GeoError::Empty(dir.to_path_buf()));
    }

    let mut tables = GeoTables::default();
    for path in files {
        let content = std::fs::read_to_string(&path).map_err(|source| GeoError::Read {
            path: path.clone(),
            source,
        })?;
        let part = parse_tables(&content, &path)?;
        debug!(
            file = %path.display(),
            regions = part.regions.len(),
            districts = part.districts.len(),
            cities = part.cities.len(),
            "loaded geo table"
        );
        tables.extend(part);
    }

    Ok(tables)
}

/// Read, validate and index the geo tables in `dir`
pub fn load_store(dir: &Path) -> Result<GeoStore, GeoError> {
    GeoStore::build(load_tables(dir)?)
}
