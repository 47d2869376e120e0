//! Load-time integrity checks for the geo tables

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::types::{CityId, DistrictId, EntityKind, EntityRef, GeoTables, RegionId};
use crate::validation::validate_slug;

/// A single broken invariant in the geo tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoViolation {
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: EntityKind, id: u32 },

    #[error("{entity}: invalid slug: {reason}")]
    InvalidSlug { entity: EntityRef, reason: String },

    #[error("{entity}: slug '{slug}' is already used by {other} in {scope}")]
    DuplicateSlug {
        entity: EntityRef,
        other: EntityRef,
        slug: String,
        scope: String,
    },

    #[error("{entity}: unknown region {region_id}")]
    UnknownRegion {
        entity: EntityRef,
        region_id: RegionId,
    },

    #[error("city:{city}: unknown district {district_id}")]
    UnknownDistrict {
        city: CityId,
        district_id: DistrictId,
    },

    #[error(
        "city:{city}: region {city_region} does not match region {district_region} of district {district_id}"
    )]
    RegionMismatch {
        city: CityId,
        district_id: DistrictId,
        city_region: RegionId,
        district_region: RegionId,
    },

    #[error("city:{city}: is_kreisfrei={is_kreisfrei} contradicts district_id={district_id:?}")]
    KreisfreiMismatch {
        city: CityId,
        is_kreisfrei: bool,
        district_id: Option<DistrictId>,
    },
}

/// Check every invariant of the tables and return all violations.
///
/// An empty result means the tables can be indexed safely.
pub fn check_tables(tables: &GeoTables) -> Vec<GeoViolation> {
    let mut violations = Vec::new();

    let mut region_ids: HashSet<RegionId> = HashSet::new();
    let mut district_regions: HashMap<DistrictId, RegionId> = HashMap::new();
    let mut city_ids: HashSet<CityId> = HashSet::new();

    // Region slugs share the top-level namespace
    let mut region_slugs: HashMap<&str, EntityRef> = HashMap::new();
    for region in &tables.regions {
        let entity = EntityRef::region(region.id);
        if !region_ids.insert(region.id) {
            violations.push(GeoViolation::DuplicateId {
                kind: EntityKind::Region,
                id: region.id,
            });
        }
        check_slug(&region.slug, entity, &mut violations);
        if let Some(other) = region_slugs.insert(region.slug.as_str(), entity) {
            violations.push(GeoViolation::DuplicateSlug {
                entity,
                other,
                slug: region.slug.clone(),
                scope: "the region list".to_string(),
            });
        }
    }

    // Everything directly below a region shares `/<region>/<slug>`
    let mut second_level: HashMap<(RegionId, &str), EntityRef> = HashMap::new();
    for district in &tables.districts {
        let entity = EntityRef::district(district.id);
        if district_regions.insert(district.id, district.region_id).is_some() {
            violations.push(GeoViolation::DuplicateId {
                kind: EntityKind::District,
                id: district.id,
            });
        }
        check_slug(&district.slug, entity, &mut violations);
        if !region_ids.contains(&district.region_id) {
            violations.push(GeoViolation::UnknownRegion {
                entity,
                region_id: district.region_id,
            });
        }
        let key = (district.region_id, district.slug.as_str());
        if let Some(other) = second_level.insert(key, entity) {
            violations.push(GeoViolation::DuplicateSlug {
                entity,
                other,
                slug: district.slug.clone(),
                scope: format!("region {}", district.region_id),
            });
        }
    }

    let mut third_level: HashMap<(DistrictId, &str), EntityRef> = HashMap::new();
    for city in &tables.cities {
        let entity = EntityRef::city(city.id);
        if !city_ids.insert(city.id) {
            violations.push(GeoViolation::DuplicateId {
                kind: EntityKind::City,
                id: city.id,
            });
        }
        check_slug(&city.slug, entity, &mut violations);
        if !region_ids.contains(&city.region_id) {
            violations.push(GeoViolation::UnknownRegion {
                entity,
                region_id: city.region_id,
            });
        }

        if city.is_kreisfrei != city.district_id.is_none() {
            violations.push(GeoViolation::KreisfreiMismatch {
                city: city.id,
                is_kreisfrei: city.is_kreisfrei,
                district_id: city.district_id,
            });
        }

        match city.district_id {
            Some(district_id) => {
                match district_regions.get(&district_id) {
                    None => violations.push(GeoViolation::UnknownDistrict {
                        city: city.id,
                        district_id,
                    }),
                    Some(&district_region) if district_region != city.region_id => {
                        violations.push(GeoViolation::RegionMismatch {
                            city: city.id,
                            district_id,
                            city_region: city.region_id,
                            district_region,
                        })
                    }
                    Some(_) => {}
                }
                let key = (district_id, city.slug.as_str());
                if let Some(other) = third_level.insert(key, entity) {
                    violations.push(GeoViolation::DuplicateSlug {
                        entity,
                        other,
                        slug: city.slug.clone(),
                        scope: format!("district {district_id}"),
                    });
                }
            }
            None => {
                // Kreisfrei cities sit at the same URL level as districts
                let key = (city.region_id, city.slug.as_str());
                if let Some(other) = second_level.insert(key, entity) {
                    violations.push(GeoViolation::DuplicateSlug {
                        entity,
                        other,
                        slug: city.slug.clone(),
                        scope: format!("region {}", city.region_id),
                    });
                }
            }
        }
    }

    violations
}

fn check_slug(slug: &str, entity: EntityRef, violations: &mut Vec<GeoViolation>) {
    if let Err(e) = validate_slug(slug) {
        violations.push(GeoViolation::InvalidSlug {
            entity,
            reason: e.to_string(),
        });
    }
}
