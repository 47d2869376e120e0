//! Region aggregates

use serde::Serialize;

use super::store::GeoStore;
use super::types::{GeoEntity, GeoParent, Region};
use crate::variant::Eligibility;

/// Aggregate counts for a region page.
///
/// Totals include entities below the eligibility threshold; only the
/// `eligible_*` counters are filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionStats {
    pub region: String,
    pub districts: usize,
    pub eligible_districts: usize,
    pub cities: usize,
    pub eligible_cities: usize,
    pub independent_cities: usize,
    /// Sum of the populations of all listed cities
    pub city_population: u64,
}

impl GeoStore {
    pub fn region_stats(&self, region: &Region, eligibility: &Eligibility) -> RegionStats {
        let districts = self.districts_of(region.id);
        let cities = self.cities_of(GeoParent::Region(region.id));

        RegionStats {
            region: region.slug.clone(),
            districts: districts.len(),
            eligible_districts: districts
                .iter()
                .filter(|d| eligibility.is_eligible(&GeoEntity::District(d)))
                .count(),
            cities: cities.len(),
            eligible_cities: cities
                .iter()
                .filter(|c| eligibility.is_eligible(&GeoEntity::City(c)))
                .count(),
            independent_cities: cities.iter().filter(|c| c.district_id.is_none()).count(),
            city_population: cities.iter().map(|c| c.population).sum(),
        }
    }
}
