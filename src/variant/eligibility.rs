//! Page eligibility thresholds

use serde::{Deserialize, Serialize};

use crate::geo::GeoEntity;
use crate::page::PageType;

pub const DEFAULT_CITY_MIN_POPULATION: u64 = 10_000;
pub const DEFAULT_DISTRICT_MIN_POPULATION: u64 = 50_000;

/// Minimum populations an entity needs to get its own page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eligibility {
    /// Applies to cities in a district and to kreisfrei cities
    pub city_min_population: u64,
    pub district_min_population: u64,
}

impl Default for Eligibility {
    fn default() -> Self {
        Self {
            city_min_population: DEFAULT_CITY_MIN_POPULATION,
            district_min_population: DEFAULT_DISTRICT_MIN_POPULATION,
        }
    }
}

impl Eligibility {
    /// Threshold for a page type, `None` when every page of the type is
    /// generated
    pub fn threshold(&self, page_type: PageType) -> Option<u64> {
        match page_type {
            PageType::District => Some(self.district_min_population),
            PageType::City | PageType::IndependentCity => Some(self.city_min_population),
            PageType::Region | PageType::Article | PageType::BlogIndex | PageType::Static => None,
        }
    }

    /// Whether the entity gets a page of the given type
    pub fn is_eligible_as(&self, entity: &GeoEntity<'_>, page_type: PageType) -> bool {
        match self.threshold(page_type) {
            Some(min) => entity.population() >= min,
            None => true,
        }
    }

    /// Whether the entity gets a page of its natural type
    pub fn is_eligible(&self, entity: &GeoEntity<'_>) -> bool {
        self.is_eligible_as(entity, entity.page_type())
    }
}
