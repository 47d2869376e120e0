//! Geo taxonomy record types

use serde::{Deserialize, Serialize};

pub type RegionId = u32;
pub type DistrictId = u32;
pub type CityId = u32;

/// Top administrative tier (Bundesland)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    /// Derived from `name` when omitted
    #[serde(default)]
    pub slug: String,
    pub capital: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area_km2: f64,
}

/// Second tier (Landkreis)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: DistrictId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Seat of the district administration (Kreisstadt)
    pub seat: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area_km2: f64,
    pub region_id: RegionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Great-circle distance in kilometres
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub postal_codes: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    pub region_id: RegionId,
    /// `None` exactly when the city is kreisfrei
    #[serde(default)]
    pub district_id: Option<DistrictId>,
    #[serde(default)]
    pub is_kreisfrei: bool,
}

/// Raw tables as authored, before indexing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoTables {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub districts: Vec<District>,
    #[serde(default)]
    pub cities: Vec<City>,
}

impl GeoTables {
    pub fn extend(&mut self, other: GeoTables) {
        self.regions.extend(other.regions);
        self.districts.extend(other.districts);
        self.cities.extend(other.cities);
    }

    /// Fill in slugs that were left empty from the display name
    pub fn derive_missing_slugs(&mut self) {
        use crate::validation::slugify;

        for region in self.regions.iter_mut().filter(|r| r.slug.is_empty()) {
            region.slug = slugify(&region.name);
        }
        for district in self.districts.iter_mut().filter(|d| d.slug.is_empty()) {
            district.slug = slugify(&district.name);
        }
        for city in self.cities.iter_mut().filter(|c| c.slug.is_empty()) {
            city.slug = slugify(&city.name);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Region,
    District,
    City,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Region => write!(f, "region"),
            EntityKind::District => write!(f, "district"),
            EntityKind::City => write!(f, "city"),
        }
    }
}

/// Stable reference to a geo entity, rendered as `<kind>:<id>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: u32,
}

impl EntityRef {
    pub fn region(id: RegionId) -> Self {
        Self {
            kind: EntityKind::Region,
            id,
        }
    }

    pub fn district(id: DistrictId) -> Self {
        Self {
            kind: EntityKind::District,
            id,
        }
    }

    pub fn city(id: CityId) -> Self {
        Self {
            kind: EntityKind::City,
            id,
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Borrowed view of any geo entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoEntity<'a> {
    Region(&'a Region),
    District(&'a District),
    City(&'a City),
}

impl GeoEntity<'_> {
    pub fn entity_ref(&self) -> EntityRef {
        match self {
            GeoEntity::Region(r) => EntityRef::region(r.id),
            GeoEntity::District(d) => EntityRef::district(d.id),
            GeoEntity::City(c) => EntityRef::city(c.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GeoEntity::Region(r) => &r.name,
            GeoEntity::District(d) => &d.name,
            GeoEntity::City(c) => &c.name,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            GeoEntity::Region(r) => &r.slug,
            GeoEntity::District(d) => &d.slug,
            GeoEntity::City(c) => &c.slug,
        }
    }

    pub fn population(&self) -> u64 {
        match self {
            GeoEntity::Region(r) => r.population,
            GeoEntity::District(d) => d.population,
            GeoEntity::City(c) => c.population,
        }
    }

    /// Page type this entity is published as
    pub fn page_type(&self) -> crate::page::PageType {
        use crate::page::PageType;

        match self {
            GeoEntity::Region(_) => PageType::Region,
            GeoEntity::District(_) => PageType::District,
            GeoEntity::City(c) if c.district_id.is_none() => PageType::IndependentCity,
            GeoEntity::City(_) => PageType::City,
        }
    }
}

/// Parent of a set of cities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoParent {
    Region(RegionId),
    District(DistrictId),
}
