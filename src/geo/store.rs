//! Indexed, read-only geo taxonomy store

use std::collections::HashMap;

use tracing::debug;

use super::integrity::check_tables;
use super::types::{
    City, CityId, District, DistrictId, GeoEntity, GeoParent, GeoTables, Region, RegionId,
};
use crate::error::GeoError;

/// Geo taxonomy with precomputed lookup indexes.
///
/// Records are kept sorted by id; every accessor is a hash lookup or a walk
/// over a precomputed child list.
#[derive(Debug, Clone)]
pub struct GeoStore {
    regions: Vec<Region>,
    districts: Vec<District>,
    cities: Vec<City>,
    region_by_id: HashMap<RegionId, usize>,
    district_by_id: HashMap<DistrictId, usize>,
    city_by_id: HashMap<CityId, usize>,
    region_by_slug: HashMap<String, usize>,
    district_by_slug: HashMap<(RegionId, String), usize>,
    /// (region, district or None for kreisfrei, city slug) -> city
    city_by_path: HashMap<(RegionId, Option<DistrictId>, String), usize>,
    districts_by_region: HashMap<RegionId, Vec<usize>>,
    cities_by_region: HashMap<RegionId, Vec<usize>>,
    cities_by_district: HashMap<DistrictId, Vec<usize>>,
}

impl GeoStore {
    /// Validate the tables and build the indexes.
    ///
    /// Fails with every violation found when any invariant is broken.
    pub fn build(mut tables: GeoTables) -> Result<Self, GeoError> {
        tables.derive_missing_slugs();

        let violations = check_tables(&tables);
        if !violations.is_empty() {
            return Err(GeoError::Integrity(violations));
        }

        let store = Self::index(tables);
        debug!(
            regions = store.regions.len(),
            districts = store.districts.len(),
            cities = store.cities.len(),
            "geo store built"
        );
        Ok(store)
    }

    /// Index tables without checking invariants.
    ///
    /// Lookups stay well-defined for broken data; route enumeration detects
    /// dangling references on its own.
    pub(crate) fn index(tables: GeoTables) -> Self {
        let GeoTables {
            mut regions,
            mut districts,
            mut cities,
        } = tables;
        regions.sort_by_key(|r| r.id);
        districts.sort_by_key(|d| d.id);
        cities.sort_by_key(|c| c.id);

        let mut store = Self {
            region_by_id: HashMap::with_capacity(regions.len()),
            district_by_id: HashMap::with_capacity(districts.len()),
            city_by_id: HashMap::with_capacity(cities.len()),
            region_by_slug: HashMap::with_capacity(regions.len()),
            district_by_slug: HashMap::with_capacity(districts.len()),
            city_by_path: HashMap::with_capacity(cities.len()),
            districts_by_region: HashMap::new(),
            cities_by_region: HashMap::new(),
            cities_by_district: HashMap::new(),
            regions,
            districts,
            cities,
        };

        for (idx, region) in store.regions.iter().enumerate() {
            store.region_by_id.insert(region.id, idx);
            store.region_by_slug.insert(region.slug.clone(), idx);
        }

        for (idx, district) in store.districts.iter().enumerate() {
            store.district_by_id.insert(district.id, idx);
            store
                .district_by_slug
                .insert((district.region_id, district.slug.clone()), idx);
            store
                .districts_by_region
                .entry(district.region_id)
                .or_default()
                .push(idx);
        }

        for (idx, city) in store.cities.iter().enumerate() {
            store.city_by_id.insert(city.id, idx);
            store
                .city_by_path
                .insert((city.region_id, city.district_id, city.slug.clone()), idx);
            store
                .cities_by_region
                .entry(city.region_id)
                .or_default()
                .push(idx);
            if let Some(district_id) = city.district_id {
                store
                    .cities_by_district
                    .entry(district_id)
                    .or_default()
                    .push(idx);
            }
        }

        store
    }

    /// All regions, ordered by id
    pub fn list_regions(&self) -> &[Region] {
        &self.regions
    }

    /// All districts, ordered by id
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// All cities, ordered by id
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.region_by_id.get(&id).map(|&idx| &self.regions[idx])
    }

    pub fn district(&self, id: DistrictId) -> Option<&District> {
        self.district_by_id.get(&id).map(|&idx| &self.districts[idx])
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.city_by_id.get(&id).map(|&idx| &self.cities[idx])
    }

    pub fn region_by_slug(&self, slug: &str) -> Option<&Region> {
        self.region_by_slug.get(slug).map(|&idx| &self.regions[idx])
    }

    pub fn district_by_slug(&self, region_slug: &str, slug: &str) -> Option<&District> {
        let region = self.region_by_slug(region_slug)?;
        self.district_by_slug
            .get(&(region.id, slug.to_string()))
            .map(|&idx| &self.districts[idx])
    }

    /// Look up a city by its URL path.
    ///
    /// `district_slug` must be `None` for kreisfrei cities and `Some` for
    /// cities inside a district; the other combination is not found.
    pub fn city_by_slug(
        &self,
        region_slug: &str,
        district_slug: Option<&str>,
        city_slug: &str,
    ) -> Option<&City> {
        let region = self.region_by_slug(region_slug)?;
        let district_id = match district_slug {
            Some(slug) => Some(self.district_by_slug(region_slug, slug)?.id),
            None => None,
        };
        self.city_by_path
            .get(&(region.id, district_id, city_slug.to_string()))
            .map(|&idx| &self.cities[idx])
    }

    pub fn districts_of(&self, region_id: RegionId) -> Vec<&District> {
        self.districts_by_region
            .get(&region_id)
            .map(|ids| ids.iter().map(|&idx| &self.districts[idx]).collect())
            .unwrap_or_default()
    }

    /// Cities under a parent.
    ///
    /// For a region this is every city in it, kreisfrei or not.
    pub fn cities_of(&self, parent: GeoParent) -> Vec<&City> {
        let ids = match parent {
            GeoParent::Region(id) => self.cities_by_region.get(&id),
            GeoParent::District(id) => self.cities_by_district.get(&id),
        };
        ids.map(|ids| ids.iter().map(|&idx| &self.cities[idx]).collect())
            .unwrap_or_default()
    }

    /// Kreisfrei cities attached directly to a region
    pub fn independent_cities_of(&self, region_id: RegionId) -> Vec<&City> {
        self.cities_of(GeoParent::Region(region_id))
            .into_iter()
            .filter(|c| c.district_id.is_none())
            .collect()
    }

    /// Resolve a geo route path (`/<region>[/<segment>[/<city>]]`).
    ///
    /// The second segment is tried as a district first, then as a kreisfrei
    /// city; integrity checks guarantee the two never collide.
    pub fn resolve_path(&self, path: &str) -> Option<GeoEntity<'_>> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [region] => self.region_by_slug(region).map(GeoEntity::Region),
            [region, second] => self
                .district_by_slug(region, second)
                .map(GeoEntity::District)
                .or_else(|| self.city_by_slug(region, None, second).map(GeoEntity::City)),
            [region, district, city] => self
                .city_by_slug(region, Some(district), city)
                .map(GeoEntity::City),
            _ => None,
        }
    }

    /// Cities of the same region closest to `city`, nearest first.
    ///
    /// Cities without coordinates are skipped; ties break on id.
    pub fn nearby_cities(&self, city: &City, limit: usize) -> Vec<(&City, f64)> {
        let Some(origin) = city.coordinates else {
            return Vec::new();
        };

        let mut nearby: Vec<(&City, f64)> = self
            .cities_of(GeoParent::Region(city.region_id))
            .into_iter()
            .filter(|other| other.id != city.id)
            .filter_map(|other| {
                other
                    .coordinates
                    .map(|coords| (other, origin.distance_km(&coords)))
            })
            .collect();

        nearby.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.id.cmp(&b.0.id)));
        nearby.truncate(limit);
        nearby
    }
}
