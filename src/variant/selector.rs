//! Deterministic variant selection

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::buckets::{SizeBucket, SizeBuckets};
use super::catalog::VariantCatalog;
use super::eligibility::Eligibility;
use super::hash::fnv1a_64;
use crate::error::VariantError;
use crate::geo::{EntityRef, GeoEntity, GeoStore};
use crate::page::PageType;

/// A required slot has no variants for an entity's bucket
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity}: no variants for slot '{slot}' in the {bucket} pool")]
pub struct MissingVariants {
    pub entity: EntityRef,
    pub slot: String,
    pub bucket: SizeBucket,
}

/// The variant chosen for one slot of one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantChoice {
    pub slot: String,
    pub bucket: SizeBucket,
    pub index: usize,
    pub key: String,
}

/// Index into a pool of `count` variants for an entity's slot.
///
/// Computed as `fnv1a_64("<kind>:<id>#<slot>") mod count`. Stable for as
/// long as `count` is unchanged; resizing a pool may move existing
/// entities to a different variant.
///
/// # Panics
///
/// Panics if `count` is zero.
pub fn variant_index(entity: EntityRef, slot: &str, count: usize) -> usize {
    assert!(count > 0, "variant pool cannot be empty");
    let key = format!("{entity}#{slot}");
    (fnv1a_64(key.as_bytes()) % count as u64) as usize
}

/// Picks variant keys from a catalog
#[derive(Debug, Clone)]
pub struct VariantSelector {
    catalog: VariantCatalog,
    buckets: SizeBuckets,
}

impl VariantSelector {
    pub fn new(catalog: VariantCatalog, buckets: SizeBuckets) -> Self {
        Self { catalog, buckets }
    }

    pub fn catalog(&self) -> &VariantCatalog {
        &self.catalog
    }

    pub fn bucket(&self, population: u64) -> SizeBucket {
        self.buckets.classify(population)
    }

    /// Choose the variant of `slot` for an entity with the given population
    pub fn select_for(
        &self,
        entity: EntityRef,
        population: u64,
        slot: &str,
    ) -> Result<VariantChoice, MissingVariants> {
        let bucket = self.bucket(population);
        let pool = self.catalog.pool(slot, bucket);
        if pool.is_empty() {
            return Err(MissingVariants {
                entity,
                slot: slot.to_string(),
                bucket,
            });
        }

        let index = variant_index(entity, slot, pool.len());
        Ok(VariantChoice {
            slot: slot.to_string(),
            bucket,
            index,
            key: pool[index].clone(),
        })
    }

    pub fn select(
        &self,
        entity: &GeoEntity<'_>,
        slot: &str,
    ) -> Result<VariantChoice, MissingVariants> {
        self.select_for(entity.entity_ref(), entity.population(), slot)
    }

    /// Choose a variant for every slot the entity's page type requires
    pub fn select_all(&self, entity: &GeoEntity<'_>) -> Result<Vec<VariantChoice>, VariantError> {
        self.catalog
            .required_slots(entity.page_type())
            .iter()
            .map(|slot| self.select(entity, slot).map_err(VariantError::from))
            .collect()
    }

    /// Check that every eligible entity can fill every required slot.
    ///
    /// Returns all gaps rather than stopping at the first.
    pub fn check_coverage(
        &self,
        store: &GeoStore,
        eligibility: &Eligibility,
    ) -> Vec<MissingVariants> {
        let entities = store
            .list_regions()
            .iter()
            .map(GeoEntity::Region)
            .chain(store.districts().iter().map(GeoEntity::District))
            .chain(store.cities().iter().map(GeoEntity::City))
            .filter(|entity| eligibility.is_eligible(entity));

        let mut missing = Vec::new();
        for entity in entities {
            let bucket = self.bucket(entity.population());
            for slot in self.catalog.required_slots(entity.page_type()) {
                if self.catalog.pool(slot, bucket).is_empty() {
                    missing.push(MissingVariants {
                        entity: entity.entity_ref(),
                        slot: slot.clone(),
                        bucket,
                    });
                }
            }
        }

        debug!(gaps = missing.len(), "variant coverage checked");
        missing
    }

    /// Page types whose required slots reference a slot with no pools at all
    pub fn undefined_required_slots(&self) -> Vec<(PageType, String)> {
        self.catalog
            .required
            .iter()
            .flat_map(|(page_type, slots)| {
                slots
                    .iter()
                    .filter(|slot| !self.catalog.slots.contains_key(*slot))
                    .map(move |slot| (*page_type, slot.clone()))
            })
            .collect()
    }
}
