//! Eligibility and deterministic variant selection
//!
//! Whether an entity gets a page is a pure population threshold. Which
//! pre-authored wording each slot of the page uses is a pure function of the
//! entity id, the slot name and the size of the pool, so rebuilds never
//! flip wording.

mod buckets;
mod catalog;
mod eligibility;
mod hash;
mod selector;


pub use buckets::{SizeBucket, SizeBuckets};
pub use catalog::{SlotPools, VariantCatalog};
pub use eligibility::{Eligibility, DEFAULT_CITY_MIN_POPULATION, DEFAULT_DISTRICT_MIN_POPULATION};
pub use hash::fnv1a_64;
pub use selector::{variant_index, MissingVariants, VariantChoice, VariantSelector};
