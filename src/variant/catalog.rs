//! Authored variant pools

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::buckets::SizeBucket;
use crate::error::VariantError;
use crate::page::PageType;

/// Variant keys of one content slot, split by size bucket.
///
/// `any` is used for a bucket whose own list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPools {
    #[serde(default)]
    pub small: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub large: Vec<String>,
    #[serde(default)]
    pub any: Vec<String>,
}

impl SlotPools {
    pub fn pool(&self, bucket: SizeBucket) -> &[String] {
        let own = match bucket {
            SizeBucket::Small => &self.small,
            SizeBucket::Medium => &self.medium,
            SizeBucket::Large => &self.large,
        };
        if own.is_empty() {
            &self.any
        } else {
            own
        }
    }
}

/// Every slot's pools plus the slots each page type requires
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantCatalog {
    #[serde(default)]
    pub slots: BTreeMap<String, SlotPools>,
    #[serde(default)]
    pub required: BTreeMap<PageType, Vec<String>>,
}

impl VariantCatalog {
    pub fn load(path: &Path) -> Result<Self, VariantError> {
        let content = std::fs::read_to_string(path).map_err(|source| VariantError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| VariantError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pool for a slot and bucket; empty when nothing is authored
    pub fn pool(&self, slot: &str, bucket: SizeBucket) -> &[String] {
        self.slots
            .get(slot)
            .map(|pools| pools.pool(bucket))
            .unwrap_or(&[])
    }

    /// Slots a page type must fill
    pub fn required_slots(&self, page_type: PageType) -> &[String] {
        self.required
            .get(&page_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
