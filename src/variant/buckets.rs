//! Size buckets choosing which variant pool applies

use serde::{Deserialize, Serialize};

/// Coarse population class of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeBucket::Small => write!(f, "small"),
            SizeBucket::Medium => write!(f, "medium"),
            SizeBucket::Large => write!(f, "large"),
        }
    }
}

/// Lower population bounds of the medium and large buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBuckets {
    pub medium_min_population: u64,
    pub large_min_population: u64,
}

impl Default for SizeBuckets {
    fn default() -> Self {
        Self {
            medium_min_population: 50_000,
            large_min_population: 250_000,
        }
    }
}

impl SizeBuckets {
    /// Classify a population. Zero (unknown) lands in the smallest bucket.
    pub fn classify(&self, population: u64) -> SizeBucket {
        if population >= self.large_min_population {
            SizeBucket::Large
        } else if population >= self.medium_min_population {
            SizeBucket::Medium
        } else {
            SizeBucket::Small
        }
    }
}
