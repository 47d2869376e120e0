//! Structured source of the content graph

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A topical service page surfaced on articles of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePage {
    pub url: String,
    pub title: String,
    /// Phrases that link to this page during link injection
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Pillar → ordered clusters, plus category → service pages.
///
/// Cluster order is the authored order and is what readers see as
/// "recommended reading"; it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSource {
    #[serde(default)]
    pub pillars: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub services: BTreeMap<String, Vec<ServicePage>>,
}

impl GraphSource {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ContentError> {
        serde_yaml::from_str(content).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }
}
