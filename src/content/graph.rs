//! Pillar/cluster content graph

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::article::{Article, ArticleIndex};
use super::source::{GraphSource, ServicePage};
use crate::page::normalize_path;

/// Position of an article in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleRole {
    Pillar,
    Cluster,
    Standalone,
}

impl std::fmt::Display for ArticleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleRole::Pillar => write!(f, "pillar"),
            ArticleRole::Cluster => write!(f, "cluster"),
            ArticleRole::Standalone => write!(f, "standalone"),
        }
    }
}

/// A broken reference or invariant in the content graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphViolation {
    #[error("cluster '{cluster}' belongs to pillar '{pillar}', which is not a known article")]
    MissingPillar { cluster: String, pillar: String },

    #[error("pillar '{pillar}' has no clusters")]
    EmptyPillar { pillar: String },

    #[error("service page '{url}' for category '{category}' is not a known route")]
    UnknownServiceRoute { category: String, url: String },

    #[error(
        "cluster '{cluster}' is claimed {} times (pillars: {})",
        .pillars.len(),
        .pillars.join(", ")
    )]
    DuplicateCluster {
        cluster: String,
        pillars: Vec<String>,
    },

    #[error("pillar '{pillar}' lists '{cluster}', which is not a known article")]
    UnknownCluster { pillar: String, cluster: String },

    #[error("'{slug}' is both a pillar and a cluster of '{pillar}'")]
    PillarAsCluster { slug: String, pillar: String },
}

/// Read-only pillar/cluster graph over an article index.
///
/// Both directions are precomputed from the single source list. Pillars
/// are walked in slug order, so a cluster claimed by several pillars is
/// indexed under the pillar with the smallest slug, whatever the order in
/// the source file. `pillar_for_cluster` and `clusters_for_pillar` always
/// agree.
#[derive(Debug, Clone)]
pub struct ContentGraph {
    articles: ArticleIndex,
    source: GraphSource,
    clusters_by_pillar: HashMap<String, Vec<String>>,
    pillar_by_cluster: HashMap<String, String>,
    pillars: HashSet<String>,
}

impl ContentGraph {
    /// Index the source. Never fails; broken references are reported by
    /// [`ContentGraph::validate`].
    pub fn build(source: GraphSource, articles: ArticleIndex) -> Self {
        let mut clusters_by_pillar: HashMap<String, Vec<String>> = HashMap::new();
        let mut pillar_by_cluster: HashMap<String, String> = HashMap::new();

        for (pillar, clusters) in &source.pillars {
            let owned = clusters_by_pillar.entry(pillar.clone()).or_default();
            for cluster in clusters {
                if !pillar_by_cluster.contains_key(cluster) {
                    pillar_by_cluster.insert(cluster.clone(), pillar.clone());
                    owned.push(cluster.clone());
                }
            }
        }

        let pillars = source.pillars.keys().cloned().collect();

        debug!(
            pillars = source.pillars.len(),
            clusters = pillar_by_cluster.len(),
            categories = source.services.len(),
            "content graph built"
        );

        Self {
            articles,
            source,
            clusters_by_pillar,
            pillar_by_cluster,
            pillars,
        }
    }

    pub fn articles(&self) -> &ArticleIndex {
        &self.articles
    }

    pub fn source(&self) -> &GraphSource {
        &self.source
    }

    pub fn is_pillar(&self, slug: &str) -> bool {
        self.pillars.contains(slug)
    }

    pub fn is_cluster(&self, slug: &str) -> bool {
        self.pillar_by_cluster.contains_key(slug)
    }

    pub fn role(&self, slug: &str) -> ArticleRole {
        if self.is_pillar(slug) {
            ArticleRole::Pillar
        } else if self.is_cluster(slug) {
            ArticleRole::Cluster
        } else {
            ArticleRole::Standalone
        }
    }

    /// Slug of the pillar owning a cluster, known article or not
    pub fn pillar_slug_for_cluster(&self, slug: &str) -> Option<&str> {
        self.pillar_by_cluster.get(slug).map(String::as_str)
    }

    /// The pillar article owning a cluster
    pub fn pillar_for_cluster(&self, slug: &str) -> Option<&Article> {
        self.pillar_slug_for_cluster(slug)
            .and_then(|pillar| self.articles.get(pillar))
    }

    /// Cluster articles of a pillar, in authored order
    pub fn clusters_for_pillar(&self, slug: &str) -> Vec<&Article> {
        self.clusters_by_pillar
            .get(slug)
            .map(|clusters| {
                clusters
                    .iter()
                    .filter_map(|c| self.articles.get(c))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn service_pages_for_category(&self, category: &str) -> &[ServicePage] {
        self.source
            .services
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Anchor text for a link to an article
    pub fn link_text(&self, slug: &str) -> Option<&str> {
        self.articles.get(slug).map(|a| a.title.as_str())
    }

    /// Check the graph against the article set and the known routes.
    ///
    /// Reports every violation; an empty result means the graph is sound.
    pub fn validate(&self, known_routes: &BTreeSet<String>) -> Vec<GraphViolation> {
        let mut violations = Vec::new();

        // Every pillar that claims each cluster, in pillar slug order
        let mut claims: BTreeMap<&str, Vec<String>> = BTreeMap::new();

        for (pillar, clusters) in &self.source.pillars {
            if clusters.is_empty() {
                violations.push(GraphViolation::EmptyPillar {
                    pillar: pillar.clone(),
                });
            }

            let pillar_known = self.articles.contains(pillar);
            for cluster in clusters {
                claims.entry(cluster).or_default().push(pillar.clone());

                if !pillar_known {
                    violations.push(GraphViolation::MissingPillar {
                        cluster: cluster.clone(),
                        pillar: pillar.clone(),
                    });
                }
                if !self.articles.contains(cluster) {
                    violations.push(GraphViolation::UnknownCluster {
                        pillar: pillar.clone(),
                        cluster: cluster.clone(),
                    });
                }
                if self.is_pillar(cluster) {
                    violations.push(GraphViolation::PillarAsCluster {
                        slug: cluster.clone(),
                        pillar: pillar.clone(),
                    });
                }
            }
        }

        for (cluster, pillars) in claims {
            if pillars.len() > 1 {
                violations.push(GraphViolation::DuplicateCluster {
                    cluster: cluster.to_string(),
                    pillars,
                });
            }
        }

        for (category, pages) in &self.source.services {
            for page in pages {
                if !known_routes.contains(&normalize_path(&page.url)) {
                    violations.push(GraphViolation::UnknownServiceRoute {
                        category: category.clone(),
                        url: page.url.clone(),
                    });
                }
            }
        }

        violations
    }
}
