//! The build context: everything loaded once from disk

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::SiteConfig;
use crate::content::{self, ContentGraph, GraphViolation};
use crate::error::{format_violations, ContentError};
use crate::geo::{self, GeoStore};
use crate::linking::Linker;
use crate::page::PageType;
use crate::routes::{known_routes, RouteEntry, RouteEnumerator, RouteViolation};
use crate::variant::{Eligibility, MissingVariants, VariantCatalog, VariantSelector};

/// Read-only site context.
///
/// Holds the configuration, geo store, content graph and variant selector.
/// Nothing mutates after construction, so a `&Site` can be handed to any
/// number of worker threads.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub geo: GeoStore,
    pub graph: ContentGraph,
    pub selector: VariantSelector,
}

/// Every integrity problem found across graph, variants and routes
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    pub routes: usize,
    #[serde(serialize_with = "display_all")]
    pub route_violations: Vec<RouteViolation>,
    #[serde(serialize_with = "display_all")]
    pub graph_violations: Vec<GraphViolation>,
    #[serde(serialize_with = "display_all")]
    pub missing_variants: Vec<MissingVariants>,
    pub undefined_slots: Vec<(PageType, String)>,
}

fn display_all<T: std::fmt::Display, S: serde::Serializer>(
    items: &[T],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(items.iter().map(ToString::to_string))
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }

    pub fn problem_count(&self) -> usize {
        self.route_violations.len()
            + self.graph_violations.len()
            + self.missing_variants.len()
            + self.undefined_slots.len()
    }

    /// One line per problem
    pub fn problems(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.problem_count());
        out.extend(self.route_violations.iter().map(|v| format!("route: {v}")));
        out.extend(self.graph_violations.iter().map(|v| format!("content graph: {v}")));
        out.extend(self.missing_variants.iter().map(|v| format!("variants: {v}")));
        out.extend(self.undefined_slots.iter().map(|(page_type, slot)| {
            format!("variants: slot '{slot}' is required for {page_type} pages but has no pools")
        }));
        out
    }
}

impl std::fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_violations(&self.problems()))
    }
}

impl Site {
    /// Load config and every source it points to
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = SiteConfig::load(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;

        let geo = geo::load_store(&config.geo_dir()).context("Failed to load geo tables")?;
        let graph = content::load_graph(&config.articles_dir(), &config.graph_file())
            .context("Failed to load content")?;
        let catalog = VariantCatalog::load(&config.variants_file())
            .context("Failed to load variant catalog")?;

        let site = Self::from_parts(config, geo, graph, catalog);
        info!(
            regions = site.geo.list_regions().len(),
            articles = site.graph.articles().len(),
            "site loaded"
        );
        Ok(site)
    }

    pub fn from_parts(
        config: SiteConfig,
        geo: GeoStore,
        graph: ContentGraph,
        catalog: VariantCatalog,
    ) -> Self {
        let selector = VariantSelector::new(catalog, config.buckets);
        Self {
            config,
            geo,
            graph,
            selector,
        }
    }

    pub fn eligibility(&self) -> &Eligibility {
        &self.config.eligibility
    }

    pub fn linker(&self) -> Linker<'_> {
        Linker::new(&self.graph, &self.geo, &self.config)
    }

    pub fn enumerator(&self) -> RouteEnumerator<'_> {
        RouteEnumerator::new(&self.geo, self.graph.articles(), &self.config)
    }

    /// Routes for a build. Fails on route and content graph violations.
    pub fn routes(&self, now: DateTime<Utc>) -> Result<Vec<RouteEntry>> {
        let entries = self.enumerator().enumerate(now)?;

        let graph_violations = self.graph.validate(&known_routes(&entries));
        if !graph_violations.is_empty() {
            return Err(ContentError::Integrity(graph_violations).into());
        }
        Ok(entries)
    }

    /// Run every integrity check and collect all findings
    pub fn check(&self, now: DateTime<Utc>) -> IntegrityReport {
        let (entries, route_violations) = self.enumerator().enumerate_lenient(now);
        let known = known_routes(&entries);

        IntegrityReport {
            routes: entries.len(),
            route_violations,
            graph_violations: self.graph.validate(&known),
            missing_variants: self.selector.check_coverage(&self.geo, self.eligibility()),
            undefined_slots: self.selector.undefined_required_slots(),
        }
    }
}
