//! Site configuration (`pseo.toml`)
//!
//! Every section is optional; a missing file yields the defaults. Source
//! paths are relative to the directory holding the config file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::page::{normalize_path, PageType};
use crate::routes::{ChangeFreq, SitemapPolicy, SitemapRule};
use crate::variant::{Eligibility, SizeBuckets};

pub const DEFAULT_CONFIG_FILE: &str = "pseo.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Absolute origin used for sitemap URLs, without trailing slash
    pub base_url: String,
    pub blog_path: String,
    pub home_title: String,
    pub blog_title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: "https://www.example.com".to_string(),
            blog_path: "/ratgeber".to_string(),
            home_title: "Startseite".to_string(),
            blog_title: "Ratgeber".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesSection {
    pub geo: PathBuf,
    pub articles: PathBuf,
    pub graph: PathBuf,
    pub variants: PathBuf,
}

impl Default for SourcesSection {
    fn default() -> Self {
        Self {
            geo: PathBuf::from("data/geo"),
            articles: PathBuf::from("content/ratgeber"),
            graph: PathBuf::from("data/content-graph.yaml"),
            variants: PathBuf::from("data/variants.yaml"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkingSection {
    /// Cap for related-article lists
    pub max_related: usize,
    /// Cap for "nearby" city link blocks
    pub max_nearby: usize,
}

impl Default for LinkingSection {
    fn default() -> Self {
        Self {
            max_related: 5,
            max_nearby: 6,
        }
    }
}

/// Per page type override of the sitemap defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SitemapOverride {
    #[serde(default)]
    pub priority: Option<f32>,
    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,
}

/// A hand-written page that is not generated from data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    pub path: String,
    #[serde(default)]
    pub priority: Option<f32>,
    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,
}

impl StaticRoute {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            priority: None,
            changefreq: None,
        }
    }

    /// Sitemap rule for this page, falling back to the static default
    pub fn rule(&self, fallback: SitemapRule) -> SitemapRule {
        SitemapRule {
            priority: self.priority.unwrap_or(fallback.priority),
            changefreq: self.changefreq.unwrap_or(fallback.changefreq),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub sources: SourcesSection,
    pub eligibility: Eligibility,
    pub buckets: SizeBuckets,
    pub linking: LinkingSection,
    pub sitemap: BTreeMap<PageType, SitemapOverride>,
    pub static_routes: Vec<StaticRoute>,
    /// Directory relative source paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,
}

impl SiteConfig {
    /// Parse and validate a config document
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();

        let problems = config.validate();
        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems));
        }
        Ok(config)
    }

    /// Load `path`, or the defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self {
                root: path.parent().map(Path::to_path_buf).unwrap_or_default(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        debug!(path = %path.display(), static_routes = config.static_routes.len(), "config loaded");
        Ok(config)
    }

    /// Check every field and return one message per problem
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let base = &self.site.base_url;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            problems.push(format!("site.base_url must be an absolute http(s) URL: '{base}'"));
        }
        if base.ends_with('/') {
            problems.push(format!("site.base_url must not end with '/': '{base}'"));
        }
        if normalize_path(&self.site.blog_path) == "/" {
            problems.push("site.blog_path must not be the site root".to_string());
        }

        if self.buckets.medium_min_population >= self.buckets.large_min_population {
            problems.push(format!(
                "buckets.medium_min_population ({}) must be below buckets.large_min_population ({})",
                self.buckets.medium_min_population, self.buckets.large_min_population
            ));
        }

        for (page_type, rule) in &self.sitemap {
            if let Some(priority) = rule.priority {
                if !(0.0..=1.0).contains(&priority) {
                    problems.push(format!(
                        "sitemap.{page_type}.priority must be within 0.0..=1.0, got {priority}"
                    ));
                }
            }
        }

        for route in &self.static_routes {
            if !route.path.starts_with('/') {
                problems.push(format!("static route '{}' must start with '/'", route.path));
            }
            if let Some(priority) = route.priority {
                if !(0.0..=1.0).contains(&priority) {
                    problems.push(format!(
                        "static route '{}' priority must be within 0.0..=1.0, got {priority}",
                        route.path
                    ));
                }
            }
        }

        problems
    }

    /// Sitemap defaults with the configured overrides applied
    pub fn sitemap_policy(&self) -> SitemapPolicy {
        let mut policy = SitemapPolicy::default();
        for (&page_type, rule) in &self.sitemap {
            let current = policy.rule(page_type);
            policy.set(
                page_type,
                SitemapRule {
                    priority: rule.priority.unwrap_or(current.priority),
                    changefreq: rule.changefreq.unwrap_or(current.changefreq),
                },
            );
        }
        policy
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn geo_dir(&self) -> PathBuf {
        self.resolve(&self.sources.geo)
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.resolve(&self.sources.articles)
    }

    pub fn graph_file(&self) -> PathBuf {
        self.resolve(&self.sources.graph)
    }

    pub fn variants_file(&self) -> PathBuf {
        self.resolve(&self.sources.variants)
    }
}
