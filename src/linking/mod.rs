//! Internal linking engine
//!
//! This module handles:
//! - Related-content blocks for pillar, cluster and standalone articles
//! - Breadcrumb trails for articles and geo pages
//! - Keyword link injection into article bodies
//! - "Nearby" link blocks for city pages
//!
//! Everything is read-only over the loaded graph and store; no I/O.

mod breadcrumbs;
mod inject;
mod related;


pub use breadcrumbs::BreadcrumbItem;
pub use inject::{inject_links, LinkTarget};
pub use related::RelatedContent;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{Article, ContentGraph};
use crate::geo::{City, GeoEntity, GeoStore};
use crate::page::PageIdentity;
use crate::routes::geo_identity;

/// An anchor text and a site-relative URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub title: String,
    pub url: String,
}

/// Produces link blocks over a content graph and geo store
#[derive(Debug, Clone, Copy)]
pub struct Linker<'a> {
    graph: &'a ContentGraph,
    store: &'a GeoStore,
    config: &'a SiteConfig,
}

impl<'a> Linker<'a> {
    pub fn new(graph: &'a ContentGraph, store: &'a GeoStore, config: &'a SiteConfig) -> Self {
        Self {
            graph,
            store,
            config,
        }
    }

    fn article_path(&self, slug: &str) -> String {
        PageIdentity::Article {
            slug: slug.to_string(),
        }
        .path(&self.config.site.blog_path)
    }

    fn article_link(&self, article: &Article) -> Link {
        Link {
            title: article.title.clone(),
            url: self.article_path(&article.slug),
        }
    }

    fn geo_path(&self, entity: &GeoEntity<'_>) -> Option<String> {
        geo_identity(self.store, entity).map(|id| id.path(&self.config.site.blog_path))
    }

    /// Keyword targets from article front matter and service pages
    pub fn link_targets(&self) -> Vec<LinkTarget> {
        let articles = self.graph.articles().iter().flat_map(|article| {
            let url = self.article_path(&article.slug);
            article
                .keywords
                .iter()
                .map(move |keyword| LinkTarget::new(keyword.clone(), url.clone()))
        });

        let services = self
            .graph
            .source()
            .services
            .values()
            .flatten()
            .flat_map(|page| {
                page.keywords
                    .iter()
                    .map(|keyword| LinkTarget::new(keyword.clone(), page.url.clone()))
            });

        articles.chain(services).collect()
    }

    /// Body of an article with keyword links injected, `None` for an
    /// unknown slug
    pub fn linked_body(&self, slug: &str) -> Option<String> {
        let article = self.graph.articles().get(slug)?;
        let self_url = self.article_path(slug);
        Some(inject_links(
            &article.body,
            &self.link_targets(),
            Some(&self_url),
        ))
    }

    /// Links to the nearest eligible cities of the same region
    pub fn nearby_links(&self, city: &City, limit: usize) -> Vec<Link> {
        self.store
            .nearby_cities(city, usize::MAX)
            .into_iter()
            .filter(|&(other, _)| self.config.eligibility.is_eligible(&GeoEntity::City(other)))
            .filter_map(|(other, _)| {
                let url = self.geo_path(&GeoEntity::City(other))?;
                Some(Link {
                    title: other.name.clone(),
                    url,
                })
            })
            .take(limit)
            .collect()
    }
}
