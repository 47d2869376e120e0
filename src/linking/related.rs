//! Related-content blocks

use std::cmp::Reverse;

use serde::Serialize;

use super::{Link, Linker};
use crate::content::{Article, ArticleRole};

/// Links shown under an article
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedContent {
    pub role: ArticleRole,
    /// Back-link for cluster articles whose pillar exists
    pub pillar: Option<Link>,
    pub items: Vec<Link>,
    pub services: Vec<Link>,
}

impl RelatedContent {
    pub fn is_empty(&self) -> bool {
        self.pillar.is_none() && self.items.is_empty() && self.services.is_empty()
    }
}

impl Linker<'_> {
    /// Related-content block for an article, `None` for an unknown slug.
    ///
    /// Pillars list their clusters, clusters link back to the pillar and
    /// list their siblings, standalone articles fall back to a tag and
    /// category ranking. Lists keep the authored order and are capped at
    /// `linking.max_related`.
    pub fn related(&self, slug: &str) -> Option<RelatedContent> {
        let article = self.graph.articles().get(slug)?;
        let role = self.graph.role(slug);
        let max = self.config.linking.max_related;

        let (pillar, items) = match role {
            ArticleRole::Pillar => {
                let items = self
                    .graph
                    .clusters_for_pillar(slug)
                    .into_iter()
                    .take(max)
                    .map(|a| self.article_link(a))
                    .collect();
                (None, items)
            }
            ArticleRole::Cluster => {
                let pillar_slug = self.graph.pillar_slug_for_cluster(slug).unwrap_or_default();
                let pillar = self
                    .graph
                    .articles()
                    .get(pillar_slug)
                    .map(|a| self.article_link(a));
                let items = self
                    .graph
                    .clusters_for_pillar(pillar_slug)
                    .into_iter()
                    .filter(|a| a.slug != slug)
                    .take(max)
                    .map(|a| self.article_link(a))
                    .collect();
                (pillar, items)
            }
            ArticleRole::Standalone => (None, self.fallback(article, max)),
        };

        let services = self
            .graph
            .service_pages_for_category(&article.category)
            .iter()
            .map(|page| Link {
                title: page.title.clone(),
                url: page.url.clone(),
            })
            .collect();

        Some(RelatedContent {
            role,
            pillar,
            items,
            services,
        })
    }

    /// Other articles sharing tags or the category, best match first.
    ///
    /// Score is the number of shared tags plus one for the same category;
    /// ties go to the newer article, then to the smaller slug.
    fn fallback(&self, article: &Article, max: usize) -> Vec<Link> {
        let mut scored: Vec<(usize, &Article)> = self
            .graph
            .articles()
            .iter()
            .filter(|other| other.slug != article.slug)
            .map(|other| {
                let shared = other.tags.iter().filter(|t| article.tags.contains(t)).count();
                let same_category = usize::from(other.category == article.category);
                (shared + same_category, other)
            })
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by_key(|(score, other)| {
            (Reverse(*score), Reverse(other.date), other.slug.clone())
        });

        scored
            .into_iter()
            .take(max)
            .map(|(_, other)| self.article_link(other))
            .collect()
    }
}
