//! Articles and the article index

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::frontmatter::split_front_matter;
use crate::error::ContentError;
use crate::fs::list_files;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A blog/guide article.
///
/// Whether it is a pillar, a cluster or standalone is decided by the
/// content graph, not by the article itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Also the article id; defaults to the file stem
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub updated: Option<NaiveDate>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    /// Phrases that link to this article during link injection
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(skip)]
    pub body: String,
}

impl Article {
    /// Date used as the sitemap last-modified value
    pub fn last_modified(&self) -> NaiveDate {
        self.updated.unwrap_or(self.date).max(self.date)
    }

    /// Parse an article from markdown with front matter
    pub fn parse(content: &str, path: &Path) -> Result<Self, ContentError> {
        let (yaml, body) = split_front_matter(content).map_err(|e| ContentError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut article: Article =
            serde_yaml::from_str(yaml).map_err(|source| ContentError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if article.slug.is_empty() {
            article.slug = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
        }
        if let Err(e) = crate::validation::validate_slug(&article.slug) {
            return Err(ContentError::FrontMatter {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }

        article.body = body.to_string();
        Ok(article)
    }
}

/// Articles by slug, in load order
#[derive(Debug, Clone, Default)]
pub struct ArticleIndex {
    articles: Vec<Article>,
    by_slug: HashMap<String, usize>,
}

impl ArticleIndex {
    /// Build an index, rejecting duplicate slugs
    pub fn new(articles: Vec<Article>) -> Result<Self, ContentError> {
        let sources: Vec<PathBuf> = articles
            .iter()
            .map(|a| PathBuf::from(format!("{}.md", a.slug)))
            .collect();
        Self::with_sources(articles, &sources)
    }

    fn with_sources(articles: Vec<Article>, sources: &[PathBuf]) -> Result<Self, ContentError> {
        let mut by_slug = HashMap::with_capacity(articles.len());
        for (idx, article) in articles.iter().enumerate() {
            if let Some(first) = by_slug.insert(article.slug.clone(), idx) {
                return Err(ContentError::DuplicateArticle {
                    slug: article.slug.clone(),
                    first: sources[first].clone(),
                    second: sources[idx].clone(),
                });
            }
        }
        Ok(Self { articles, by_slug })
    }

    /// Read every `*.md` article in `dir`.
    ///
    /// A missing or empty directory is an error, never an empty index.
    pub fn load_dir(dir: &Path) -> Result<Self, ContentError> {
        let files = list_files(dir, &["md"]).map_err(ContentError::Pattern)?;
        if files.is_empty() {
            return Err(ContentError::Empty(dir.to_path_buf()));
        }

        let mut articles = Vec::with_capacity(files.len());
        for path in &files {
            let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
                path: path.clone(),
                source,
            })?;
            articles.push(Article::parse(&content, path)?);
        }

        debug!(dir = %dir.display(), articles = articles.len(), "loaded articles");
        Self::with_sources(articles, &files)
    }

    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.by_slug.get(slug).map(|&idx| &self.articles[idx])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
