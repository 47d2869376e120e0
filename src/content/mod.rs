//! Articles and the pillar/cluster content graph
//!
//! This module handles:
//! - Parsing markdown articles with YAML front matter
//! - Loading the graph source (pillars and category service pages)
//! - Pillar/cluster lookups in both directions
//! - Validating the graph against articles and known routes

mod article;
mod frontmatter;
mod graph;
mod source;


pub use article::{Article, ArticleIndex, FaqEntry, SourceRef};
pub use frontmatter::split_front_matter;
pub use graph::{ArticleRole, ContentGraph, GraphViolation};
pub use source::{GraphSource, ServicePage};

use std::path::Path;

use crate::error::ContentError;

/// Load the article directory and the graph source into a content graph
pub fn load_graph(articles_dir: &Path, graph_file: &Path) -> Result<ContentGraph, ContentError> {
    let articles = ArticleIndex::load_dir(articles_dir)?;
    let source = GraphSource::load(graph_file)?;
    Ok(ContentGraph::build(source, articles))
}
