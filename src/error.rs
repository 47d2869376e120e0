//! Error types shared across the pipeline.
//!
//! Integrity failures carry the complete list of violations found so a
//! single build run reports every authoring mistake at once.

use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

use crate::content::GraphViolation;
use crate::geo::GeoViolation;
use crate::routes::RouteViolation;
use crate::variant::MissingVariants;

/// Render a violation list as a count followed by an indented bullet list.
pub fn format_violations<T: Display>(items: &[T]) -> String {
    let mut out = format!("{} problem(s)", items.len());
    for item in items {
        out.push_str("\n  - ");
        out.push_str(&item.to_string());
    }
    out
}

/// Errors raised while loading or validating the geo tables.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("failed to read geo table {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse geo table {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid geo table pattern: {0}")]
    Pattern(String),

    #[error("no geo tables found under {0}")]
    Empty(PathBuf),

    #[error("geo tables failed integrity checks, {}", format_violations(.0))]
    Integrity(Vec<GeoViolation>),
}

/// Errors raised while loading articles or the content graph source.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("{path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("invalid article pattern: {0}")]
    Pattern(String),

    #[error("no articles found under {0}")]
    Empty(PathBuf),

    #[error("duplicate article slug '{slug}' ({first} and {second})")]
    DuplicateArticle {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("content graph failed integrity checks, {}", format_violations(.0))]
    Integrity(Vec<GraphViolation>),
}

/// Errors raised by the variant catalog and selector.
#[derive(Debug, Error)]
pub enum VariantError {
    #[error("failed to read variant catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse variant catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Missing(#[from] MissingVariants),
}

/// Errors raised by route enumeration.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route enumeration failed, {}", format_violations(.0))]
    Integrity(Vec<RouteViolation>),
}

/// Errors raised while loading `pseo.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration, {}", format_violations(.0))]
    Invalid(Vec<String>),
}
