//! Page types and generated-page identity.
//!
//! Two generated pages are the same page exactly when their
//! [`PageIdentity`] values are equal. Route enumeration dedups on it and the
//! identity alone determines the page's URL path.

use serde::{Deserialize, Serialize};

/// Kind of page the site renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    /// Configured static page (home, service pages, contact)
    Static,
    /// Blog/guide index
    BlogIndex,
    Region,
    District,
    /// City without a district, routed directly under its region
    IndependentCity,
    /// City inside a district
    City,
    Article,
}

impl PageType {
    pub const ALL: [PageType; 7] = [
        PageType::Static,
        PageType::BlogIndex,
        PageType::Region,
        PageType::District,
        PageType::IndependentCity,
        PageType::City,
        PageType::Article,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Static => "static",
            PageType::BlogIndex => "blog_index",
            PageType::Region => "region",
            PageType::District => "district",
            PageType::IndependentCity => "independent_city",
            PageType::City => "city",
            PageType::Article => "article",
        }
    }

    /// Whether pages of this type are generated from the geo tables
    pub fn is_geo(&self) -> bool {
        matches!(
            self,
            PageType::Region | PageType::District | PageType::IndependentCity | PageType::City
        )
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PageType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.replace('-', "_"))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid page type: {s}. Use one of: {}",
                    PageType::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

/// Identity of a generated page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageIdentity {
    Static {
        path: String,
    },
    BlogIndex,
    Region {
        region: String,
    },
    District {
        region: String,
        district: String,
    },
    IndependentCity {
        region: String,
        city: String,
    },
    City {
        region: String,
        district: String,
        city: String,
    },
    Article {
        slug: String,
    },
}

impl PageIdentity {
    pub fn page_type(&self) -> PageType {
        match self {
            PageIdentity::Static { .. } => PageType::Static,
            PageIdentity::BlogIndex => PageType::BlogIndex,
            PageIdentity::Region { .. } => PageType::Region,
            PageIdentity::District { .. } => PageType::District,
            PageIdentity::IndependentCity { .. } => PageType::IndependentCity,
            PageIdentity::City { .. } => PageType::City,
            PageIdentity::Article { .. } => PageType::Article,
        }
    }

    /// URL path of the page, always starting with `/`
    pub fn path(&self, blog_path: &str) -> String {
        match self {
            PageIdentity::Static { path } => normalize_path(path),
            PageIdentity::BlogIndex => normalize_path(blog_path),
            PageIdentity::Region { region } => format!("/{region}"),
            PageIdentity::District { region, district } => format!("/{region}/{district}"),
            PageIdentity::IndependentCity { region, city } => format!("/{region}/{city}"),
            PageIdentity::City {
                region,
                district,
                city,
            } => format!("/{region}/{district}/{city}"),
            PageIdentity::Article { slug } => {
                let base = normalize_path(blog_path);
                if base == "/" {
                    format!("/{slug}")
                } else {
                    format!("{base}/{slug}")
                }
            }
        }
    }
}

/// Normalize a site-relative path: leading slash, no trailing slash
/// (except for the root), no empty segments.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
