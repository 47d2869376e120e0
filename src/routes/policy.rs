//! Sitemap change frequency and priority per page type

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::page::PageType;

/// `<changefreq>` values of the sitemap protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl std::fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SitemapRule {
    pub priority: f32,
    pub changefreq: ChangeFreq,
}

impl SitemapRule {
    pub const fn new(priority: f32, changefreq: ChangeFreq) -> Self {
        Self {
            priority,
            changefreq,
        }
    }
}

/// Sitemap `<priority>` text for a configured value.
///
/// Prints the shortest form that reads back as the same `f32`, so `0.75`
/// stays `0.75`; whole numbers keep one decimal.
pub fn format_priority(priority: f32) -> String {
    let text = priority.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// Static sitemap rule for every page type
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapPolicy {
    rules: BTreeMap<PageType, SitemapRule>,
}

impl Default for SitemapPolicy {
    fn default() -> Self {
        let rules = PageType::ALL
            .into_iter()
            .map(|page_type| (page_type, Self::default_rule(page_type)))
            .collect();
        Self { rules }
    }
}

impl SitemapPolicy {
    pub fn default_rule(page_type: PageType) -> SitemapRule {
        match page_type {
            PageType::Static => SitemapRule::new(0.5, ChangeFreq::Monthly),
            PageType::BlogIndex => SitemapRule::new(0.7, ChangeFreq::Daily),
            PageType::Region => SitemapRule::new(0.9, ChangeFreq::Weekly),
            PageType::District => SitemapRule::new(0.8, ChangeFreq::Weekly),
            PageType::IndependentCity => SitemapRule::new(0.8, ChangeFreq::Weekly),
            PageType::City => SitemapRule::new(0.7, ChangeFreq::Monthly),
            PageType::Article => SitemapRule::new(0.6, ChangeFreq::Monthly),
        }
    }

    pub fn rule(&self, page_type: PageType) -> SitemapRule {
        self.rules
            .get(&page_type)
            .copied()
            .unwrap_or_else(|| Self::default_rule(page_type))
    }

    pub fn set(&mut self, page_type: PageType, rule: SitemapRule) {
        self.rules.insert(page_type, rule);
    }
}
