//! Route enumeration and sitemap aggregation
//!
//! Every page the site publishes is enumerated exactly once: configured
//! static pages, the blog index, regions, eligible districts and cities,
//! and articles. The result is a flat list of sitemap tuples.

mod enumerate;
mod policy;
mod sitemap;

#[cfg(test)]
mod tests;

pub use enumerate::{geo_identity, known_routes, RouteEntry, RouteEnumerator, RouteViolation};
pub use policy::{format_priority, ChangeFreq, SitemapPolicy, SitemapRule};
pub use sitemap::to_sitemap_xml;
