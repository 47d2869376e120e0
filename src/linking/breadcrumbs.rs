//! Breadcrumb trails for articles and geo pages

use serde::Serialize;

use super::Linker;
use crate::geo::GeoEntity;
use crate::page::normalize_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub title: String,
    /// Site-relative path; `None` for a segment without a page of its own
    pub url: Option<String>,
}

impl BreadcrumbItem {
    fn linked(title: &str, url: String) -> Self {
        Self {
            title: title.to_string(),
            url: Some(url),
        }
    }
}

impl Linker<'_> {
    fn home(&self) -> BreadcrumbItem {
        BreadcrumbItem::linked(&self.config.site.home_title, "/".to_string())
    }

    /// Home → blog index → [pillar] → article
    pub fn article_breadcrumbs(&self, slug: &str) -> Option<Vec<BreadcrumbItem>> {
        let article = self.graph.articles().get(slug)?;
        let blog_path = &self.config.site.blog_path;

        let mut trail = vec![
            self.home(),
            BreadcrumbItem::linked(&self.config.site.blog_title, normalize_path(blog_path)),
        ];
        if let Some(pillar) = self.graph.pillar_for_cluster(slug) {
            trail.push(BreadcrumbItem::linked(
                &pillar.title,
                self.article_path(&pillar.slug),
            ));
        }
        trail.push(BreadcrumbItem::linked(&article.title, self.article_path(slug)));
        Some(trail)
    }

    /// Home → region → [district] → city, mirroring the store path.
    ///
    /// Kreisfrei cities never get a district segment. A district below the
    /// eligibility threshold keeps its segment without a link.
    pub fn geo_breadcrumbs(&self, entity: &GeoEntity<'_>) -> Vec<BreadcrumbItem> {
        let mut trail = vec![self.home()];

        let (region_id, district_id) = match entity {
            GeoEntity::Region(region) => (region.id, None),
            GeoEntity::District(district) => (district.region_id, Some(district.id)),
            GeoEntity::City(city) => (city.region_id, city.district_id),
        };

        let Some(region) = self.store.region(region_id) else {
            return trail;
        };
        trail.push(BreadcrumbItem::linked(&region.name, format!("/{}", region.slug)));
        if matches!(entity, GeoEntity::Region(_)) {
            return trail;
        }

        if let Some(district) = district_id.and_then(|id| self.store.district(id)) {
            let district = GeoEntity::District(district);
            let published = self.config.eligibility.is_eligible(&district);
            trail.push(BreadcrumbItem {
                title: district.name().to_string(),
                url: self.geo_path(&district).filter(|_| published),
            });
        }

        if let GeoEntity::City(city) = entity {
            trail.push(BreadcrumbItem {
                title: city.name.clone(),
                url: self.geo_path(entity),
            });
        }

        trail
    }

    /// Breadcrumbs for any article or geo route path
    pub fn breadcrumbs_for_path(&self, path: &str) -> Option<Vec<BreadcrumbItem>> {
        let path = normalize_path(path);
        let blog = normalize_path(&self.config.site.blog_path);

        if path == blog {
            return Some(vec![
                self.home(),
                BreadcrumbItem::linked(&self.config.site.blog_title, blog),
            ]);
        }
        if let Some(slug) = path.strip_prefix(&format!("{blog}/")) {
            return self.article_breadcrumbs(slug);
        }

        self.store
            .resolve_path(&path)
            .map(|entity| self.geo_breadcrumbs(&entity))
    }
}
