//! Route enumeration over the geo tables and the article index

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::policy::{ChangeFreq, SitemapPolicy, SitemapRule};
use crate::config::{SiteConfig, StaticRoute};
use crate::content::ArticleIndex;
use crate::error::RouteError;
use crate::geo::{City, DistrictId, EntityRef, GeoEntity, GeoStore, RegionId};
use crate::page::{normalize_path, PageIdentity, PageType};
use crate::variant::Eligibility;

/// One sitemap tuple
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry {
    pub identity: PageIdentity,
    pub path: String,
    /// Absolute URL
    pub url: String,
    pub lastmod: DateTime<Utc>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl RouteEntry {
    pub fn page_type(&self) -> PageType {
        self.identity.page_type()
    }
}

/// A reference or uniqueness problem met while enumerating
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteViolation {
    #[error("{entity} references missing region {region_id}")]
    DanglingRegion { entity: EntityRef, region_id: RegionId },

    #[error("{city} references missing district {district_id}")]
    DanglingDistrict {
        city: EntityRef,
        district_id: DistrictId,
    },

    #[error(
        "{city} lies in region {city_region} but its district {district_id} lies in region {district_region}"
    )]
    RegionMismatch {
        city: EntityRef,
        district_id: DistrictId,
        city_region: RegionId,
        district_region: RegionId,
    },

    #[error("{city} has is_kreisfrei = {is_kreisfrei} but district {district_id:?}")]
    KreisfreiMismatch {
        city: EntityRef,
        is_kreisfrei: bool,
        district_id: Option<DistrictId>,
    },

    #[error("path '{path}' is claimed by both {first:?} and {second:?}")]
    Collision {
        path: String,
        first: PageIdentity,
        second: PageIdentity,
    },
}

/// Walks every data source and yields one entry per distinct page
pub struct RouteEnumerator<'a> {
    store: &'a GeoStore,
    articles: &'a ArticleIndex,
    static_routes: &'a [StaticRoute],
    eligibility: Eligibility,
    policy: SitemapPolicy,
    base_url: &'a str,
    blog_path: &'a str,
}

impl<'a> RouteEnumerator<'a> {
    pub fn new(store: &'a GeoStore, articles: &'a ArticleIndex, config: &'a SiteConfig) -> Self {
        Self {
            store,
            articles,
            static_routes: &config.static_routes,
            eligibility: config.eligibility,
            policy: config.sitemap_policy(),
            base_url: config.site.base_url.trim_end_matches('/'),
            blog_path: &config.site.blog_path,
        }
    }

    /// Every route, failing with all violations if any reference dangles or
    /// two pages share a path
    pub fn enumerate(&self, now: DateTime<Utc>) -> Result<Vec<RouteEntry>, RouteError> {
        let (entries, violations) = self.enumerate_lenient(now);
        if !violations.is_empty() {
            return Err(RouteError::Integrity(violations));
        }
        Ok(entries)
    }

    /// Every route that could be built, plus the violations that were skipped
    pub fn enumerate_lenient(&self, now: DateTime<Utc>) -> (Vec<RouteEntry>, Vec<RouteViolation>) {
        let mut out = Collector::new(self.base_url, self.blog_path);

        for route in self.static_routes {
            let identity = PageIdentity::Static {
                path: normalize_path(&route.path),
            };
            let rule = route.rule(self.policy.rule(PageType::Static));
            out.push(identity, now, rule);
        }

        out.push(
            PageIdentity::BlogIndex,
            now,
            self.policy.rule(PageType::BlogIndex),
        );

        for region in self.store.list_regions() {
            out.push(
                PageIdentity::Region {
                    region: region.slug.clone(),
                },
                now,
                self.policy.rule(PageType::Region),
            );
        }

        for district in self.store.districts() {
            let Some(region) = self.store.region(district.region_id) else {
                out.violations.push(RouteViolation::DanglingRegion {
                    entity: EntityRef::district(district.id),
                    region_id: district.region_id,
                });
                continue;
            };
            if !self.eligibility.is_eligible(&GeoEntity::District(district)) {
                continue;
            }
            out.push(
                PageIdentity::District {
                    region: region.slug.clone(),
                    district: district.slug.clone(),
                },
                now,
                self.policy.rule(PageType::District),
            );
        }

        for city in self.store.cities() {
            match self.city_identity(city) {
                Ok(identity) => {
                    if !self.eligibility.is_eligible(&GeoEntity::City(city)) {
                        continue;
                    }
                    let rule = self.policy.rule(identity.page_type());
                    out.push(identity, now, rule);
                }
                Err(violation) => out.violations.push(violation),
            }
        }

        for article in self.articles.iter() {
            let lastmod = article.last_modified().and_time(NaiveTime::MIN).and_utc();
            out.push(
                PageIdentity::Article {
                    slug: article.slug.clone(),
                },
                lastmod,
                self.policy.rule(PageType::Article),
            );
        }

        info!(
            routes = out.entries.len(),
            violations = out.violations.len(),
            "routes enumerated"
        );
        (out.entries, out.violations)
    }

    /// Identity of a city page, resolving its region and district
    fn city_identity(&self, city: &City) -> Result<PageIdentity, RouteViolation> {
        let entity = EntityRef::city(city.id);
        let region = self
            .store
            .region(city.region_id)
            .ok_or(RouteViolation::DanglingRegion {
                entity,
                region_id: city.region_id,
            })?;

        if city.is_kreisfrei != city.district_id.is_none() {
            return Err(RouteViolation::KreisfreiMismatch {
                city: entity,
                is_kreisfrei: city.is_kreisfrei,
                district_id: city.district_id,
            });
        }

        let Some(district_id) = city.district_id else {
            return Ok(PageIdentity::IndependentCity {
                region: region.slug.clone(),
                city: city.slug.clone(),
            });
        };

        let district = self
            .store
            .district(district_id)
            .ok_or(RouteViolation::DanglingDistrict {
                city: entity,
                district_id,
            })?;
        if district.region_id != city.region_id {
            return Err(RouteViolation::RegionMismatch {
                city: entity,
                district_id,
                city_region: city.region_id,
                district_region: district.region_id,
            });
        }

        Ok(PageIdentity::City {
            region: region.slug.clone(),
            district: district.slug.clone(),
            city: city.slug.clone(),
        })
    }
}

/// Dedups on identity and detects path collisions
struct Collector<'a> {
    base_url: &'a str,
    blog_path: &'a str,
    entries: Vec<RouteEntry>,
    violations: Vec<RouteViolation>,
    seen: HashSet<PageIdentity>,
    by_path: HashMap<String, PageIdentity>,
}

impl<'a> Collector<'a> {
    fn new(base_url: &'a str, blog_path: &'a str) -> Self {
        Self {
            base_url,
            blog_path,
            entries: Vec::new(),
            violations: Vec::new(),
            seen: HashSet::new(),
            by_path: HashMap::new(),
        }
    }

    fn push(&mut self, identity: PageIdentity, lastmod: DateTime<Utc>, rule: SitemapRule) {
        if !self.seen.insert(identity.clone()) {
            debug!(?identity, "duplicate page identity skipped");
            return;
        }

        let path = identity.path(self.blog_path);
        if let Some(first) = self.by_path.get(&path) {
            self.violations.push(RouteViolation::Collision {
                path,
                first: first.clone(),
                second: identity,
            });
            return;
        }
        self.by_path.insert(path.clone(), identity.clone());

        let url = if path == "/" {
            format!("{}/", self.base_url)
        } else {
            format!("{}{path}", self.base_url)
        };
        self.entries.push(RouteEntry {
            identity,
            path,
            url,
            lastmod,
            changefreq: rule.changefreq,
            priority: rule.priority,
        });
    }
}

/// Paths of the given entries
pub fn known_routes(entries: &[RouteEntry]) -> BTreeSet<String> {
    entries.iter().map(|e| e.path.clone()).collect()
}

/// Identity of the page an entity is published as, if its parents resolve
pub fn geo_identity(store: &GeoStore, entity: &GeoEntity<'_>) -> Option<PageIdentity> {
    match entity {
        GeoEntity::Region(region) => Some(PageIdentity::Region {
            region: region.slug.clone(),
        }),
        GeoEntity::District(district) => Some(PageIdentity::District {
            region: store.region(district.region_id)?.slug.clone(),
            district: district.slug.clone(),
        }),
        GeoEntity::City(city) => {
            let region = store.region(city.region_id)?.slug.clone();
            match city.district_id {
                None => Some(PageIdentity::IndependentCity {
                    region,
                    city: city.slug.clone(),
                }),
                Some(id) => Some(PageIdentity::City {
                    region,
                    district: store.district(id)?.slug.clone(),
                    city: city.slug.clone(),
                }),
            }
        }
    }
}
