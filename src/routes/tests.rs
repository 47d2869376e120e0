//! Tests for route enumeration

use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::config::StaticRoute;
use crate::geo::{EntityRef, GeoStore};
use crate::page::{PageIdentity, PageType};
use crate::testing::{articles, city, district, geo_store, geo_tables, site_config};

fn build_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap()
}

fn paths(entries: &[RouteEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.path.as_str()).collect()
}

#[test]
fn test_enumerates_every_eligible_page() {
    let store = geo_store();
    let articles = articles();
    let config = site_config();

    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();
    let count = |t: PageType| entries.iter().filter(|e| e.page_type() == t).count();

    assert_eq!(count(PageType::Static), 3);
    assert_eq!(count(PageType::BlogIndex), 1);
    assert_eq!(count(PageType::Region), 2);
    assert_eq!(count(PageType::District), 2);
    assert_eq!(count(PageType::IndependentCity), 3);
    assert_eq!(count(PageType::City), 4);
    assert_eq!(count(PageType::Article), 9);
    assert_eq!(entries.len(), 24);
}

#[test]
fn test_region_is_routed_by_slug() {
    let store = geo_store();
    let articles = articles();
    let config = site_config();
    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();

    let bayern = entries
        .iter()
        .find(|e| e.identity == PageIdentity::Region { region: "bayern".into() })
        .unwrap();
    assert_eq!(bayern.path, "/bayern");
    assert_eq!(bayern.url, "https://www.example-detektei.de/bayern");
    assert_eq!(bayern.priority, 0.9);
    assert_eq!(bayern.changefreq, ChangeFreq::Weekly);
}

#[test]
fn test_kreisfrei_city_only_under_region() {
    let store = geo_store();
    let articles = articles();
    let config = site_config();
    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();

    let muenchen: Vec<_> = entries
        .iter()
        .filter(|e| e.path.ends_with("/muenchen"))
        .collect();
    assert_eq!(muenchen.len(), 1);
    assert_eq!(muenchen[0].path, "/bayern/muenchen");
    assert_eq!(muenchen[0].page_type(), PageType::IndependentCity);
}

#[test]
fn test_ineligible_district_excluded_but_counted() {
    let store = geo_store();
    let articles = articles();
    let config = site_config();
    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();
    let paths = paths(&entries);

    assert!(!paths.contains(&"/bayern/landkreis-klein"));
    // Its eligible city still gets a page under the district segment
    assert!(paths.contains(&"/bayern/landkreis-klein/kleinstadt"));
    // Ineligible city
    assert!(!paths.iter().any(|p| p.ends_with("/tutzing")));

    let bayern = store.region_by_slug("bayern").unwrap();
    let stats = store.region_stats(bayern, &config.eligibility);
    assert_eq!(stats.districts, 3);
    assert_eq!(stats.eligible_districts, 2);
}

#[test]
fn test_output_order_is_stable() {
    let store = geo_store();
    let articles = articles();
    let config = site_config();
    let enumerator = RouteEnumerator::new(&store, &articles, &config);

    let first = enumerator.enumerate(build_time()).unwrap();
    let second = enumerator.enumerate(build_time()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        &paths(&first)[..5],
        &[
            "/",
            "/leistungen/privatdetektiv",
            "/leistungen/untreue",
            "/ratgeber",
            "/bayern"
        ]
    );
}

#[test]
fn test_article_lastmod_and_geo_build_time() {
    let store = geo_store();
    let mut index = vec![];
    let mut updated = crate::testing::article("spesen", "kosten", &[], (2024, 3, 20));
    updated.updated = chrono::NaiveDate::from_ymd_opt(2024, 7, 4);
    index.push(updated);
    index.push(crate::testing::article("stundensatz", "kosten", &[], (2024, 2, 1)));
    let articles = crate::content::ArticleIndex::new(index).unwrap();
    let config = site_config();

    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();
    let lastmod = |path: &str| entries.iter().find(|e| e.path == path).unwrap().lastmod;

    assert_eq!(
        lastmod("/ratgeber/spesen"),
        Utc.with_ymd_and_hms(2024, 7, 4, 0, 0, 0).unwrap()
    );
    assert_eq!(
        lastmod("/ratgeber/stundensatz"),
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(lastmod("/bayern"), build_time());
    assert_eq!(lastmod("/"), build_time());
}

#[test]
fn test_same_identity_is_emitted_once() {
    let mut tables = geo_tables();
    // Same slug path as garching: identical identity
    tables
        .cities
        .push(city(107, 1, Some(10), "garching", 18_000, (48.25, 11.65)));
    let store = GeoStore::index(tables);
    let articles = articles();
    let mut config = site_config();
    config.static_routes.push(StaticRoute::new("/leistungen/untreue/"));

    let (entries, violations) =
        RouteEnumerator::new(&store, &articles, &config).enumerate_lenient(build_time());
    assert!(violations.is_empty(), "{violations:?}");
    assert_eq!(entries.len(), 24);
    let garching = entries
        .iter()
        .filter(|e| e.path == "/bayern/landkreis-muenchen/garching")
        .count();
    assert_eq!(garching, 1);
}

#[test]
fn test_different_identities_on_one_path_collide() {
    let store = geo_store();
    let articles = articles();
    let mut config = site_config();
    config.static_routes.push(StaticRoute::new("/bayern"));

    let err = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap_err();
    let crate::error::RouteError::Integrity(violations) = err;
    assert_eq!(
        violations,
        vec![RouteViolation::Collision {
            path: "/bayern".to_string(),
            first: PageIdentity::Static {
                path: "/bayern".to_string()
            },
            second: PageIdentity::Region {
                region: "bayern".to_string()
            },
        }]
    );
}

#[test]
fn test_dangling_references_fail_loudly() {
    let mut tables = geo_tables();
    tables.districts.push(district(20, 9, "verwaist", 80_000));
    tables
        .cities
        .push(city(300, 1, Some(99), "nirgendwo", 40_000, (48.0, 11.0)));
    let mut wrong_flag = city(301, 1, Some(10), "falsch", 40_000, (48.0, 11.0));
    wrong_flag.is_kreisfrei = true;
    tables.cities.push(wrong_flag);
    let store = GeoStore::index(tables);
    let articles = articles();
    let config = site_config();

    let err = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap_err();
    let crate::error::RouteError::Integrity(violations) = &err;
    assert_eq!(violations.len(), 3);
    assert!(violations.contains(&RouteViolation::DanglingRegion {
        entity: EntityRef::district(20),
        region_id: 9,
    }));
    assert!(violations.contains(&RouteViolation::DanglingDistrict {
        city: EntityRef::city(300),
        district_id: 99,
    }));
    assert!(violations.contains(&RouteViolation::KreisfreiMismatch {
        city: EntityRef::city(301),
        is_kreisfrei: true,
        district_id: Some(10),
    }));
    assert!(err.to_string().contains("3 problem(s)"));
}

#[test]
fn test_ineligible_city_with_dangling_district_still_reported() {
    let mut tables = geo_tables();
    tables.cities.push(city(302, 1, Some(98), "winzig", 500, (48.0, 11.0)));
    let store = GeoStore::index(tables);
    let articles = articles();
    let config = site_config();

    let (_, violations) =
        RouteEnumerator::new(&store, &articles, &config).enumerate_lenient(build_time());
    assert_eq!(violations.len(), 1);
}

#[test]
fn test_known_routes() {
    let store = geo_store();
    let articles = articles();
    let config = site_config();
    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();
    let known = known_routes(&entries);
    assert!(known.contains("/leistungen/privatdetektiv"));
    assert!(known.contains("/ratgeber/detektiv-kosten"));
    assert_eq!(known.len(), entries.len());
}

#[test]
fn test_static_route_overrides() {
    let store = geo_store();
    let articles = articles();
    let mut config = site_config();
    config.static_routes[0].priority = Some(1.0);
    config.static_routes[0].changefreq = Some(ChangeFreq::Daily);

    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();
    assert_eq!(entries[0].path, "/");
    assert_eq!(entries[0].url, "https://www.example-detektei.de/");
    assert_eq!(entries[0].priority, 1.0);
    assert_eq!(entries[0].changefreq, ChangeFreq::Daily);
    assert_eq!(entries[1].priority, 0.5);
}

#[test]
fn test_geo_identity() {
    let store = geo_store();
    let garching = crate::geo::GeoEntity::City(store.city(102).unwrap());
    assert_eq!(
        geo_identity(&store, &garching).unwrap().path("/ratgeber"),
        "/bayern/landkreis-muenchen/garching"
    );
    let berlin = crate::geo::GeoEntity::City(store.city(200).unwrap());
    assert_eq!(
        geo_identity(&store, &berlin).unwrap(),
        PageIdentity::IndependentCity {
            region: "berlin".into(),
            city: "berlin".into()
        }
    );
}

#[test]
fn test_sitemap_xml() {
    let store = geo_store();
    let articles = articles();
    let mut config = site_config();
    config.static_routes = vec![StaticRoute::new("/suche?q=a&b=c")];

    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();
    let xml = to_sitemap_xml(&entries);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
    assert!(xml.trim_end().ends_with("</urlset>"));
    assert_eq!(xml.matches("<url>").count(), entries.len());
    assert!(xml.contains("<loc>https://www.example-detektei.de/suche?q=a&amp;b=c</loc>"));
    assert!(xml.contains("<loc>https://www.example-detektei.de/bayern</loc>"));
    assert!(xml.contains("<lastmod>2024-09-01</lastmod>"));
    assert!(xml.contains("<priority>0.9</priority>"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
}

#[test]
fn test_sitemap_priority_is_not_rounded() {
    let store = geo_store();
    let articles = articles();
    let mut config = site_config();
    let mut kontakt = StaticRoute::new("/kontakt");
    kontakt.priority = Some(0.75);
    config.static_routes = vec![kontakt];

    let entries = RouteEnumerator::new(&store, &articles, &config)
        .enumerate(build_time())
        .unwrap();
    assert_eq!(entries[0].priority, 0.75);

    let xml = to_sitemap_xml(&entries);
    assert!(xml.contains(
        "<loc>https://www.example-detektei.de/kontakt</loc>\n    <lastmod>2024-09-01</lastmod>\n    <changefreq>monthly</changefreq>\n    <priority>0.75</priority>"
    ));
}
