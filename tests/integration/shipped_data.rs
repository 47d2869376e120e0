//! Checks over the reference data shipped in `data/` and `content/`

use pseo::geo::GeoEntity;
use pseo::page::PageType;
use pseo::Site;

use super::helpers::{build_time, shipped_config};

fn site() -> Site {
    Site::load(&shipped_config()).expect("shipped site should load")
}

#[test]
fn test_shipped_data_is_clean() {
    let site = site();
    let report = site.check(build_time());
    assert!(report.is_clean(), "{report}");
    assert_eq!(report.routes, 71);
}

#[test]
fn test_sixteen_regions() {
    let site = site();
    assert_eq!(site.geo.list_regions().len(), 16);
}

#[test]
fn test_bayern_is_always_eligible() {
    let site = site();
    let bayern = site.geo.region_by_slug("bayern").unwrap();
    assert_eq!(bayern.population, 13_176_989);
    assert!(site.eligibility().is_eligible(&GeoEntity::Region(bayern)));

    let entries = site.routes(build_time()).unwrap();
    assert!(entries.iter().any(|e| e.path == "/bayern"));
}

#[test]
fn test_kreisfrei_city_has_one_route() {
    let site = site();
    let entries = site.routes(build_time()).unwrap();
    let muenchen: Vec<_> = entries
        .iter()
        .filter(|e| e.path.ends_with("/muenchen"))
        .collect();
    assert_eq!(muenchen.len(), 1);
    assert_eq!(muenchen[0].path, "/bayern/muenchen");
    assert_eq!(muenchen[0].page_type(), PageType::IndependentCity);
}

#[test]
fn test_small_towns_have_no_route() {
    let site = site();
    let entries = site.routes(build_time()).unwrap();
    assert!(!entries.iter().any(|e| e.path.ends_with("/tutzing")));
    assert!(!entries.iter().any(|e| e.path.ends_with("/berchtesgaden")));

    let bayern = site.geo.region_by_slug("bayern").unwrap();
    let stats = site.geo.region_stats(bayern, site.eligibility());
    assert_eq!(stats.cities, 15);
    assert_eq!(stats.eligible_cities, 13);
    assert_eq!(stats.independent_cities, 6);
}

#[test]
fn test_variant_plan_is_stable_across_loads() {
    let first = site();
    let second = site();
    for path in ["/bayern", "/bayern/muenchen", "/nordrhein-westfalen/kreis-olpe/olpe"] {
        let a = pseo::commands::variant::plan(&first, path, None).unwrap();
        let b = pseo::commands::variant::plan(&second, path, None).unwrap();
        let keys = |p: &pseo::commands::variant::VariantPlan| {
            p.choices.iter().map(|c| c.key.clone()).collect::<Vec<_>>()
        };
        assert_eq!(keys(&a), keys(&b), "{path}");
        assert!(!a.choices.is_empty());
    }
}

#[test]
fn test_shipped_pillar_clusters() {
    let site = site();
    let related = site.linker().related("privatdetektiv-kosten").unwrap();
    let slugs: Vec<_> = related.items.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        slugs,
        vec![
            "/ratgeber/detektiv-stundensatz",
            "/ratgeber/detektivkosten-absetzen",
            "/ratgeber/detektiv-spesen",
        ]
    );
}

#[test]
fn test_unknown_geo_path_is_an_error() {
    let site = site();
    assert!(pseo::commands::variant::plan(&site, "/atlantis", None).is_err());
}
