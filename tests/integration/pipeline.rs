//! End-to-end behavior over a fixture site tree

use std::fs;

use pseo::content::GraphViolation;
use pseo::page::PageType;
use pseo::Site;

use super::helpers::{article, build_time, write_article, write_site};

#[test]
fn test_fixture_site_loads_clean() {
    let (_temp, config) = write_site();
    let site = Site::load(&config).unwrap();

    assert_eq!(site.geo.list_regions().len(), 1);
    assert_eq!(site.graph.articles().len(), 3);
    // Slugs derived from names
    assert!(site.geo.city_by_slug("bayern", None, "muenchen").is_some());

    let report = site.check(build_time());
    assert!(report.is_clean(), "{report}");
}

#[test]
fn test_routes_from_fixture() {
    let (_temp, config) = write_site();
    let site = Site::load(&config).unwrap();
    let entries = site.routes(build_time()).unwrap();
    let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "/",
            "/leistungen/privatdetektiv",
            "/ratgeber",
            "/bayern",
            "/bayern/landkreis-muenchen",
            "/bayern/muenchen",
            "/bayern/landkreis-muenchen/garching",
            "/bayern/landkreis-klein/kleinstadt",
            "/ratgeber/detektiv-kosten",
            "/ratgeber/spesen",
            "/ratgeber/stundensatz",
        ]
    );
    assert_eq!(
        entries
            .iter()
            .filter(|e| e.page_type() == PageType::District)
            .count(),
        1
    );
}

#[test]
fn test_missing_pillar_reported_once() {
    let (temp, config) = write_site();
    fs::write(
        temp.path().join("data/content-graph.yaml"),
        "pillars:\n  detektiv-kosten: [stundensatz]\n  entfernt: [spesen]\n",
    )
    .unwrap();

    let site = Site::load(&config).unwrap();
    let report = site.check(build_time());
    assert_eq!(
        report.graph_violations,
        vec![GraphViolation::MissingPillar {
            cluster: "spesen".to_string(),
            pillar: "entfernt".to_string(),
        }]
    );
    assert_eq!(report.problem_count(), 1);
}

#[test]
fn test_geo_violations_fail_load_with_every_problem() {
    let (temp, config) = write_site();
    let broken = super::helpers::GEO_BAYERN
        .replace("    district_id: 11\n", "    district_id: 77\n")
        .replace("name: Garching", "name: Garching\n    slug: Ungültig Slug");
    fs::write(temp.path().join("data/geo/bayern.yaml"), broken).unwrap();

    let err = Site::load(&config).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("2 problem(s)"), "{msg}");
    assert!(msg.contains("77"), "{msg}");
}

#[test]
fn test_duplicate_article_slug_fails_load() {
    let (temp, config) = write_site();
    write_article(
        temp.path(),
        "kopie",
        "---\nslug: spesen\ntitle: Kopie\ncategory: kosten\ndate: 2024-01-01\n---\nText\n",
    );
    let err = Site::load(&config).unwrap_err();
    assert!(format!("{err:#}").contains("spesen"));
}

#[test]
fn test_missing_variant_pool_reported() {
    let (temp, config) = write_site();
    fs::write(
        temp.path().join("data/variants.yaml"),
        "slots:\n  headline:\n    large: [headline.a]\nrequired:\n  city: [headline]\n",
    )
    .unwrap();

    let site = Site::load(&config).unwrap();
    let report = site.check(build_time());
    // Garching and Kleinstadt are small, eligible city pages
    assert_eq!(report.missing_variants.len(), 2);
    assert!(report
        .problems()
        .iter()
        .all(|p| p.contains("slot 'headline'")));
}

#[test]
fn test_linking_over_loaded_site() {
    let (temp, config) = write_site();
    write_article(
        temp.path(),
        "detektei-waehlen",
        &article("Detektei wählen", "ratgeber", "2024-05-01", "Text"),
    );
    let site = Site::load(&config).unwrap();
    let linker = site.linker();

    let related = linker.related("spesen").unwrap();
    assert_eq!(related.pillar.unwrap().url, "/ratgeber/detektiv-kosten");
    assert_eq!(related.items.len(), 1);
    assert_eq!(related.services[0].url, "/leistungen/privatdetektiv");

    assert!(linker.related("detektei-waehlen").unwrap().is_empty());

    let body = linker.linked_body("detektiv-kosten").unwrap();
    assert_eq!(
        body.trim_end(),
        "Ein [Privatdetektiv](/leistungen/privatdetektiv) rechnet nach Stunden ab."
    );
}

#[test]
fn test_config_errors_are_reported() {
    let (temp, config) = write_site();
    fs::write(
        temp.path().join("pseo.toml"),
        "[site]\nbase_url = \"ftp://example.de\"\n",
    )
    .unwrap();
    let err = Site::load(&config).unwrap_err();
    assert!(format!("{err:#}").contains("base_url"));
}

#[test]
fn test_missing_articles_dir_fails_load() {
    let (temp, config) = write_site();
    let mistyped = format!(
        "{}\n[sources]\narticles = \"content/ratgebr\"\n",
        super::helpers::CONFIG
    );
    fs::write(&config, mistyped).unwrap();

    let err = Site::load(&config).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Failed to load content"), "{msg}");
    assert!(msg.contains("no articles found under"), "{msg}");
    assert!(msg.contains("ratgebr"), "{msg}");

    // The real directory without any article fails the same way
    fs::remove_dir_all(temp.path().join("content")).unwrap();
    fs::write(&config, super::helpers::CONFIG).unwrap();
    assert!(Site::load(&config).is_err());
}

#[test]
fn test_routes_refuse_broken_content_graph() {
    let (temp, config) = write_site();
    fs::write(
        temp.path().join("data/content-graph.yaml"),
        "pillars:\n  detektiv-kosten: [stundensatz, fehlt]\n",
    )
    .unwrap();

    let site = Site::load(&config).unwrap();
    let err = site.routes(build_time()).unwrap_err();
    assert!(format!("{err:#}").contains("'fehlt'"));
}
