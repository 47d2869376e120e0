//! Shared fixtures for unit tests

use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::content::{Article, ArticleIndex, ContentGraph, GraphSource, ServicePage};
use crate::geo::{City, Coordinates, District, GeoStore, GeoTables, Region};
use crate::variant::VariantCatalog;

pub(crate) fn region(id: u32, name: &str, slug: &str, population: u64) -> Region {
    Region {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        capital: name.to_string(),
        population,
        area_km2: 0.0,
    }
}

pub(crate) fn district(id: u32, region_id: u32, slug: &str, population: u64) -> District {
    District {
        id,
        name: slug.to_string(),
        slug: slug.to_string(),
        seat: slug.to_string(),
        population,
        area_km2: 0.0,
        region_id,
    }
}

pub(crate) fn city(
    id: u32,
    region_id: u32,
    district_id: Option<u32>,
    slug: &str,
    population: u64,
    coords: (f64, f64),
) -> City {
    City {
        id,
        name: slug.to_string(),
        slug: slug.to_string(),
        population,
        postal_codes: vec![],
        coordinates: Some(Coordinates {
            lat: coords.0,
            lon: coords.1,
        }),
        region_id,
        district_id,
        is_kreisfrei: district_id.is_none(),
    }
}

/// Two regions; Bayern has three districts (one below the district
/// threshold) and a mix of eligible and ineligible cities.
pub(crate) fn geo_tables() -> GeoTables {
    GeoTables {
        regions: vec![
            region(1, "Bayern", "bayern", 13_176_989),
            region(2, "Berlin", "berlin", 3_755_251),
        ],
        districts: vec![
            district(10, 1, "landkreis-muenchen", 350_473),
            district(11, 1, "landkreis-starnberg", 136_092),
            district(12, 1, "landkreis-klein", 30_000),
        ],
        cities: vec![
            city(100, 1, None, "muenchen", 1_512_491, (48.137, 11.575)),
            city(101, 1, None, "augsburg", 301_033, (48.371, 10.898)),
            city(102, 1, Some(10), "garching", 18_000, (48.249, 11.651)),
            city(103, 1, Some(10), "unterschleissheim", 29_000, (48.280, 11.577)),
            city(104, 1, Some(11), "starnberg", 23_500, (47.998, 11.340)),
            city(105, 1, Some(11), "tutzing", 9_800, (47.909, 11.281)),
            city(106, 1, Some(12), "kleinstadt", 12_000, (48.500, 12.000)),
            city(200, 2, None, "berlin", 3_755_251, (52.520, 13.405)),
        ],
    }
}

pub(crate) fn geo_store() -> GeoStore {
    GeoStore::build(geo_tables()).unwrap()
}

pub(crate) fn article(slug: &str, category: &str, tags: &[&str], date: (i32, u32, u32)) -> Article {
    Article {
        slug: slug.to_string(),
        title: format!("Title {slug}"),
        description: format!("About {slug}"),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        updated: None,
        faq: vec![],
        sources: vec![],
        keywords: vec![],
        body: String::new(),
    }
}

pub(crate) fn articles() -> ArticleIndex {
    ArticleIndex::new(vec![
        article("detektiv-kosten", "kosten", &["kosten", "preise"], (2024, 1, 10)),
        article("stundensatz", "kosten", &["kosten"], (2024, 2, 1)),
        article("kosten-absetzen", "kosten", &["kosten", "steuer"], (2024, 3, 5)),
        article("spesen", "kosten", &["kosten", "preise"], (2024, 3, 20)),
        article("untreue-nachweisen", "beziehung", &["untreue"], (2024, 4, 1)),
        article("anzeichen-untreue", "beziehung", &["untreue", "anzeichen"], (2024, 4, 15)),
        article("detektei-finden", "ratgeber", &["auswahl", "kosten"], (2024, 5, 1)),
        article("seriositaet-pruefen", "ratgeber", &["auswahl"], (2024, 6, 1)),
        article("detektiv-beruf", "beruf", &["karriere"], (2023, 12, 1)),
    ])
    .unwrap()
}

pub(crate) fn graph_source() -> GraphSource {
    let mut source = GraphSource::default();
    source.pillars.insert(
        "detektiv-kosten".to_string(),
        vec![
            "stundensatz".to_string(),
            "kosten-absetzen".to_string(),
            "spesen".to_string(),
        ],
    );
    source.pillars.insert(
        "untreue-nachweisen".to_string(),
        vec!["anzeichen-untreue".to_string()],
    );
    source.services.insert(
        "kosten".to_string(),
        vec![ServicePage {
            url: "/leistungen/privatdetektiv".to_string(),
            title: "Privatdetektiv beauftragen".to_string(),
            keywords: vec!["Privatdetektiv".to_string()],
        }],
    );
    source.services.insert(
        "beziehung".to_string(),
        vec![ServicePage {
            url: "/leistungen/untreue".to_string(),
            title: "Untreue aufdecken".to_string(),
            keywords: vec![],
        }],
    );
    source
}

pub(crate) fn content_graph() -> ContentGraph {
    ContentGraph::build(graph_source(), articles())
}

pub(crate) fn variant_catalog() -> VariantCatalog {
    serde_yaml::from_str(
        r#"
slots:
  headline:
    any: [headline.a, headline.b, headline.c]
  intro:
    small: [intro.small.a, intro.small.b]
    medium: [intro.medium.a, intro.medium.b, intro.medium.c]
    large: [intro.large.a, intro.large.b]
  cta:
    any: [cta.a, cta.b]
required:
  region: [headline, intro]
  district: [headline, intro]
  independent_city: [headline, intro, cta]
  city: [headline, intro, cta]
"#,
    )
    .unwrap()
}

pub(crate) fn site_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.base_url = "https://www.example-detektei.de".to_string();
    config.site.blog_path = "/ratgeber".to_string();
    config.eligibility.city_min_population = 10_000;
    config.eligibility.district_min_population = 50_000;
    config.static_routes = vec![
        crate::config::StaticRoute::new("/"),
        crate::config::StaticRoute::new("/leistungen/privatdetektiv"),
        crate::config::StaticRoute::new("/leistungen/untreue"),
    ];
    config
}
