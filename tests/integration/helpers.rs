//! Shared helpers for writing site fixture trees

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

pub const CONFIG: &str = r#"
[site]
base_url = "https://www.example-detektei.de"
blog_path = "/ratgeber"

[[static_routes]]
path = "/"

[[static_routes]]
path = "/leistungen/privatdetektiv"
"#;

pub const GEO_BAYERN: &str = r#"
regions:
  - id: 1
    name: Bayern
    capital: München
    population: 13176989
    area_km2: 70542

districts:
  - id: 10
    name: Landkreis München
    slug: landkreis-muenchen
    seat: München
    population: 350473
    region_id: 1
  - id: 11
    name: Landkreis Klein
    slug: landkreis-klein
    seat: Kleinstadt
    population: 30000
    region_id: 1

cities:
  - id: 100
    name: München
    population: 1512491
    coordinates: { lat: 48.137, lon: 11.575 }
    region_id: 1
    is_kreisfrei: true
  - id: 101
    name: Garching
    population: 18917
    coordinates: { lat: 48.249, lon: 11.651 }
    region_id: 1
    district_id: 10
  - id: 102
    name: Kleinstadt
    population: 12000
    coordinates: { lat: 48.5, lon: 12.0 }
    region_id: 1
    district_id: 11
  - id: 103
    name: Dorf
    population: 900
    region_id: 1
    district_id: 10
"#;

pub const GRAPH: &str = r#"
pillars:
  detektiv-kosten: [stundensatz, spesen]
services:
  kosten:
    - url: /leistungen/privatdetektiv
      title: Privatdetektiv beauftragen
      keywords: [Privatdetektiv]
"#;

pub const VARIANTS: &str = r#"
slots:
  headline:
    any: [headline.a, headline.b, headline.c]
  intro:
    small: [intro.small.a, intro.small.b]
    medium: [intro.medium.a]
    large: [intro.large.a, intro.large.b]
required:
  region: [headline, intro]
  district: [headline, intro]
  independent_city: [headline, intro]
  city: [headline, intro]
"#;

pub fn article(title: &str, category: &str, date: &str, body: &str) -> String {
    format!("---\ntitle: {title}\ncategory: {category}\ndate: {date}\n---\n\n{body}\n")
}

/// Write a complete small site into a temp dir and return it with the
/// config path
pub fn write_site() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let root = temp.path();

    fs::create_dir_all(root.join("data/geo")).unwrap();
    fs::create_dir_all(root.join("content/ratgeber")).unwrap();

    fs::write(root.join("pseo.toml"), CONFIG).unwrap();
    fs::write(root.join("data/geo/bayern.yaml"), GEO_BAYERN).unwrap();
    fs::write(root.join("data/content-graph.yaml"), GRAPH).unwrap();
    fs::write(root.join("data/variants.yaml"), VARIANTS).unwrap();

    write_article(
        root,
        "detektiv-kosten",
        &article(
            "Was kostet ein Detektiv?",
            "kosten",
            "2024-01-10",
            "Ein Privatdetektiv rechnet nach Stunden ab.",
        ),
    );
    write_article(
        root,
        "stundensatz",
        &article("Stundensatz", "kosten", "2024-02-01", "Text"),
    );
    write_article(
        root,
        "spesen",
        &article("Spesen", "kosten", "2024-03-20", "Text"),
    );

    let config = root.join("pseo.toml");
    (temp, config)
}

pub fn write_article(root: &Path, slug: &str, content: &str) {
    fs::write(root.join(format!("content/ratgeber/{slug}.md")), content).unwrap();
}

/// `pseo.toml` of the data shipped with the crate
pub fn shipped_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("pseo.toml")
}

pub fn build_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 6, 0, 0).unwrap()
}
