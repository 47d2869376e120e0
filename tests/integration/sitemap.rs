//! Sitemap rendering and writing

use std::fs;

use quick_xml::events::Event;
use quick_xml::Reader;

use pseo::commands::sitemap;
use pseo::routes::to_sitemap_xml;
use pseo::Site;

use super::helpers::{build_time, write_site};

/// Collect the text of every `<loc>` element
fn locs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut in_loc = false;
    let mut out = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => in_loc = e.name().as_ref() == b"loc",
            Ok(Event::Text(ref e)) if in_loc => {
                out.push(e.unescape().unwrap().to_string());
            }
            Ok(Event::End(_)) => in_loc = false,
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid sitemap XML: {e}"),
            _ => {}
        }
        buf.clear();
    }
    out
}

#[test]
fn test_sitemap_is_well_formed_and_complete() {
    let (_temp, config) = write_site();
    let site = Site::load(&config).unwrap();
    let entries = site.routes(build_time()).unwrap();

    let xml = to_sitemap_xml(&entries);
    let urls = locs(&xml);

    assert_eq!(urls.len(), entries.len());
    assert_eq!(urls[0], "https://www.example-detektei.de/");
    assert!(urls.contains(&"https://www.example-detektei.de/bayern/muenchen".to_string()));
    assert!(urls.iter().all(|u| u.starts_with("https://www.example-detektei.de/")));
}

#[test]
fn test_sitemap_command_writes_file() {
    let (temp, config) = write_site();
    let site = Site::load(&config).unwrap();
    let output = temp.path().join("public/sitemap.xml");
    fs::create_dir_all(output.parent().unwrap()).unwrap();

    sitemap::execute(&site, build_time(), Some(&output)).unwrap();

    let xml = fs::read_to_string(&output).unwrap();
    assert_eq!(locs(&xml).len(), 11);
    assert!(xml.contains("<lastmod>2024-03-20</lastmod>"));
}

#[test]
fn test_sitemap_to_missing_dir_fails_with_context() {
    let (temp, config) = write_site();
    let site = Site::load(&config).unwrap();
    let output = temp.path().join("gibt/es/nicht/sitemap.xml");

    let err = sitemap::execute(&site, build_time(), Some(&output)).unwrap_err();
    assert!(err.to_string().contains("Failed to write sitemap"));
}
