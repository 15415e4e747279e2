use std::fs;

use folio_catalog::{CatalogError, CatalogList, CatalogWatcher, ContentCatalog, load_from_path};
use folio_types::IconTag;

const YAML_CATALOG: &str = r##"
navItems:
  - label: Work
    href: "#portfolio"
skills:
  - name: Automation
    description: Workflows that run themselves.
    icon: Bot
  - name: Mystery
    description: Icon the grid has never heard of.
    icon: Sparkles
portfolio: []
testimonials:
  - name: Ayesha Khan
    role: Head of Growth
    company: TechFlow
    content: Fast and thoughtful.
    image: https://picsum.photos/seed/ayesha/100/100
"##;

#[test]
fn loads_yaml_catalog_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.yaml");
    fs::write(&path, YAML_CATALOG).expect("write catalog");

    let catalog = load_from_path(&path).expect("load yaml catalog");
    assert_eq!(catalog.nav_items.len(), 1);
    assert_eq!(catalog.skills[1].icon, IconTag::Unknown);
    assert!(catalog.portfolio.is_empty());
    assert_eq!(catalog.testimonials[0].company, "TechFlow");
}

#[test]
fn loads_json_catalog_and_preserves_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.json");
    let json = r##"{
        "navItems": [
            {"label": "C", "href": "#c"},
            {"label": "A", "href": "#a"},
            {"label": "B", "href": "#b"}
        ]
    }"##;
    fs::write(&path, json).expect("write catalog");

    let catalog = load_from_path(&path).expect("load json catalog");
    let labels: Vec<&str> = catalog.nav_items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["C", "A", "B"]);
}

#[test]
fn duplicate_testimonial_names_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dupes.json");
    let json = r##"{
        "testimonials": [
            {"name": "Sam", "role": "CEO", "company": "A", "content": "x", "image": "https://example.com/a.png"},
            {"name": "Sam", "role": "CTO", "company": "B", "content": "y", "image": "https://example.com/b.png"}
        ]
    }"##;
    fs::write(&path, json).expect("write catalog");

    match load_from_path(&path) {
        Err(CatalogError::DuplicateKey { list, key }) => {
            assert_eq!(list, CatalogList::Testimonials);
            assert_eq!(key, "Sam");
        }
        other => panic!("expected duplicate key error, got {other:?}"),
    }
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let error = load_from_path(&path).expect_err("missing file");
    assert!(matches!(error, CatalogError::Io { .. }));
    assert!(error.to_string().contains("absent.json"), "message: {error}");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"navItems\": [ }").expect("write catalog");
    assert!(matches!(load_from_path(&path), Err(CatalogError::Json(_))));
}

#[test]
fn watcher_requires_an_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (sender, _receiver) = tokio::sync::mpsc::unbounded_channel();
    let result = CatalogWatcher::spawn(&dir.path().join("absent.json"), ContentCatalog::default(), sender);
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

fn nav_catalog(labels: &[&str]) -> String {
    let items: Vec<String> = labels
        .iter()
        .map(|label| format!(r##"{{"label": "{label}", "href": "#{}"}}"##, label.to_lowercase()))
        .collect();
    format!(r#"{{"navItems": [{}]}}"#, items.join(", "))
}

async fn next_reload(receiver: &mut tokio::sync::mpsc::UnboundedReceiver<ContentCatalog>) -> ContentCatalog {
    tokio::time::timeout(std::time::Duration::from_secs(5), receiver.recv())
        .await
        .expect("reload within timeout")
        .expect("watcher channel open")
}

#[tokio::test]
async fn watcher_publishes_valid_edits_and_skips_invalid_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.json");
    fs::write(&path, nav_catalog(&["A"])).expect("write catalog");
    let current = load_from_path(&path).expect("initial catalog");

    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
    let _watcher = CatalogWatcher::spawn(&path, current, sender).expect("watcher");

    fs::write(&path, nav_catalog(&["B"])).expect("write catalog");
    let reloaded = next_reload(&mut receiver).await;
    assert_eq!(reloaded.nav_items[0].label, "B");

    fs::write(&path, nav_catalog(&["C", "C"])).expect("write catalog");
    let skipped = tokio::time::timeout(std::time::Duration::from_millis(750), receiver.recv()).await;
    assert!(skipped.is_err(), "duplicate-key edit must not be published");

    fs::write(&path, nav_catalog(&["D"])).expect("write catalog");
    let reloaded = next_reload(&mut receiver).await;
    assert_eq!(reloaded.nav_items.len(), 1);
    assert_eq!(reloaded.nav_items[0].label, "D");
    assert_eq!(reloaded.nav_items[0].href, "#d");
}
