use super::*;

use std::collections::HashSet;

// =============================================================
// Catalog invariants
// =============================================================

#[test]
fn catalog_ids_are_unique() {
    let records = catalog();
    let ids: HashSet<&str> = records.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn every_filter_tag_matches_at_least_one_record() {
    let records = catalog();
    for tag in FILTER_TAGS.iter().filter(|t| **t != FILTER_ALL) {
        assert!(
            records.iter().any(|p| p.has_tag(tag)),
            "filter tag {tag} has no matching record"
        );
    }
}

// =============================================================
// filter_catalog
// =============================================================

#[test]
fn filter_all_returns_full_catalog_in_order() {
    assert_eq!(filter_catalog(FILTER_ALL), catalog());
}

#[test]
fn filter_returns_exact_subsequence_in_catalog_order() {
    for tag in ["web", "ui", "game"] {
        let expected: Vec<ProjectRecord> =
            catalog().into_iter().filter(|p| p.has_tag(tag)).collect();
        assert_eq!(filter_catalog(tag), expected);
        assert!(!expected.is_empty());
    }
}

#[test]
fn filter_web_preserves_catalog_order() {
    let ids: Vec<String> = filter_catalog("web").into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["p1", "p2", "p5"]);
}

#[test]
fn filter_with_unknown_tag_yields_empty_selection() {
    assert!(filter_catalog("embedded").is_empty());
}

// =============================================================
// find_project
// =============================================================

#[test]
fn find_project_returns_matching_record() {
    let p = find_project("p3").unwrap();
    assert_eq!(p.title, "Mini Game");
    assert_eq!(p.tags, ["game"]);
    assert_eq!(p.links.len(), 1);
    assert_eq!(p.links[0].label, "Play");
}

#[test]
fn find_project_returns_none_for_unknown_id() {
    assert!(find_project("p99").is_none());
}

// =============================================================
// Serialization shape
// =============================================================

#[test]
fn record_serializes_with_stable_field_names() {
    let value = serde_json::to_value(find_project("p1").unwrap()).unwrap();
    assert_eq!(value["id"], "p1");
    assert_eq!(value["title"], "Portfolio Website");
    assert_eq!(value["tags"][0], "web");
    assert_eq!(value["links"][1]["label"], "Source");
}
