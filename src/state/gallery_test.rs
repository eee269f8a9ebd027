use super::*;

use crate::state::catalog::catalog;

#[test]
fn gallery_defaults_to_all_filter_with_no_open_detail() {
    let g = GalleryState::default();
    assert_eq!(g.active_filter, FILTER_ALL);
    assert_eq!(g.open_project, None);
    assert_eq!(g.visible_projects(), catalog());
}

#[test]
fn set_filter_changes_visible_subsequence() {
    let mut g = GalleryState::default();
    g.set_filter("game");
    let ids: Vec<String> = g.visible_projects().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["p3", "p6"]);
}

#[test]
fn set_filter_with_no_matches_yields_empty_visible_set() {
    let mut g = GalleryState::default();
    g.set_filter("backend");
    assert!(g.visible_projects().is_empty());
}

#[test]
fn open_detail_with_known_id_exposes_matching_record() {
    let mut g = GalleryState::default();
    g.open_detail("p4");
    assert_eq!(g.open_project.as_deref(), Some("p4"));
    let record = g.open_record().unwrap();
    assert_eq!(record.title, "Design System");
    assert_eq!(record.description, "Component library and style guide for scalable UI.");
}

#[test]
fn open_detail_with_unknown_id_leaves_prior_state_unchanged() {
    let mut g = GalleryState::default();
    g.open_detail("nope");
    assert_eq!(g.open_project, None);

    g.open_detail("p2");
    g.open_detail("nope");
    assert_eq!(g.open_project.as_deref(), Some("p2"));
}

#[test]
fn close_detail_is_idempotent() {
    let mut g = GalleryState::default();
    g.open_detail("p1");
    g.close_detail();
    let once = g.clone();
    g.close_detail();
    assert_eq!(g, once);
    assert_eq!(g.open_project, None);
    assert_eq!(g.open_record(), None);
}
