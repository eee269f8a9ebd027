//! Fixed project catalog and tag filtering.
//!
//! The catalog is constructed once per call and never mutated; every filter
//! change recomputes the visible subsequence from scratch rather than
//! diffing, which is cheap at this scale and keeps ordering rules obvious.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Sentinel filter value selecting the whole catalog.
pub const FILTER_ALL: &str = "all";

/// Filter controls shown in the projects section, sentinel first.
pub const FILTER_TAGS: [&str; 4] = [FILTER_ALL, "web", "ui", "game"];

/// An outbound action attached to a project (demo, source, docs, ...).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// One project entry. Immutable for the session; `id` is the stable lookup
/// key used by detail-view actions.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub links: Vec<ProjectLink>,
}

impl ProjectRecord {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn record(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    links: &[(&str, &str)],
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        links: links
            .iter()
            .map(|(label, url)| ProjectLink { label: (*label).to_owned(), url: (*url).to_owned() })
            .collect(),
    }
}

/// The full project catalog in display order.
#[must_use]
pub fn catalog() -> Vec<ProjectRecord> {
    vec![
        record(
            "p1",
            "Portfolio Website",
            "Personal portfolio with animations and CMS-free workflow.",
            &["web", "ui"],
            &[("View", "#"), ("Source", "#")],
        ),
        record(
            "p2",
            "Task Manager App",
            "Progressive web app for managing tasks with offline support.",
            &["web"],
            &[("Demo", "#")],
        ),
        record(
            "p3",
            "Mini Game",
            "A small canvas game showcasing physics and rendering.",
            &["game"],
            &[("Play", "#")],
        ),
        record(
            "p4",
            "Design System",
            "Component library and style guide for scalable UI.",
            &["ui"],
            &[("Docs", "#")],
        ),
        record(
            "p5",
            "Data Visualizer",
            "Interactive charts with accessibility and performance in mind.",
            &["web", "ui"],
            &[("Explore", "#")],
        ),
        record(
            "p6",
            "Animation Experiments",
            "Micro-interactions and CSS/JS animation library.",
            &["ui", "game"],
            &[("Read", "#")],
        ),
    ]
}

/// Select the subsequence of the catalog matching `filter`, preserving
/// catalog order. The sentinel [`FILTER_ALL`] selects every record; a tag
/// matching nothing yields an empty (still valid) selection.
#[must_use]
pub fn filter_catalog(filter: &str) -> Vec<ProjectRecord> {
    catalog()
        .into_iter()
        .filter(|p| filter == FILTER_ALL || p.has_tag(filter))
        .collect()
}

/// Look up a single record by id.
#[must_use]
pub fn find_project(id: &str) -> Option<ProjectRecord> {
    catalog().into_iter().find(|p| p.id == id)
}
