//! Project section chrome state: active filter and open detail view.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::state::catalog::{FILTER_ALL, ProjectRecord, filter_catalog, find_project};

/// Current filter selection and detail-view state for the project gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    /// Most recently selected filter tag, initially [`FILTER_ALL`].
    pub active_filter: String,
    /// Id of the record shown in the detail modal, `None` when closed.
    pub open_project: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { active_filter: FILTER_ALL.to_owned(), open_project: None }
    }
}

impl GalleryState {
    pub fn set_filter(&mut self, tag: &str) {
        self.active_filter = tag.to_owned();
    }

    /// The filtered subsequence currently visible in the grid.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<ProjectRecord> {
        filter_catalog(&self.active_filter)
    }

    /// Open the detail view for `id`. Unknown ids are a silent no-op: detail
    /// actions always carry catalog-supplied ids, so a miss is benign.
    pub fn open_detail(&mut self, id: &str) {
        if find_project(id).is_some() {
            self.open_project = Some(id.to_owned());
        }
    }

    /// Close the detail view. Idempotent.
    pub fn close_detail(&mut self) {
        self.open_project = None;
    }

    /// The record backing the open detail view, if any.
    #[must_use]
    pub fn open_record(&self) -> Option<ProjectRecord> {
        self.open_project.as_deref().and_then(find_project)
    }
}
