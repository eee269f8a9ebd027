//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod contact_form;
pub mod project_card;
pub mod project_modal;
pub mod site_header;
pub mod skills_panel;
