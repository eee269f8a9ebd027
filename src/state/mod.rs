//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`catalog`, `gallery`, `skills`, `contact`) so
//! view components stay thin and the behavior stays unit-testable without a
//! browser.

pub mod catalog;
pub mod contact;
pub mod gallery;
pub mod skills;
