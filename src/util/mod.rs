//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic; every function here degrades to an inert no-op when the
//! `hydrate` feature is off so server rendering stays deterministic.

pub mod dom;
pub mod theme;
