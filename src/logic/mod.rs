//! Logic modules — pure computations over a catalog and a selection.
//!
//! Nothing in here owns state; [`crate::session::PlanSession`] composes these
//! functions into the selection engine.
//!
//! # Modules
//!
//! - `status` — Prerequisite status of a single module
//! - `cascade` — Missing transitive prerequisites, in insertion order
//! - `ordering` — Free-form moves and precedence diagnostics
//! - `template_loader` — Wholesale replacement from a template

pub mod cascade;
pub mod ordering;
pub mod status;
pub mod template_loader;
