//! planwright library
//!
//! Module dependency and selection resolver for assembling a project work
//! plan from a catalog of reusable deliverable modules.
//!
//! The catalog and template registry are read-only inputs; a
//! [`PlanSession`] owns the ordered selection and exposes toggle, move,
//! template loading, prerequisite status and finalization.

pub mod catalog;
pub mod catalog_file;
pub mod cli;
pub mod error;
pub mod logic;
pub mod ops;
pub mod plan;
pub mod selection;
pub mod session;
pub mod templates;
pub mod types;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogError, Module};
pub use catalog_file::CatalogFile;
pub use error::PlanwrightError;
pub use logic::ordering::{PrecedenceViolation, ViolationKind};
pub use logic::status::PrerequisiteStatus;
pub use ops::PlanOp;
pub use plan::{CategoryEffort, PlanSummary, ProjectPlan};
pub use selection::{Selection, SelectionError};
pub use session::PlanSession;
pub use templates::{StrategyTemplate, Template, TemplateRegistry};
pub use types::{Category, ModuleId};
