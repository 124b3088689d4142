//! Prerequisite status resolver.
//!
//! Answers "can this module be added without pulling anything else in?" for
//! the current selection. Recomputed on every call so it can never go stale
//! as the selection changes.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::selection::{Selection, SelectionError};
use crate::types::ModuleId;

/// Prerequisite status of one module against a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerequisiteStatus {
    /// The module declares at least one prerequisite
    pub has_prerequisites: bool,
    /// Every direct prerequisite is selected
    pub satisfied: bool,
    /// Direct prerequisites not yet selected, in catalog-declared order
    pub missing: Vec<ModuleId>,
}

/// Compute the prerequisite status of `module` against `selection`.
///
/// `missing` is `prerequisites(module) - selection`.
pub fn prerequisite_status(
    catalog: &Catalog,
    module: &ModuleId,
    selection: &Selection,
) -> Result<PrerequisiteStatus, SelectionError> {
    let entry = catalog
        .get(module)
        .ok_or_else(|| SelectionError::UnknownModule {
            module: module.clone(),
        })?;

    let missing: Vec<ModuleId> = entry
        .prerequisites
        .iter()
        .filter(|p| !selection.contains(p))
        .cloned()
        .collect();

    Ok(PrerequisiteStatus {
        has_prerequisites: entry.has_prerequisites(),
        satisfied: missing.is_empty(),
        missing,
    })
}
