//! Order maintainer: free-form repositioning within a selection.
//!
//! Moves never change membership. They also know nothing about prerequisite
//! edges, so any permutation of the current members is accepted, including
//! one that puts a dependent before its prerequisite. Use
//! [`precedence_violations`] to report such orderings without rejecting them.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::selection::{Selection, SelectionError};
use crate::types::ModuleId;

/// Relocate the entry at `from` to `to`, shifting the entries in between.
///
/// Both indices must lie in `[0, len)`; otherwise the selection is left
/// untouched and [`SelectionError::InvalidIndex`] is returned.
pub fn move_entry(selection: &mut Selection, from: usize, to: usize) -> Result<(), SelectionError> {
    let len = selection.len();
    if from >= len || to >= len {
        return Err(SelectionError::InvalidIndex { from, to, len });
    }
    if from != to {
        let ids = selection.ids_mut();
        let id = ids.remove(from);
        ids.insert(to, id);
    }
    Ok(())
}

/// How a dependent's prerequisite is out of place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// The prerequisite is selected but sits after the dependent
    OutOfOrder,
    /// The prerequisite is not selected at all
    Missing,
}

/// A selected module whose prerequisite is missing or placed after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecedenceViolation {
    pub dependent: ModuleId,
    pub prerequisite: ModuleId,
    pub kind: ViolationKind,
}

/// List every prerequisite edge the current order does not respect.
///
/// Violations are reported in selection order of the dependent, then in
/// catalog-declared prerequisite order. Ids unknown to the catalog have no
/// edges and are ignored.
pub fn precedence_violations(catalog: &Catalog, selection: &Selection) -> Vec<PrecedenceViolation> {
    let mut violations = Vec::new();
    for (pos, dependent) in selection.iter().enumerate() {
        for prerequisite in catalog.prerequisites(dependent) {
            let kind = match selection.position(prerequisite) {
                Some(p) if p < pos => continue,
                Some(_) => ViolationKind::OutOfOrder,
                None => ViolationKind::Missing,
            };
            violations.push(PrecedenceViolation {
                dependent: dependent.clone(),
                prerequisite: prerequisite.clone(),
                kind,
            });
        }
    }
    violations
}
