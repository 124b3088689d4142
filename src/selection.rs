//! The user's ordered working set of chosen modules.
//!
//! [`Selection`] is a plain owned value: an ordered sequence of distinct
//! module ids. It has no states beyond its contents. Mutation happens through
//! [`crate::session::PlanSession`], which enforces prerequisite cascades and
//! removal guards; the raw mutators here are crate-private.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ModuleId, join_ids};

/// Errors returned by selection operations.
///
/// Everything except [`SelectionError::CycleDetected`] is an ordinary,
/// caller-facing validation outcome. `CycleDetected` means the catalog broke
/// its acyclicity contract and must be surfaced to an operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Removal blocked by selected modules that require the target
    #[error("Cannot remove '{module}': required by {}", join_ids(blocking))]
    DependencyConflict {
        module: ModuleId,
        blocking: Vec<ModuleId>,
    },

    /// Move indices outside `[0, len)`
    #[error("Cannot move entry {from} to {to}: selection has {len} entries")]
    InvalidIndex { from: usize, to: usize, len: usize },

    #[error("Unknown template '{template}'")]
    UnknownTemplate { template: String },

    #[error("Unknown module '{module}'")]
    UnknownModule { module: ModuleId },

    /// Prerequisite walk revisited a module still being expanded
    #[error("Prerequisite cycle detected in catalog: {}", join_ids(path))]
    CycleDetected { path: Vec<ModuleId> },
}

impl SelectionError {
    /// True only for faults that indicate a corrupt catalog.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }
}

/// Ordered sequence of distinct module ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<ModuleId>,
}

impl Selection {
    /// An empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from ids, dropping repeats after their first
    /// occurrence.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ModuleId>,
    {
        let mut selection = Self::new();
        for id in ids {
            let id = id.into();
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    /// Ids in their current order
    #[inline]
    pub fn ids(&self) -> &[ModuleId] {
        &self.ids
    }

    pub fn contains(&self, id: &ModuleId) -> bool {
        self.ids.contains(id)
    }

    pub fn position(&self, id: &ModuleId) -> Option<usize> {
        self.ids.iter().position(|x| x == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleId> {
        self.ids.iter()
    }

    pub fn into_ids(self) -> Vec<ModuleId> {
        self.ids
    }

    pub(crate) fn extend_unique(&mut self, ids: impl IntoIterator<Item = ModuleId>) {
        for id in ids {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Remove `id`, keeping the relative order of everything else.
    pub(crate) fn remove(&mut self, id: &ModuleId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn ids_mut(&mut self) -> &mut Vec<ModuleId> {
        &mut self.ids
    }

    pub(crate) fn replace(&mut self, ids: Vec<ModuleId>) {
        self.ids = ids;
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ModuleId;
    type IntoIter = std::slice::Iter<'a, ModuleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
