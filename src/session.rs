//! Selection engine.
//!
//! A [`PlanSession`] is one interactive editing session of a work plan. It
//! borrows the read-only catalog and template registry and exclusively owns
//! the [`Selection`]. Every operation is synchronous and all-or-nothing: the
//! new state is computed first and only committed when nothing failed.
//!
//! # Operations
//!
//! | Operation        | Effect | Failure |
//! |------------------|--------|---------|
//! | `toggle`         | `remove` if selected, `add` otherwise | see below |
//! | `add`            | Insert missing prerequisites (deepest first), then the module | `UnknownModule`, `CycleDetected` |
//! | `remove`         | Drop the module, keep everyone else's order | `DependencyConflict` |
//! | `move_entry`     | Reposition one entry | `InvalidIndex` |
//! | `load_template`  | Replace everything with a template's list | `UnknownTemplate` |
//!
//! Template loads and moves may leave a dependent ahead of its prerequisite
//! (or, for templates, without it). That is accepted; see
//! [`PlanSession::precedence_violations`].

use crate::catalog::Catalog;
use crate::logic::cascade::missing_closure;
use crate::logic::ordering::{PrecedenceViolation, move_entry, precedence_violations};
use crate::logic::status::{PrerequisiteStatus, prerequisite_status};
use crate::logic::template_loader::load_template;
use crate::plan::{PlanSummary, ProjectPlan};
use crate::selection::{Selection, SelectionError};
use crate::templates::TemplateRegistry;
use crate::types::{ModuleId, join_ids};

/// Result alias for selection operations
pub type SelectionResult<'s> = Result<&'s Selection, SelectionError>;

/// One editing session over a catalog.
///
/// # Example
///
/// ```
/// use planwright::catalog::Catalog;
/// use planwright::session::PlanSession;
/// use planwright::templates::TemplateRegistry;
///
/// let catalog = Catalog::builtin().unwrap();
/// let templates = TemplateRegistry::builtin();
/// let mut session = PlanSession::new(&catalog, &templates);
///
/// // Adding the website pulls in its prerequisites first
/// session.toggle(&"website".into()).unwrap();
/// let ids: Vec<&str> = session.selection().iter().map(|m| m.as_str()).collect();
/// assert_eq!(ids, ["market-research", "brand-identity", "website"]);
///
/// // brand-identity is required by the website
/// assert!(session.toggle(&"brand-identity".into()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PlanSession<'a> {
    catalog: &'a Catalog,
    templates: &'a TemplateRegistry,
    selection: Selection,
}

impl<'a> PlanSession<'a> {
    /// Start a session with an empty selection.
    pub fn new(catalog: &'a Catalog, templates: &'a TemplateRegistry) -> Self {
        Self {
            catalog,
            templates,
            selection: Selection::new(),
        }
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[inline]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[inline]
    pub fn templates(&self) -> &'a TemplateRegistry {
        self.templates
    }

    /// Add `module` if absent, remove it if present.
    pub fn toggle(&mut self, module: &ModuleId) -> SelectionResult<'_> {
        if self.selection.contains(module) {
            self.remove(module)
        } else {
            self.add(module)
        }
    }

    /// Add `module` together with every missing transitive prerequisite.
    ///
    /// Already-selected modules are left where they are, even when a
    /// template put them there without a catalog entry.
    pub fn add(&mut self, module: &ModuleId) -> SelectionResult<'_> {
        if self.selection.contains(module) {
            tracing::debug!("'{}' already selected", module);
            return Ok(&self.selection);
        }
        if !self.catalog.contains(module) {
            return Err(SelectionError::UnknownModule {
                module: module.clone(),
            });
        }

        let cascade = missing_closure(self.catalog, module, &self.selection)?;
        if !cascade.is_empty() {
            tracing::debug!(
                "Adding '{}' pulls in prerequisites: {}",
                module,
                join_ids(&cascade)
            );
        }

        self.selection
            .extend_unique(cascade.into_iter().chain(std::iter::once(module.clone())));
        Ok(&self.selection)
    }

    /// Remove `module` unless a selected module requires it directly.
    ///
    /// Removing a module that is not selected changes nothing.
    pub fn remove(&mut self, module: &ModuleId) -> SelectionResult<'_> {
        if !self.selection.contains(module) {
            tracing::debug!("'{}' was not selected", module);
            return Ok(&self.selection);
        }

        let blocking = self.dependents(module);
        if !blocking.is_empty() {
            tracing::warn!(
                "Refusing to remove '{}': required by {}",
                module,
                join_ids(&blocking)
            );
            return Err(SelectionError::DependencyConflict {
                module: module.clone(),
                blocking,
            });
        }

        self.selection.remove(module);
        Ok(&self.selection)
    }

    /// Relocate the entry at `from` to `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> SelectionResult<'_> {
        move_entry(&mut self.selection, from, to)?;
        Ok(&self.selection)
    }

    /// Replace the selection with template `template_id`'s module list.
    pub fn load_template(&mut self, template_id: &str) -> SelectionResult<'_> {
        load_template(self.templates, template_id, &mut self.selection)?;
        Ok(&self.selection)
    }

    /// Prerequisite status of `module` against the current selection.
    pub fn status(&self, module: &ModuleId) -> Result<PrerequisiteStatus, SelectionError> {
        prerequisite_status(self.catalog, module, &self.selection)
    }

    /// Selected modules that list `module` as a direct prerequisite, in
    /// selection order.
    pub fn dependents(&self, module: &ModuleId) -> Vec<ModuleId> {
        self.selection
            .iter()
            .filter(|d| *d != module && self.catalog.prerequisites(d).contains(module))
            .cloned()
            .collect()
    }

    /// Modules `add(module)` would insert ahead of `module`, without
    /// changing anything.
    pub fn missing_closure(&self, module: &ModuleId) -> Result<Vec<ModuleId>, SelectionError> {
        if !self.catalog.contains(module) {
            return Err(SelectionError::UnknownModule {
                module: module.clone(),
            });
        }
        missing_closure(self.catalog, module, &self.selection)
    }

    /// Prerequisite edges the current order does not respect.
    pub fn precedence_violations(&self) -> Vec<PrecedenceViolation> {
        precedence_violations(self.catalog, &self.selection)
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary::compute(self.catalog, &self.selection)
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Commit the session, handing back the ordered module list.
    pub fn finalize(self) -> ProjectPlan {
        let total_effort = self.summary().total_effort;
        tracing::info!(
            "Plan finalized: {} modules, {} effort units",
            self.selection.len(),
            total_effort
        );
        ProjectPlan {
            modules: self.selection.into_ids(),
            total_effort,
        }
    }
}
