//! Module catalog: the fixed, read-only set of deliverable modules.
//!
//! A [`Catalog`] is built once per session and only ever borrowed afterwards.
//! Construction validates the data-integrity contract of the catalog:
//!
//! - every module id is unique
//! - every size is a positive effort unit
//! - every prerequisite references an existing module
//! - no module requires itself, directly or transitively
//!
//! Declaration order is preserved; listings and prerequisite walks follow it.

pub mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::types::{Category, ModuleId, join_ids};

/// A reusable unit of deliverable work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    /// Effort units, always > 0 in a validated catalog
    pub size: u32,
    /// Direct prerequisites in declaration order
    #[serde(default)]
    pub prerequisites: Vec<ModuleId>,
}

impl Module {
    /// Create a module with no prerequisites
    pub fn new(id: impl Into<ModuleId>, category: Category, size: u32) -> Self {
        Self {
            id: id.into(),
            category,
            description: String::new(),
            size,
            prerequisites: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Append a direct prerequisite.
    pub fn requires(mut self, prerequisite: impl Into<ModuleId>) -> Self {
        self.prerequisites.push(prerequisite.into());
        self
    }

    #[inline]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

/// Catalog and template-registry integrity faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Module '{module}' is declared more than once")]
    DuplicateModule { module: ModuleId },

    #[error("Module '{module}' requires unknown module '{prerequisite}'")]
    DanglingPrerequisite {
        module: ModuleId,
        prerequisite: ModuleId,
    },

    #[error("Module '{module}' has a size of zero (effort must be positive)")]
    ZeroSize { module: ModuleId },

    #[error("Module '{module}' lists itself as a prerequisite")]
    SelfPrerequisite { module: ModuleId },

    #[error("Prerequisite cycle: {}", join_ids(path))]
    Cycle { path: Vec<ModuleId> },

    #[error("Template '{template}' is declared more than once")]
    DuplicateTemplate { template: String },

    #[error("Template '{template}' references unknown module '{module}'")]
    TemplateUnknownModule { template: String, module: ModuleId },

    #[error("Template '{template}' lists module '{module}' more than once")]
    TemplateDuplicateEntry { template: String, module: ModuleId },
}

/// Immutable, validated module catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    modules: Vec<Module>,
    index: HashMap<ModuleId, usize>,
}

impl Catalog {
    /// Build and validate a catalog from its declared modules.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(modules.len());
        for (pos, module) in modules.iter().enumerate() {
            if module.size == 0 {
                return Err(CatalogError::ZeroSize {
                    module: module.id.clone(),
                });
            }
            if index.insert(module.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateModule {
                    module: module.id.clone(),
                });
            }
        }

        for module in &modules {
            for prerequisite in &module.prerequisites {
                if *prerequisite == module.id {
                    return Err(CatalogError::SelfPrerequisite {
                        module: module.id.clone(),
                    });
                }
                if !index.contains_key(prerequisite) {
                    return Err(CatalogError::DanglingPrerequisite {
                        module: module.id.clone(),
                        prerequisite: prerequisite.clone(),
                    });
                }
            }
        }

        let catalog = Self { modules, index };
        if let Some(path) = catalog.find_cycle() {
            tracing::error!("Catalog rejected: prerequisite cycle {}", join_ids(&path));
            return Err(CatalogError::Cycle { path });
        }

        tracing::debug!("Catalog loaded with {} modules", catalog.len());
        Ok(catalog)
    }

    /// The catalog shipped with the tool, validated like any other.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::modules())
    }

    /// Index `modules` without any integrity checks.
    ///
    /// Lookups still work on a catalog built this way, but a cycle is only
    /// caught when a prerequisite walk reaches it.
    pub fn unchecked(modules: Vec<Module>) -> Self {
        let index = modules
            .iter()
            .enumerate()
            .map(|(pos, m)| (m.id.clone(), pos))
            .collect();
        Self { modules, index }
    }

    pub fn get(&self, id: &ModuleId) -> Option<&Module> {
        self.index.get(id).map(|&pos| &self.modules[pos])
    }

    #[inline]
    pub fn contains(&self, id: &ModuleId) -> bool {
        self.index.contains_key(id)
    }

    /// Direct prerequisites of `id`; empty for unknown ids.
    pub fn prerequisites(&self, id: &ModuleId) -> &[ModuleId] {
        self.get(id)
            .map(|m| m.prerequisites.as_slice())
            .unwrap_or(&[])
    }

    /// All modules in declaration order
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Depth-first search for a prerequisite cycle, returning its path
    /// (first and last element equal) if one exists.
    ///
    /// The search keeps an explicit stack, so arbitrarily long chains are
    /// fine.
    fn find_cycle(&self) -> Option<Vec<ModuleId>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.modules.len()];
        // (module position, next prerequisite to look at); doubles as the path
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..self.modules.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::InProgress;
            stack.push((root, 0));

            while let Some(top) = stack.last_mut() {
                let (pos, next) = *top;
                let Some(prerequisite) = self.modules[pos].prerequisites.get(next) else {
                    marks[pos] = Mark::Done;
                    stack.pop();
                    continue;
                };
                top.1 += 1;

                let Some(&child) = self.index.get(prerequisite) else {
                    continue;
                };
                match marks[child] {
                    Mark::Done => {}
                    Mark::InProgress => {
                        let start = stack.iter().position(|&(p, _)| p == child).unwrap_or(0);
                        let mut cycle: Vec<ModuleId> = stack[start..]
                            .iter()
                            .map(|&(p, _)| self.modules[p].id.clone())
                            .collect();
                        cycle.push(self.modules[child].id.clone());
                        return Some(cycle);
                    }
                    Mark::Unvisited => {
                        marks[child] = Mark::InProgress;
                        stack.push((child, 0));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Vec<Module> {
        vec![
            Module::new("a", Category::Strategy, 1),
            Module::new("b", Category::Branding, 2).requires("a"),
            Module::new("c", Category::Technology, 3).requires("b"),
        ]
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = Catalog::new(chain()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains(&"b".into()));
        assert_eq!(catalog.prerequisites(&"c".into()), &[ModuleId::from("b")]);
        assert!(catalog.prerequisites(&"zzz".into()).is_empty());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let catalog = Catalog::new(chain()).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_module_rejected() {
        let mut modules = chain();
        modules.push(Module::new("a", Category::Legal, 1));
        assert_eq!(
            Catalog::new(modules).unwrap_err(),
            CatalogError::DuplicateModule { module: "a".into() }
        );
    }

    #[test]
    fn test_dangling_prerequisite_rejected() {
        let modules = vec![Module::new("a", Category::Strategy, 1).requires("ghost")];
        assert_eq!(
            Catalog::new(modules).unwrap_err(),
            CatalogError::DanglingPrerequisite {
                module: "a".into(),
                prerequisite: "ghost".into(),
            }
        );
    }

    #[test]
    fn test_zero_size_rejected() {
        let modules = vec![Module::new("a", Category::Strategy, 0)];
        assert!(matches!(
            Catalog::new(modules),
            Err(CatalogError::ZeroSize { .. })
        ));
    }

    #[test]
    fn test_self_prerequisite_rejected() {
        let modules = vec![Module::new("a", Category::Strategy, 1).requires("a")];
        assert!(matches!(
            Catalog::new(modules),
            Err(CatalogError::SelfPrerequisite { .. })
        ));
    }

    #[test]
    fn test_cycle_rejected_with_path() {
        let modules = vec![
            Module::new("a", Category::Strategy, 1).requires("c"),
            Module::new("b", Category::Strategy, 1).requires("a"),
            Module::new("c", Category::Strategy, 1).requires("b"),
        ];
        match Catalog::new(modules) {
            Err(CatalogError::Cycle { path }) => {
                assert_eq!(path.first(), path.last());
                assert_eq!(path.len(), 4);
            }
            other => panic!("Expected cycle error, got {:?}", other),
        }
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let modules = vec![
            Module::new("root", Category::Strategy, 1),
            Module::new("left", Category::Strategy, 1).requires("root"),
            Module::new("right", Category::Strategy, 1).requires("root"),
            Module::new("top", Category::Strategy, 1)
                .requires("left")
                .requires("right"),
        ];
        assert!(Catalog::new(modules).is_ok());
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), builtin::modules().len());
    }

    #[test]
    fn test_long_chain_is_accepted() {
        let modules: Vec<Module> = (0..20_000)
            .map(|i| {
                let module = Module::new(format!("step-{}", i), Category::Strategy, 1);
                if i == 0 {
                    module
                } else {
                    module.requires(format!("step-{}", i - 1))
                }
            })
            .collect();
        assert_eq!(Catalog::new(modules).unwrap().len(), 20_000);
    }

    #[test]
    fn test_long_cycle_reports_full_path() {
        let modules: Vec<Module> = (0..5_000)
            .map(|i| {
                Module::new(format!("step-{}", i), Category::Strategy, 1)
                    .requires(format!("step-{}", (i + 1) % 5_000))
            })
            .collect();
        match Catalog::new(modules) {
            Err(CatalogError::Cycle { path }) => {
                assert_eq!(path.len(), 5_001);
                assert_eq!(path.first(), path.last());
            }
            other => panic!("Expected a cycle, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_cycle_error_message_names_path() {
        let err = CatalogError::Cycle {
            path: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(err.to_string(), "Prerequisite cycle: a, b, a");
    }
}
