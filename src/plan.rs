//! Plan output types: the committed module list and its effort summary.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::Catalog;
use crate::selection::Selection;
use crate::types::{Category, ModuleId};

/// Final ordered module list handed to project creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPlan {
    pub modules: Vec<ModuleId>,
    pub total_effort: u64,
}

/// Effort of one category within a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryEffort {
    pub category: Category,
    pub modules: usize,
    pub effort: u64,
}

/// Size breakdown of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PlanSummary {
    pub module_count: usize,
    pub total_effort: u64,
    /// Non-empty categories in category order
    pub by_category: Vec<CategoryEffort>,
}

impl PlanSummary {
    /// Summarize `selection`. Ids unknown to `catalog` count as modules but
    /// contribute no effort.
    pub fn compute(catalog: &Catalog, selection: &Selection) -> Self {
        let mut per_category: BTreeMap<Category, (usize, u64)> = BTreeMap::new();
        let mut total_effort = 0u64;

        for module in selection.iter().filter_map(|id| catalog.get(id)) {
            let entry = per_category.entry(module.category).or_default();
            entry.0 += 1;
            entry.1 += u64::from(module.size);
            total_effort += u64::from(module.size);
        }

        Self {
            module_count: selection.len(),
            total_effort,
            by_category: per_category
                .into_iter()
                .map(|(category, (modules, effort))| CategoryEffort {
                    category,
                    modules,
                    effort,
                })
                .collect(),
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} modules, {} effort units",
            self.module_count, self.total_effort
        )?;
        for entry in &self.by_category {
            writeln!(
                f,
                "  {:<12} {:>3} modules {:>4} units",
                entry.category.label(),
                entry.modules,
                entry.effort
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Module;

    #[test]
    fn test_summary_groups_by_category() {
        let catalog = Catalog::new(vec![
            Module::new("a", Category::Strategy, 3),
            Module::new("b", Category::Marketing, 2),
            Module::new("c", Category::Strategy, 4),
        ])
        .unwrap();
        let summary = PlanSummary::compute(&catalog, &Selection::from_ids(["c", "b", "a"]));

        assert_eq!(summary.module_count, 3);
        assert_eq!(summary.total_effort, 9);
        assert_eq!(
            summary.by_category,
            vec![
                CategoryEffort {
                    category: Category::Strategy,
                    modules: 2,
                    effort: 7
                },
                CategoryEffort {
                    category: Category::Marketing,
                    modules: 1,
                    effort: 2
                },
            ]
        );
    }

    #[test]
    fn test_empty_summary() {
        let summary = PlanSummary::compute(&Catalog::builtin().unwrap(), &Selection::new());
        assert_eq!(summary, PlanSummary::default());
        assert!(summary.to_string().starts_with("0 modules"));
    }
}
