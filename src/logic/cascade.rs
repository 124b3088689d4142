//! Prerequisite cascade computation.
//!
//! Given a module about to be added, works out which of its transitive
//! prerequisites are missing from the selection and in what order they must
//! be inserted. The walk is depth-first and emits each prerequisite only after
//! its own prerequisites (post-order), which yields a topological order for
//! chains of any depth.
//!
//! Prerequisites that are already selected are still walked through: a
//! template load may have left one of them without its own prerequisites, and
//! those must be pulled in as well.
//!
//! The walk keeps its own stack of modules being expanded, so chain depth is
//! bounded by memory rather than the thread stack. Reaching a module that is
//! still on that stack means the catalog contains a cycle; the walk stops
//! immediately with [`SelectionError::CycleDetected`] instead of looping
//! forever.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::logic::status::prerequisite_status;
use crate::selection::{Selection, SelectionError};
use crate::types::ModuleId;

/// Missing transitive prerequisites of `module`, in insertion order.
///
/// `module` itself is never part of the result.
pub fn missing_closure(
    catalog: &Catalog,
    module: &ModuleId,
    selection: &Selection,
) -> Result<Vec<ModuleId>, SelectionError> {
    let mut walk = CascadeWalk {
        catalog,
        selection,
        stack: Vec::new(),
        on_path: HashSet::new(),
        done: HashSet::new(),
        emitted: HashSet::new(),
        order: Vec::new(),
    };
    walk.enter(module)?;

    loop {
        let Some(frame) = walk.stack.last_mut() else {
            break;
        };
        let next = catalog.prerequisites(&frame.module).get(frame.next).cloned();
        if next.is_some() {
            frame.next += 1;
        }

        match next {
            Some(prerequisite) if walk.done.contains(&prerequisite) => walk.emit(&prerequisite),
            Some(prerequisite) => walk.enter(&prerequisite)?,
            None => walk.leave(),
        }
    }
    Ok(walk.order)
}

/// A module being expanded
struct Frame {
    module: ModuleId,
    /// Direct prerequisites not in the selection
    missing: Vec<ModuleId>,
    /// Index of the next prerequisite to expand
    next: usize,
}

struct CascadeWalk<'a> {
    catalog: &'a Catalog,
    selection: &'a Selection,
    /// Modules currently being expanded, outermost first
    stack: Vec<Frame>,
    on_path: HashSet<ModuleId>,
    done: HashSet<ModuleId>,
    emitted: HashSet<ModuleId>,
    order: Vec<ModuleId>,
}

impl CascadeWalk<'_> {
    fn enter(&mut self, module: &ModuleId) -> Result<(), SelectionError> {
        if self.on_path.contains(module) {
            let start = self
                .stack
                .iter()
                .position(|f| &f.module == module)
                .unwrap_or(0);
            let mut cycle: Vec<ModuleId> =
                self.stack[start..].iter().map(|f| f.module.clone()).collect();
            cycle.push(module.clone());
            tracing::error!(
                "Prerequisite cycle reached while expanding '{}': {:?}",
                module,
                cycle
            );
            return Err(SelectionError::CycleDetected { path: cycle });
        }

        let status = prerequisite_status(self.catalog, module, self.selection)?;
        self.on_path.insert(module.clone());
        self.stack.push(Frame {
            module: module.clone(),
            missing: status.missing,
            next: 0,
        });
        Ok(())
    }

    /// Finish the innermost module once all its prerequisites are expanded.
    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.on_path.remove(&frame.module);
            self.done.insert(frame.module.clone());
            self.emit(&frame.module);
        }
    }

    /// Queue `module` if its parent on the stack is missing it.
    fn emit(&mut self, module: &ModuleId) {
        let Some(parent) = self.stack.last() else {
            return;
        };
        if parent.missing.contains(module) && self.emitted.insert(module.clone()) {
            self.order.push(module.clone());
        }
    }
}
