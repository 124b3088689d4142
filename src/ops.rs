//! Textual selection operations.
//!
//! Lets a session be replayed from plain strings (command-line arguments, a
//! script file):
//!
//! | Syntax             | Operation |
//! |--------------------|-----------|
//! | `toggle:<id>`      | [`PlanSession::toggle`] |
//! | `add:<id>`         | [`PlanSession::add`] |
//! | `remove:<id>`      | [`PlanSession::remove`] |
//! | `move:<from>:<to>` | [`PlanSession::move_entry`] |
//! | `template:<id>`    | [`PlanSession::load_template`] |
//! | `clear`            | [`PlanSession::clear`] |
//!
//! A bare `<id>` is shorthand for `toggle:<id>`.

use std::fmt;
use std::str::FromStr;

use crate::error::PlanwrightError;
use crate::session::PlanSession;
use crate::types::ModuleId;

/// One parsed selection operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOp {
    Toggle(ModuleId),
    Add(ModuleId),
    Remove(ModuleId),
    Move { from: usize, to: usize },
    Template(String),
    Clear,
}

impl PlanOp {
    /// Run this operation against `session`.
    pub fn apply(&self, session: &mut PlanSession<'_>) -> crate::error::Result<()> {
        match self {
            PlanOp::Toggle(id) => {
                session.toggle(id)?;
            }
            PlanOp::Add(id) => {
                session.add(id)?;
            }
            PlanOp::Remove(id) => {
                session.remove(id)?;
            }
            PlanOp::Move { from, to } => {
                session.move_entry(*from, *to)?;
            }
            PlanOp::Template(id) => {
                session.load_template(id)?;
            }
            PlanOp::Clear => session.clear(),
        }
        Ok(())
    }
}

fn parse_index(raw: &str, op: &str) -> Result<usize, PlanwrightError> {
    raw.trim()
        .parse()
        .map_err(|_| PlanwrightError::validation(format!("Invalid index '{}' in '{}'", raw, op)))
}

fn non_empty<'s>(value: &'s str, op: &str) -> Result<&'s str, PlanwrightError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PlanwrightError::validation(format!(
            "Missing identifier in '{}'",
            op
        )));
    }
    Ok(value)
}

impl FromStr for PlanOp {
    type Err = PlanwrightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "clear" {
            return Ok(PlanOp::Clear);
        }

        let Some((verb, rest)) = s.split_once(':') else {
            return Ok(PlanOp::Toggle(non_empty(s, s)?.into()));
        };

        match verb {
            "toggle" => Ok(PlanOp::Toggle(non_empty(rest, s)?.into())),
            "add" => Ok(PlanOp::Add(non_empty(rest, s)?.into())),
            "remove" => Ok(PlanOp::Remove(non_empty(rest, s)?.into())),
            "template" => Ok(PlanOp::Template(non_empty(rest, s)?.to_string())),
            "move" => {
                let (from, to) = rest.split_once(':').ok_or_else(|| {
                    PlanwrightError::validation(format!("Expected move:<from>:<to>, got '{}'", s))
                })?;
                Ok(PlanOp::Move {
                    from: parse_index(from, s)?,
                    to: parse_index(to, s)?,
                })
            }
            other => Err(PlanwrightError::validation(format!(
                "Unknown operation '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PlanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanOp::Toggle(id) => write!(f, "toggle:{}", id),
            PlanOp::Add(id) => write!(f, "add:{}", id),
            PlanOp::Remove(id) => write!(f, "remove:{}", id),
            PlanOp::Move { from, to } => write!(f, "move:{}:{}", from, to),
            PlanOp::Template(id) => write!(f, "template:{}", id),
            PlanOp::Clear => f.write_str("clear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Module};
    use crate::selection::SelectionError;
    use crate::templates::TemplateRegistry;
    use crate::types::Category;

    #[test]
    fn test_parse_ops() {
        assert_eq!(
            "toggle:website".parse::<PlanOp>().unwrap(),
            PlanOp::Toggle("website".into())
        );
        assert_eq!("website".parse::<PlanOp>().unwrap(), PlanOp::Toggle("website".into()));
        assert_eq!("add:a".parse::<PlanOp>().unwrap(), PlanOp::Add("a".into()));
        assert_eq!("remove:a".parse::<PlanOp>().unwrap(), PlanOp::Remove("a".into()));
        assert_eq!(
            "move:0:2".parse::<PlanOp>().unwrap(),
            PlanOp::Move { from: 0, to: 2 }
        );
        assert_eq!(
            "template:startup-launch".parse::<PlanOp>().unwrap(),
            PlanOp::Template("startup-launch".to_string())
        );
        assert_eq!("clear".parse::<PlanOp>().unwrap(), PlanOp::Clear);
    }

    #[test]
    fn test_parse_errors() {
        assert!("move:1".parse::<PlanOp>().is_err());
        assert!("move:x:1".parse::<PlanOp>().is_err());
        assert!("move:-1:1".parse::<PlanOp>().is_err());
        assert!("add:".parse::<PlanOp>().is_err());
        assert!("explode:a".parse::<PlanOp>().is_err());
        assert!("".parse::<PlanOp>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let op = PlanOp::Move { from: 3, to: 1 };
        assert_eq!(op.to_string().parse::<PlanOp>().unwrap(), op);
    }

    #[test]
    fn test_apply_sequence() {
        let catalog = Catalog::builtin().unwrap();
        let templates = TemplateRegistry::builtin();
        let mut session = PlanSession::new(&catalog, &templates);

        for raw in ["template:startup-launch", "toggle:seo-setup", "move:0:1"] {
            let op: PlanOp = raw.parse().unwrap();
            op.apply(&mut session).unwrap();
        }

        let ids: Vec<&str> = session.selection().iter().map(|m| m.as_str()).collect();
        assert_eq!(ids[0], "business-plan");
        assert_eq!(ids[1], "market-research");
        assert_eq!(ids.last(), Some(&"seo-setup"));
    }

    #[test]
    fn test_apply_reports_selection_errors() {
        let catalog = Catalog::new(vec![
            Module::new("a", Category::Strategy, 1),
            Module::new("b", Category::Branding, 1).requires("a"),
        ])
        .unwrap();
        let templates = TemplateRegistry::default();
        let mut session = PlanSession::new(&catalog, &templates);
        PlanOp::Add("b".into()).apply(&mut session).unwrap();

        let err = PlanOp::Remove("a".into()).apply(&mut session).unwrap_err();
        assert!(matches!(
            err,
            PlanwrightError::Selection(SelectionError::DependencyConflict { .. })
        ));
        assert!(!err.is_fatal());
        assert_eq!(session.selection().len(), 2);
    }
}
