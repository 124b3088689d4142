//! Strategy template registry.
//!
//! A template is a named, pre-curated list of module ids that replaces the
//! current selection wholesale. Built-in templates are kept in a Rust enum so
//! their module lists are checked against the built-in catalog by tests.
//!
//! # Built-in Templates
//!
//! | Template          | Focus |
//! |-------------------|-------|
//! | startup-launch    | Research, plan, register, brand, website |
//! | digital-presence  | Website-centred marketing stack |
//! | investor-ready    | Everything a first funding round asks for |
//! | sales-engine      | CRM and sales process on top of the website |
//!
//! Template lists are trusted: loading one bypasses prerequisite cascades and
//! removal guards. The registry only checks that every id exists in the
//! catalog and that no id repeats.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::catalog::{Catalog, CatalogError};
use crate::types::ModuleId;

/// Built-in strategy templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyTemplate {
    /// Minimum viable company: research, plan, entity, brand and site.
    StartupLaunch,

    /// Online presence for an existing business.
    DigitalPresence,

    /// Material for a first investor conversation.
    InvestorReady,

    /// Repeatable sales process backed by a CRM.
    SalesEngine,
}

impl StrategyTemplate {
    /// Module ids of this template, in the order they are loaded.
    pub fn get_modules(&self) -> &'static [&'static str] {
        match self {
            StrategyTemplate::StartupLaunch => &[
                "market-research",
                "business-plan",
                "company-registration",
                "brand-identity",
                "website",
            ],

            StrategyTemplate::DigitalPresence => &[
                "market-research",
                "brand-identity",
                "logo-design",
                "website",
                "seo-setup",
                "social-media-launch",
                "email-marketing",
            ],

            StrategyTemplate::InvestorReady => &[
                "market-research",
                "business-plan",
                "brand-identity",
                "pitch-deck",
                "company-registration",
                "bookkeeping-setup",
            ],

            StrategyTemplate::SalesEngine => &[
                "market-research",
                "brand-identity",
                "website",
                "crm-setup",
                "sales-playbook",
            ],
        }
    }

    /// Short description for listings
    pub fn description(&self) -> &'static str {
        match self {
            StrategyTemplate::StartupLaunch => "Launch a new company from zero",
            StrategyTemplate::DigitalPresence => "Build a complete online presence",
            StrategyTemplate::InvestorReady => "Prepare for a first funding round",
            StrategyTemplate::SalesEngine => "Set up a repeatable sales process",
        }
    }

    pub fn to_template(self) -> Template {
        Template {
            id: self.to_string(),
            description: self.description().to_string(),
            modules: self.get_modules().iter().map(|&m| m.into()).collect(),
        }
    }
}

/// A named module bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub modules: Vec<ModuleId>,
}

/// Read-only mapping from template id to its module list.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    /// Build a registry, rejecting duplicate template ids and templates that
    /// list the same module twice.
    pub fn new(templates: Vec<Template>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(templates.len());
        for (pos, template) in templates.iter().enumerate() {
            if index.insert(template.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateTemplate {
                    template: template.id.clone(),
                });
            }
            let mut seen = HashSet::with_capacity(template.modules.len());
            for module in &template.modules {
                if !seen.insert(module) {
                    return Err(CatalogError::TemplateDuplicateEntry {
                        template: template.id.clone(),
                        module: module.clone(),
                    });
                }
            }
        }
        Ok(Self { templates, index })
    }

    /// Registry holding every [`StrategyTemplate`].
    pub fn builtin() -> Self {
        let templates: Vec<Template> = StrategyTemplate::iter()
            .map(StrategyTemplate::to_template)
            .collect();
        let index = templates
            .iter()
            .enumerate()
            .map(|(pos, t)| (t.id.clone(), pos))
            .collect();
        Self { templates, index }
    }

    /// Check that every template only names modules known to `catalog`.
    pub fn validate_against(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        for template in &self.templates {
            if let Some(module) = template.modules.iter().find(|m| !catalog.contains(m)) {
                return Err(CatalogError::TemplateUnknownModule {
                    template: template.id.clone(),
                    module: module.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.index.get(id).map(|&pos| &self.templates[pos])
    }

    /// Module list of template `id`, if registered
    pub fn modules(&self, id: &str) -> Option<&[ModuleId]> {
        self.get(id).map(|t| t.modules.as_slice())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_modules_not_empty() {
        for template in StrategyTemplate::iter() {
            assert!(
                !template.get_modules().is_empty(),
                "{:?} should list modules",
                template
            );
        }
    }

    #[test]
    fn test_template_from_string() {
        assert_eq!(
            "startup-launch".parse::<StrategyTemplate>().unwrap(),
            StrategyTemplate::StartupLaunch
        );
        assert_eq!(
            "sales-engine".parse::<StrategyTemplate>().unwrap(),
            StrategyTemplate::SalesEngine
        );
        assert!("startup_launch".parse::<StrategyTemplate>().is_err());
    }

    #[test]
    fn test_builtin_templates_match_builtin_catalog() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.validate_against(&Catalog::builtin().unwrap()).is_ok());
        assert!(TemplateRegistry::new(registry.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), StrategyTemplate::iter().count());
        let modules = registry.modules("investor-ready").unwrap();
        assert!(modules.contains(&ModuleId::from("pitch-deck")));
        assert!(registry.get("does-not-exist").is_none());
    }

    #[test]
    fn test_duplicate_template_rejected() {
        let t = Template {
            id: "twice".to_string(),
            description: String::new(),
            modules: vec!["a".into()],
        };
        assert_eq!(
            TemplateRegistry::new(vec![t.clone(), t]).unwrap_err(),
            CatalogError::DuplicateTemplate {
                template: "twice".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let t = Template {
            id: "dup".to_string(),
            description: String::new(),
            modules: vec!["a".into(), "b".into(), "a".into()],
        };
        assert!(matches!(
            TemplateRegistry::new(vec![t]),
            Err(CatalogError::TemplateDuplicateEntry { .. })
        ));
    }

    #[test]
    fn test_unknown_module_rejected() {
        let t = Template {
            id: "ghostly".to_string(),
            description: String::new(),
            modules: vec!["market-research".into(), "ghost".into()],
        };
        let registry = TemplateRegistry::new(vec![t]).unwrap();
        assert_eq!(
            registry.validate_against(&Catalog::builtin().unwrap()).unwrap_err(),
            CatalogError::TemplateUnknownModule {
                template: "ghostly".to_string(),
                module: "ghost".into(),
            }
        );
    }
}
