//! Catalog file handling for loading and saving module catalogs.
//!
//! A catalog file is a JSON document holding the modules and, optionally, the
//! strategy templates built from them:
//!
//! ```json
//! {
//!   "modules": [
//!     { "id": "market-research", "category": "strategy", "size": 3 },
//!     { "id": "brand-identity", "category": "branding", "size": 4,
//!       "prerequisites": ["market-research"] }
//!   ],
//!   "templates": [
//!     { "id": "brand-basics", "modules": ["market-research", "brand-identity"] }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, Module, builtin};
use crate::error::PlanwrightError;
use crate::templates::{StrategyTemplate, Template, TemplateRegistry};

/// Catalog and templates as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub modules: Vec<Module>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl CatalogFile {
    /// The built-in catalog with every built-in template.
    pub fn builtin() -> Self {
        use strum::IntoEnumIterator;
        Self {
            modules: builtin::modules(),
            templates: StrategyTemplate::iter()
                .map(StrategyTemplate::to_template)
                .collect(),
        }
    }

    /// Save catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Read and parse a catalog file.
    pub fn read<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = Self::read(&path)
            .with_context(|| format!("Failed to load catalog from {:?}", path.as_ref()))?;

        tracing::debug!(
            "Read catalog file {:?}: {} modules, {} templates",
            path.as_ref(),
            file.modules.len(),
            file.templates.len()
        );
        Ok(file)
    }

    /// Build the validated catalog and template registry.
    ///
    /// Every failure is a [`PlanwrightError::Catalog`]; a prerequisite cycle
    /// is the fatal one.
    pub fn into_parts(self) -> crate::error::Result<(Catalog, TemplateRegistry)> {
        let catalog = Catalog::new(self.modules)?;
        let templates = TemplateRegistry::new(self.templates)?;
        templates.validate_against(&catalog)?;
        Ok((catalog, templates))
    }

    /// Validate the catalog without keeping the result
    pub fn validate(&self) -> Result<()> {
        self.clone()
            .into_parts()
            .context("Catalog failed integrity checks")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::types::Category;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn small_file() -> CatalogFile {
        CatalogFile {
            modules: vec![
                Module::new("a", Category::Strategy, 1),
                Module::new("b", Category::Branding, 2).requires("a"),
            ],
            templates: vec![Template {
                id: "both".to_string(),
                description: String::new(),
                modules: vec!["a".into(), "b".into()],
            }],
        }
    }

    #[test]
    fn test_builtin_file_is_valid() {
        assert!(CatalogFile::builtin().validate().is_ok());
    }

    #[test]
    fn test_save_and_load_json_catalog() {
        let file = small_file();
        let temp_file = NamedTempFile::new().unwrap();

        file.save_to_file(temp_file.path()).unwrap();
        let loaded = CatalogFile::load_from_file(temp_file.path()).unwrap();

        assert_eq!(loaded.modules, file.modules);
        assert_eq!(loaded.templates, file.templates);
    }

    #[test]
    fn test_load_minimal_module_fields() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "modules": [ { "id": "solo", "category": "legal", "size": 2 } ] }"#)
            .unwrap();
        temp_file.flush().unwrap();

        let loaded = CatalogFile::load_from_file(temp_file.path()).unwrap();
        assert!(loaded.templates.is_empty());
        assert!(loaded.modules[0].prerequisites.is_empty());
        assert!(loaded.modules[0].description.is_empty());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = CatalogFile::load_from_file(Path::new("/nonexistent/catalog.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_nonexistent_file_is_io_error() {
        let result = CatalogFile::read("/nonexistent/catalog.json");
        assert!(matches!(result, Err(PlanwrightError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ invalid json }").unwrap();
        temp_file.flush().unwrap();

        assert!(CatalogFile::load_from_file(temp_file.path()).is_err());
        assert!(matches!(
            CatalogFile::read(temp_file.path()),
            Err(PlanwrightError::Json(_))
        ));
    }

    #[test]
    fn test_unknown_category_fails_to_parse() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "modules": [ { "id": "x", "category": "astrology", "size": 1 } ] }"#)
            .unwrap();
        temp_file.flush().unwrap();

        assert!(CatalogFile::load_from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_cycle() {
        let mut file = small_file();
        file.modules[0].prerequisites.push("b".into());
        let err = file.clone().into_parts().unwrap_err();
        assert!(matches!(err, PlanwrightError::Catalog(CatalogError::Cycle { .. })));
        assert!(err.is_fatal());
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_template_with_unknown_module() {
        let mut file = small_file();
        file.templates[0].modules.push("ghost".into());
        assert!(matches!(
            file.into_parts(),
            Err(PlanwrightError::Catalog(CatalogError::TemplateUnknownModule { .. }))
        ));
    }
}
