//! Template loader: wholesale replacement of a selection.
//!
//! A template's list replaces the selection verbatim. There is no merge with
//! the previous contents and no cascade re-validation; templates are curated
//! and trusted to already be consistent.

use crate::selection::{Selection, SelectionError};
use crate::templates::TemplateRegistry;

/// Replace `selection` with template `template_id`'s module list.
///
/// Unknown templates leave the selection untouched.
pub fn load_template(
    registry: &TemplateRegistry,
    template_id: &str,
    selection: &mut Selection,
) -> Result<(), SelectionError> {
    let modules = registry
        .modules(template_id)
        .ok_or_else(|| SelectionError::UnknownTemplate {
            template: template_id.to_string(),
        })?;

    selection.replace(modules.to_vec());
    tracing::info!(
        "Loaded template '{}' ({} modules)",
        template_id,
        selection.len()
    );
    Ok(())
}
