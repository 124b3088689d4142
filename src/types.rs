//! Type-safe catalog vocabulary for the resolver
//!
//! Module identifiers are a newtype rather than bare strings, and module
//! categories are a closed enumeration so a typo in a catalog file fails at
//! parse time instead of silently creating a new grouping.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Stable identifier of a catalog module (e.g. `brand-identity`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a module id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Render a list of ids as `a, b, c` for error and log messages.
pub fn join_ids(ids: &[ModuleId]) -> String {
    ids.iter()
        .map(ModuleId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Grouping label of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    #[default]
    Strategy,
    Branding,
    Marketing,
    Sales,
    Operations,
    Finance,
    Legal,
    Technology,
}

impl Category {
    /// Human-readable heading for listings
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strategy => "Strategy",
            Self::Branding => "Branding",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Operations => "Operations",
            Self::Finance => "Finance",
            Self::Legal => "Legal",
            Self::Technology => "Technology",
        }
    }
}
