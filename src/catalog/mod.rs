//! Application catalog: the ordered store of packageable descriptors.
//!
//! The catalog is loaded once at startup, either from the built-in data
//! file compiled into the binary or from a JSON file supplied on the
//! command line, and validated before any packaging starts.

mod descriptor;

pub use descriptor::{ApplicationDescriptor, MemoryBudget, Permission};

use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Catalog shipped with the binary: the M5Stack Tab5 v4 application set.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Deserialize)]
struct CatalogFile {
    applications: Vec<ApplicationDescriptor>,
}

/// Ordered, validated collection of application descriptors.
///
/// Descriptors keep their catalog order; the driver packages them
/// sequentially in that order.
#[derive(Debug, Clone)]
pub struct Catalog {
    apps: Vec<ApplicationDescriptor>,
}

impl Catalog {
    /// Loads the built-in application catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Loads a catalog from a JSON file on disk.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&text)
    }

    /// Parses and validates catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the JSON is malformed, the catalog is
    /// empty, an id repeats, or any descriptor violates its invariants.
    pub fn from_json(text: &str) -> Result<Self> {
        let parsed: CatalogFile =
            serde_json::from_str(text).map_err(CatalogError::Malformed)?;
        Self::validate(&parsed.applications)?;
        Ok(Self {
            apps: parsed.applications,
        })
    }

    /// Descriptors in catalog order.
    pub fn apps(&self) -> &[ApplicationDescriptor] {
        &self.apps
    }

    /// Number of descriptors in the catalog.
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Whether the catalog holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    fn validate(apps: &[ApplicationDescriptor]) -> Result<()> {
        if apps.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let mut seen = HashSet::new();
        for app in apps {
            app.validate()
                .map_err(|reason| CatalogError::InvalidDescriptor {
                    id: if app.id.trim().is_empty() {
                        app.name.clone()
                    } else {
                        app.id.clone()
                    },
                    reason,
                })?;

            if !seen.insert(app.id.as_str()) {
                return Err(CatalogError::DuplicateId { id: app.id.clone() }.into());
            }
        }

        Ok(())
    }
}
