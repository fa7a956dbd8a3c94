//! Package manifest rendering.
//!
//! The manifest is the structured document the target runtime parses to
//! recognize and validate a package. It is built as a typed structure and
//! serialized with serde_json so the output is well-formed and
//! round-trippable by construction.

use crate::catalog::{ApplicationDescriptor, MemoryBudget, Permission};
use crate::error::Result;
use crate::packager::paths;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Target OS floor shared by the manifest and the install script.
pub const MIN_OS_VERSION: &str = "4.0.0";

/// Platform block constants, identical for every package.
const TARGET_PLATFORM: &str = "m5stack-tab5";
const ARCHITECTURE: &str = "esp32p4";
const FRAMEWORK: &str = "esp-idf";
const UI_FRAMEWORK: &str = "lvgl-8.4";

/// Base-system dependency floor every package declares.
const DEPENDENCIES: [&str; 2] = ["base_system >= 4.0.0", "lvgl >= 8.4.0"];

/// Fixed build configuration for all packaged apps.
const COMPILE_FLAGS: [&str; 3] = ["-O2", "-DAPP_OPTIMIZED", "-DLVGL_CONF_INCLUDE_SIMPLE"];
const LINK_LIBRARIES: [&str; 2] = ["m", "pthread"];

/// Package format constants recorded in the metadata block.
const PACKAGE_FORMAT_VERSION: &str = "1.0";
const COMPRESSION: &str = "zip";
const CHECKSUM_ALGORITHM: &str = "sha256";

/// Complete package manifest.
///
/// The top-level groups (`app`, `system`, `requirements`, `resources`,
/// `build`, `metadata`) are the external contract any package consumer
/// parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub app: AppSection,
    pub system: SystemSection,
    pub requirements: RequirementsSection,
    pub resources: ResourcesSection,
    pub build: BuildSection,
    pub metadata: MetadataSection,
}

/// Identity, classification and provenance of the packaged app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub website: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Target platform block, constant across all packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSection {
    pub min_os_version: String,
    pub target_platform: String,
    pub architecture: String,
    pub framework: String,
    pub ui_framework: String,
}

/// Declared capabilities and base-system dependencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementsSection {
    pub permissions: Vec<Permission>,
    pub dependencies: Vec<String>,
}

/// Resource budget and derived asset paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesSection {
    pub memory: MemoryBudget,
    pub icon: String,
    pub screenshots: Vec<String>,
    pub assets: Vec<String>,
}

/// Build inputs for manual integration into the firmware tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    pub entry_point: String,
    pub factory_function: String,
    pub compile_flags: Vec<String>,
    pub link_libraries: Vec<String>,
    pub source_files: Vec<String>,
}

/// Generator metadata: timestamp and package format constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataSection {
    pub created: String,
    pub package_format_version: String,
    pub compression: String,
    pub checksum_algorithm: String,
}

impl Manifest {
    /// Builds the manifest for one descriptor at the given generation time.
    pub fn for_app(app: &ApplicationDescriptor, created: DateTime<Local>) -> Self {
        let [screenshot_main, screenshot_settings] = paths::screenshot_paths(&app.id);

        Self {
            app: AppSection {
                id: app.id.clone(),
                name: app.name.clone(),
                version: app.version.clone(),
                description: app.description.clone(),
                author: app.author.clone(),
                email: app.email.clone(),
                website: app.website.clone(),
                category: app.category.clone(),
                tags: app.tags.clone(),
            },
            system: SystemSection {
                min_os_version: MIN_OS_VERSION.to_string(),
                target_platform: TARGET_PLATFORM.to_string(),
                architecture: ARCHITECTURE.to_string(),
                framework: FRAMEWORK.to_string(),
                ui_framework: UI_FRAMEWORK.to_string(),
            },
            requirements: RequirementsSection {
                permissions: app.permissions.clone(),
                dependencies: DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
            },
            resources: ResourcesSection {
                memory: app.memory,
                icon: paths::icon_path(&app.id),
                screenshots: vec![screenshot_main, screenshot_settings],
                assets: vec![
                    "assets/fonts/".to_string(),
                    "assets/images/".to_string(),
                    "assets/sounds/".to_string(),
                ],
            },
            build: BuildSection {
                entry_point: paths::entry_point(&app.name),
                factory_function: app.factory_function.clone(),
                compile_flags: COMPILE_FLAGS.iter().map(|f| f.to_string()).collect(),
                link_libraries: LINK_LIBRARIES.iter().map(|l| l.to_string()).collect(),
                source_files: app.source_files.clone(),
            },
            metadata: MetadataSection {
                created: created.to_rfc3339(),
                package_format_version: PACKAGE_FORMAT_VERSION.to_string(),
                compression: COMPRESSION.to_string(),
                checksum_algorithm: CHECKSUM_ALGORITHM.to_string(),
            },
        }
    }
}

/// Renders pretty-printed manifest JSON for one descriptor.
pub fn render_manifest(app: &ApplicationDescriptor, created: DateTime<Local>) -> Result<String> {
    let manifest = Manifest::for_app(app, created);
    Ok(serde_json::to_string_pretty(&manifest)?)
}
