//! Application descriptor model.

use serde::{Deserialize, Serialize};

/// Static record describing one packageable application.
///
/// Descriptors are write-once: loaded from the catalog, validated, and then
/// only read by the renderers and the assembler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    /// Reverse-domain application id (e.g., "com.m5stack.alarms").
    ///
    /// Globally unique within the catalog, stable across versions.
    pub id: String,

    /// Human-readable display name.
    pub name: String,

    /// Semantic version string ("major.minor.patch").
    pub version: String,

    /// Category tag for store classification.
    pub category: String,

    /// Short description shown in the store and the package README.
    pub description: String,

    /// Author name.
    pub author: String,

    /// Support contact address.
    pub email: String,

    /// Upstream project URL.
    pub website: String,

    /// Ordered list of declared source file names.
    ///
    /// Paths only; the packager never sees their content and emits
    /// placeholder stubs instead.
    pub source_files: Vec<String>,

    /// Memory budget per class, in bytes.
    pub memory: MemoryBudget,

    /// Capability tokens the packaged app declares it needs.
    pub permissions: Vec<Permission>,

    /// Free-form search tags.
    pub tags: Vec<String>,

    /// Entry-point symbol the target runtime uses to instantiate the app.
    ///
    /// Opaque to the packager; it is written into the manifest and the
    /// source stubs but never invoked.
    pub factory_function: String,
}

impl ApplicationDescriptor {
    /// Validate descriptor invariants.
    ///
    /// Checks: non-empty id, version parses as plain `major.minor.patch`
    /// (no pre-release or build suffix), non-empty source file list.
    ///
    /// Uniqueness across the catalog is checked by the catalog itself.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must not be empty".to_string());
        }

        match semver::Version::parse(&self.version) {
            Ok(version) => {
                if !version.pre.is_empty() || !version.build.is_empty() {
                    return Err(format!(
                        "version `{}` must be plain major.minor.patch",
                        self.version
                    ));
                }
            }
            Err(e) => {
                return Err(format!("version `{}` is not valid semver: {}", self.version, e));
            }
        }

        if self.source_files.is_empty() {
            return Err("source file list must not be empty".to_string());
        }

        Ok(())
    }
}

/// Memory budget ledger, one byte count per fixed memory class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBudget {
    /// Working RAM, in bytes.
    pub ram: u64,

    /// Flash footprint, in bytes.
    pub flash: u64,

    /// PSRAM usage, in bytes.
    pub psram: u64,
}

impl MemoryBudget {
    /// RAM budget in whole kilobytes (integer division).
    pub fn ram_kb(&self) -> u64 {
        self.ram / 1024
    }

    /// Flash budget in whole kilobytes (integer division).
    pub fn flash_kb(&self) -> u64 {
        self.flash / 1024
    }

    /// PSRAM budget in whole kilobytes (integer division).
    pub fn psram_kb(&self) -> u64 {
        self.psram / 1024
    }
}

/// Capability tokens an app may declare.
///
/// The set is fixed by the target OS; unknown tokens in a catalog are a
/// parse error rather than a passthrough string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    StorageRead,
    StorageWrite,
    ContactsAccess,
    CalendarAccess,
    NetworkAccess,
    MicrophoneAccess,
    AlarmAccess,
}

impl Permission {
    /// Token form used in rendered documents (e.g., "STORAGE_READ").
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::StorageRead => "STORAGE_READ",
            Permission::StorageWrite => "STORAGE_WRITE",
            Permission::ContactsAccess => "CONTACTS_ACCESS",
            Permission::CalendarAccess => "CALENDAR_ACCESS",
            Permission::NetworkAccess => "NETWORK_ACCESS",
            Permission::MicrophoneAccess => "MICROPHONE_ACCESS",
            Permission::AlarmAccess => "ALARM_ACCESS",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ApplicationDescriptor {
        ApplicationDescriptor {
            id: "com.m5stack.alarms".to_string(),
            name: "Alarm & Timer".to_string(),
            version: "1.0.0".to_string(),
            category: "personal-assistant".to_string(),
            description: "Comprehensive timekeeping solution.".to_string(),
            author: "M5Stack".to_string(),
            email: "support@m5stack.com".to_string(),
            website: "https://github.com/Paqurin/m5tab5-lvgl".to_string(),
            source_files: vec!["alarm_timer_app.h".to_string()],
            memory: MemoryBudget {
                ram: 32768,
                flash: 156672,
                psram: 16384,
            },
            permissions: vec![Permission::StorageRead, Permission::AlarmAccess],
            tags: vec!["alarm".to_string()],
            factory_function: "createAlarmTimerApp".to_string(),
        }
    }

    #[test]
    fn valid_descriptor_passes() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn empty_id_is_rejected() {
        let mut app = descriptor();
        app.id = "  ".to_string();
        assert!(app.validate().is_err());
    }

    #[test]
    fn two_part_version_is_rejected() {
        let mut app = descriptor();
        app.version = "1.0".to_string();
        assert!(app.validate().is_err());
    }

    #[test]
    fn prerelease_version_is_rejected() {
        let mut app = descriptor();
        app.version = "1.0.0-beta.1".to_string();
        assert!(app.validate().is_err());
    }

    #[test]
    fn empty_source_list_is_rejected() {
        let mut app = descriptor();
        app.source_files.clear();
        assert!(app.validate().is_err());
    }

    #[test]
    fn memory_converts_to_whole_kilobytes() {
        let memory = MemoryBudget {
            ram: 32768,
            flash: 156672,
            psram: 1000,
        };
        assert_eq!(memory.ram_kb(), 32);
        assert_eq!(memory.flash_kb(), 153);
        assert_eq!(memory.psram_kb(), 0);
    }

    #[test]
    fn permission_tokens_round_trip_through_serde() {
        let json = serde_json::to_string(&Permission::StorageRead).unwrap();
        assert_eq!(json, "\"STORAGE_READ\"");
        let back: Permission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Permission::StorageRead);
    }
}
