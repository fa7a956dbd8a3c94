//! Install script (install.sh) rendering.

use super::{render_template, templates::INSTALL_TEMPLATE};
use crate::catalog::ApplicationDescriptor;
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct InstallData<'a> {
    id: &'a str,
    name: &'a str,
    version: &'a str,
    ram: u64,
    flash: u64,
    psram: u64,
    source_files: &'a [String],
}

/// Renders the shell install script for one descriptor.
///
/// The script checks for the `m5tab5-version` host command, compares the
/// reported version lexically against the "4.0.0" minimum, declares the
/// memory requirements as variables, copies sources and assets into
/// `/apps/<id>`, registers with `m5tab5-app`, and verifies the
/// registration. The assembler marks the written file executable.
pub fn render_install_script(app: &ApplicationDescriptor) -> Result<String> {
    let data = InstallData {
        id: &app.id,
        name: &app.name,
        version: &app.version,
        ram: app.memory.ram,
        flash: app.memory.flash,
        psram: app.memory.psram,
        source_files: &app.source_files,
    };

    render_template("install.sh", INSTALL_TEMPLATE, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn app(id: &str) -> ApplicationDescriptor {
        Catalog::builtin()
            .unwrap()
            .apps()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .unwrap()
    }

    #[test]
    fn declared_resource_variables_match_the_budget_exactly() {
        let script = render_install_script(&app("com.m5stack.contacts")).unwrap();
        assert!(script.contains("REQUIRED_RAM=51200"));
        assert!(script.contains("REQUIRED_FLASH=245760"));
        assert!(script.contains("REQUIRED_PSRAM=65536"));
    }

    #[test]
    fn every_source_file_gets_a_copy_line() {
        let script = render_install_script(&app("com.m5stack.tasks")).unwrap();
        assert!(script.contains(r#"cp "src/task_management_app.h" "$INSTALL_DIR/""#));
        assert!(script.contains(r#"cp "src/task_management_app.cpp" "$INSTALL_DIR/""#));
    }

    #[test]
    fn script_fails_loudly_without_the_host_command() {
        let script = render_install_script(&app("com.m5stack.alarms")).unwrap();
        assert!(script.starts_with("#!/bin/bash"));
        assert!(script.contains("set -e"));
        assert!(script.contains("command -v m5tab5-version"));
        assert!(script.contains(r#"MIN_VERSION="4.0.0""#));
        assert!(script.contains(r#"if [[ "$OS_VERSION" < "$MIN_VERSION" ]]"#));
    }

    #[test]
    fn registration_is_verified_against_the_listing() {
        let script = render_install_script(&app("com.m5stack.alarms")).unwrap();
        assert!(script.contains(r#"m5tab5-app register "$APP_ID" "$INSTALL_DIR""#));
        assert!(script.contains(r#"m5tab5-app list | grep -q "$APP_ID""#));
    }
}
