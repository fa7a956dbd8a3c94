//! Human-readable package overview (README.md) rendering.

use super::{render_template, templates::README_TEMPLATE};
use crate::catalog::ApplicationDescriptor;
use crate::error::Result;
use crate::packager::paths;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
struct OverviewData<'a> {
    id: &'a str,
    name: &'a str,
    version: &'a str,
    category: &'a str,
    description: &'a str,
    website: &'a str,
    email: &'a str,
    suffix: &'a str,
    factory_function: &'a str,
    ram_kb: u64,
    flash_kb: u64,
    psram_kb: u64,
    permissions: Vec<&'static str>,
    source_files: &'a [String],
    tags: String,
    date: String,
}

/// Renders the package README for one descriptor.
///
/// Memory values appear in whole kilobytes (integer division by 1024). The
/// generation date only shows up in the support footer; every other field
/// depends on the descriptor alone.
pub fn render_overview(app: &ApplicationDescriptor, date: NaiveDate) -> Result<String> {
    let data = OverviewData {
        id: &app.id,
        name: &app.name,
        version: &app.version,
        category: &app.category,
        description: &app.description,
        website: &app.website,
        email: &app.email,
        suffix: paths::id_suffix(&app.id),
        factory_function: &app.factory_function,
        ram_kb: app.memory.ram_kb(),
        flash_kb: app.memory.flash_kb(),
        psram_kb: app.memory.psram_kb(),
        permissions: app.permissions.iter().map(|p| p.as_str()).collect(),
        source_files: &app.source_files,
        tags: app.tags.join(", "),
        date: date.format("%Y-%m-%d").to_string(),
    };

    render_template("README.md", README_TEMPLATE, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }

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
    fn memory_budget_appears_in_whole_kilobytes() {
        let text = render_overview(&app("com.m5stack.alarms"), today()).unwrap();
        assert!(text.contains("| **RAM Usage** | 32KB |"));
        assert!(text.contains("| **Flash Usage** | 153KB |"));
        assert!(text.contains("| **PSRAM Usage** | 16KB |"));
    }

    #[test]
    fn permissions_and_sources_are_listed() {
        let text = render_overview(&app("com.m5stack.voice"), today()).unwrap();
        assert!(text.contains("- NETWORK_ACCESS"));
        assert!(text.contains("- MICROPHONE_ACCESS"));
        assert!(text.contains("- voice_recognition_app.cpp"));
    }

    #[test]
    fn integration_example_uses_derived_paths() {
        let text = render_overview(&app("com.m5stack.contacts"), today()).unwrap();
        assert!(text.contains("`src/apps/contacts/`"));
        assert!(text.contains("#include \"apps/contacts.h\""));
        assert!(text.contains("createContactManagementApp"));
    }

    #[test]
    fn date_appears_only_in_the_support_footer() {
        let a = app("com.m5stack.tasks");
        let day_one = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let day_two = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let first = render_overview(&a, day_one).unwrap();
        let second = render_overview(&a, day_two).unwrap();
        assert_eq!(
            first.replace("2025-01-01", "DATE"),
            second.replace("2025-06-30", "DATE")
        );
    }
}
