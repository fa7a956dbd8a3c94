//! Fixed-template documents: license, changelog, icon marker.

use super::{
    render_template,
    templates::{CHANGELOG_TEMPLATE, ICON_MARKER_TEMPLATE, LICENSE_TEXT},
};
use crate::catalog::ApplicationDescriptor;
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Renders the MIT license text shipped in every package.
pub fn render_license() -> String {
    LICENSE_TEXT.to_string()
}

#[derive(Serialize)]
struct ChangelogData<'a> {
    name: &'a str,
    version: &'a str,
    date: String,
    ram_kb: u64,
    flash_kb: u64,
}

/// Renders the changelog entry for the descriptor's version, dated at
/// generation time.
pub fn render_changelog(app: &ApplicationDescriptor, date: NaiveDate) -> Result<String> {
    let data = ChangelogData {
        name: &app.name,
        version: &app.version,
        date: date.format("%Y-%m-%d").to_string(),
        ram_kb: app.memory.ram_kb(),
        flash_kb: app.memory.flash_kb(),
    };

    render_template("CHANGELOG.md", CHANGELOG_TEMPLATE, &data)
}

#[derive(Serialize)]
struct IconMarkerData<'a> {
    name: &'a str,
}

/// Renders the placeholder icon marker dropped into `assets/`.
pub fn render_icon_marker(app: &ApplicationDescriptor) -> Result<String> {
    render_template("icon", ICON_MARKER_TEMPLATE, &IconMarkerData { name: &app.name })
}
