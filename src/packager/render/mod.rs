//! Renderers turning one descriptor into the textual package artifacts.
//!
//! Every renderer is a pure function over a descriptor (plus the generation
//! timestamp where one appears in the artifact). No renderer reads another
//! renderer's output.

mod docs;
mod install;
mod manifest;
mod overview;
mod stub;
pub mod templates;

pub use docs::{render_changelog, render_icon_marker, render_license};
pub use install::render_install_script;
pub use manifest::{Manifest, render_manifest};
pub use overview::render_overview;
pub use stub::render_source_stub;

use crate::error::{PackagerError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Render a compiled-in template with the given data.
///
/// Escaping is disabled; the artifacts are shell scripts, Markdown and C++
/// text, not HTML.
fn render_template<T: Serialize>(name: &str, template: &str, data: &T) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string(name, template)
        .map_err(|e| PackagerError::Template(format!("failed to register {name} template: {e}")))?;

    handlebars
        .render(name, data)
        .map_err(|e| PackagerError::Template(format!("failed to render {name} template: {e}")))
}
