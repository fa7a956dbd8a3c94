//! Placeholder source file rendering.

use super::{render_template, templates::SOURCE_STUB_TEMPLATE};
use crate::catalog::ApplicationDescriptor;
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct StubData<'a> {
    filename: &'a str,
    name: &'a str,
    version: &'a str,
    website: &'a str,
    factory_function: &'a str,
}

/// Renders the placeholder stub for one declared source file.
///
/// The stub declares the descriptor's factory symbol returning `nullptr`.
/// It is deliberately not a working implementation; real sources are
/// maintained in the upstream repository the header points at.
pub fn render_source_stub(app: &ApplicationDescriptor, filename: &str) -> Result<String> {
    let data = StubData {
        filename,
        name: &app.name,
        version: &app.version,
        website: &app.website,
        factory_function: &app.factory_function,
    };

    render_template("source_stub", SOURCE_STUB_TEMPLATE, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn stub_declares_the_factory_symbol_as_a_placeholder() {
        let app = Catalog::builtin()
            .unwrap()
            .apps()
            .iter()
            .find(|a| a.id == "com.m5stack.voice")
            .cloned()
            .unwrap();

        let stub = render_source_stub(&app, "voice_recognition_app.cpp").unwrap();
        assert!(stub.starts_with("// voice_recognition_app.cpp"));
        assert!(stub.contains("// Voice Assistant v1.0.0"));
        assert!(
            stub.contains("extern \"C\" std::unique_ptr<BaseApp> createVoiceRecognitionApp() {")
        );
        assert!(stub.contains("return nullptr; // Placeholder"));
    }
}
