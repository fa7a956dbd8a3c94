//! Deterministic string transforms for derived package paths and names.
//!
//! These are pure helpers shared by the manifest renderer, the docs
//! renderers, and the assembler, so every artifact agrees on the same
//! derived paths.

/// Final segment of a reverse-domain id.
///
/// `"com.m5stack.alarms"` -> `"alarms"`. An id without dots is returned
/// unchanged.
pub fn id_suffix(id: &str) -> &str {
    id.rsplit('.').next().unwrap_or(id)
}

/// Icon path inside the package, derived from the id suffix.
///
/// `"com.m5stack.alarms"` -> `"assets/icon_alarms.png"`.
pub fn icon_path(id: &str) -> String {
    format!("assets/icon_{}.png", id_suffix(id))
}

/// Marker file standing in for the icon until real art exists.
pub fn icon_marker_path(id: &str) -> String {
    format!("assets/icon_{}.png.txt", id_suffix(id))
}

/// The two screenshot paths inside the package, derived from the full id.
pub fn screenshot_paths(id: &str) -> [String; 2] {
    [
        format!("assets/screenshots/{id}_main.png"),
        format!("assets/screenshots/{id}_settings.png"),
    ]
}

/// Entry-point class name derived from a display name.
///
/// Strips spaces, then replaces the `&` conjunction with `And`:
/// `"Alarm & Timer"` -> `"AlarmAndTimer"`.
pub fn entry_point(display_name: &str) -> String {
    display_name.replace(' ', "").replace('&', "And")
}

/// Archive file name for a descriptor: `<id>-v<version>.m5app`.
pub fn archive_name(id: &str, version: &str) -> String {
    format!("{id}-v{version}.m5app")
}
