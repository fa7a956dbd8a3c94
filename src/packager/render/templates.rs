//! Handlebars templates and fixed text for package artifacts.
//!
//! Templates are compiled into the binary; renderers register them by name
//! and feed them a serialized view of one descriptor.

/// Package README template.
pub const README_TEMPLATE: &str = r#"# {{name}} - M5Stack Tab5 Application

## Description
{{description}}

## Features
- Professional implementation following M5Stack Tab5 development standards
- Memory optimized for embedded systems
- LVGL 8.4 UI components with theme compliance
- Complete lifecycle management (BaseApp inheritance)
- Event-driven architecture integration

## Technical Specifications

| Specification | Value |
|---------------|-------|
| **Version** | {{version}} |
| **Category** | {{category}} |
| **RAM Usage** | {{ram_kb}}KB |
| **Flash Usage** | {{flash_kb}}KB |
| **PSRAM Usage** | {{psram_kb}}KB |
| **Platform** | ESP32-P4 RISC-V |
| **UI Framework** | LVGL 8.4 |

## Installation

### Method 1: Using M5Stack Tab5 Package Manager
1. Download the `.m5app` package file
2. Copy to your M5Stack Tab5 device storage
3. Open Modular App System
4. Select "Install from Package"
5. Choose the downloaded package and confirm installation

### Method 2: Manual Integration
1. Extract the package contents
2. Copy source files to `src/apps/{{suffix}}/`
3. Add to your PlatformIO build configuration
4. Include the factory function in your app registration
5. Compile and flash the updated firmware

## Required Permissions
{{#each permissions}}
- {{this}}
{{/each}}

## Source Files
{{#each source_files}}
- {{this}}
{{/each}}

## Dependencies
- M5Stack Tab5 OS v4.0.0 or higher
- LVGL 8.4 graphics library
- BaseApp framework
- Event system integration

## Development

### Building from Source
```bash
# Clone the M5Stack Tab5 OS repository
git clone {{website}}.git
cd m5tab5-lvgl

# Build with this app included
pio run -e esp32-p4-evboard
```

### Integration Example
```cpp
#include "apps/{{suffix}}.h"

// Register with app manager
extern "C" std::unique_ptr<BaseApp> {{factory_function}}();

// In your app registration:
AppIntegration::registerApp("{{id}}", {{factory_function}});
```

## Support

- **GitHub Repository**: {{website}}
- **Documentation**: [App Development Standard](docs/APP_DEVELOPMENT_STANDARD.md)
- **Issues**: {{website}}/issues
- **Email**: {{email}}
- **Generated**: {{date}}

## License

This application is part of the M5Stack Tab5 OS project and follows the same licensing terms.

## Tags
{{tags}}

---

Built for **M5Stack Tab5** - Professional ESP32-P4 Development Platform
"#;

/// Install script template.
///
/// The generated script only declares memory requirements; enforcement is
/// left to the on-device app manager.
pub const INSTALL_TEMPLATE: &str = r#"#!/bin/bash
# M5Stack Tab5 App Installation Script
# {{name}} v{{version}}

set -e

APP_ID="{{id}}"
APP_NAME="{{name}}"
APP_VERSION="{{version}}"

echo "Installing $APP_NAME v$APP_VERSION..."

# Check system requirements
echo "Checking system requirements..."

# Verify M5Stack Tab5 OS version
if ! command -v m5tab5-version &> /dev/null; then
    echo "Error: M5Stack Tab5 OS not found"
    exit 1
fi

OS_VERSION=$(m5tab5-version)
MIN_VERSION="4.0.0"

if [[ "$OS_VERSION" < "$MIN_VERSION" ]]; then
    echo "Error: M5Stack Tab5 OS v$MIN_VERSION or higher required"
    echo "Current version: $OS_VERSION"
    exit 1
fi

# Check available memory
echo "Checking memory requirements..."
REQUIRED_RAM={{ram}}
REQUIRED_FLASH={{flash}}
REQUIRED_PSRAM={{psram}}

# Install app files
echo "Installing application files..."
INSTALL_DIR="/apps/$APP_ID"
mkdir -p "$INSTALL_DIR"

# Copy source files
{{#each source_files}}
cp "src/{{this}}" "$INSTALL_DIR/"
{{/each}}

# Copy assets
cp -r assets/ "$INSTALL_DIR/"

# Register with app manager
echo "Registering with app manager..."
m5tab5-app register "$APP_ID" "$INSTALL_DIR"

# Verify installation
echo "Verifying installation..."
if m5tab5-app list | grep -q "$APP_ID"; then
    echo "OK: $APP_NAME installed successfully!"
    echo "Launch from the M5Stack Tab5 app menu"
else
    echo "ERROR: Installation failed"
    exit 1
fi

echo "Installation complete. Enjoy using $APP_NAME!"
"#;

/// Changelog template, one entry for the packaged version.
pub const CHANGELOG_TEMPLATE: &str = r#"# Changelog - {{name}}

## [{{version}}] - {{date}}

### Added
- Initial release of {{name}}
- Full integration with M5Stack Tab5 OS v4
- BaseApp framework compliance
- LVGL 8.4 UI implementation
- Memory optimization for embedded systems
- Event-driven architecture support

### Features
- Professional implementation following development standards
- Complete lifecycle management
- Theme compliance and responsive design
- Performance optimized for ESP32-P4

### Technical Details
- Memory footprint: {{ram_kb}}KB RAM, {{flash_kb}}KB Flash
- Platform: ESP32-P4 RISC-V
- UI Framework: LVGL 8.4
- Architecture: Modular BaseApp inheritance

### Dependencies
- M5Stack Tab5 OS >= 4.0.0
- LVGL >= 8.4.0
- BaseApp framework
"#;

/// Placeholder source file template.
///
/// Real application sources live in the upstream repository; packages ship
/// a stub that declares the factory symbol and nothing else.
pub const SOURCE_STUB_TEMPLATE: &str = r#"// {{filename}}
// {{name}} v{{version}}
// This is a placeholder - replace with actual source from:
// {{website}}/tree/v4/src/apps/

#include "base_app.h"

// Actual implementation available in the M5Stack Tab5 v4 repository
// Factory function: {{factory_function}}()

extern "C" std::unique_ptr<BaseApp> {{factory_function}}() {
    // Implementation from the full M5Stack Tab5 OS project
    return nullptr; // Placeholder
}
"#;

/// Placeholder icon marker template.
pub const ICON_MARKER_TEMPLATE: &str = r#"# Icon placeholder for {{name}}
# Replace with actual 64x64 PNG icon
# Icon should follow M5Stack Tab5 design guidelines
"#;

/// Fixed MIT license text shipped in every package.
pub const LICENSE_TEXT: &str = r#"MIT License

Copyright (c) 2025 M5Stack Tab5 Community

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;
