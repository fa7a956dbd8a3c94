//! App package generator for the M5Stack Tab5 device app store.
//!
//! Takes an ordered catalog of application descriptors and turns each one
//! into an installable `.m5app` archive: a deflate-compressed bundle of
//! manifest, docs, install script, placeholder sources and asset
//! placeholders. The pipeline is single-pass and sequential; descriptors
//! never read each other's output.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use catalog::{ApplicationDescriptor, Catalog, MemoryBudget, Permission};
pub use error::{CatalogError, CliError, PackagerError, Result};
pub use packager::PackageAssembler;
