//! Package assembly: renderers, staging, compression.
//!
//! The packager is a single-pass pipeline per descriptor. Renderers are
//! pure; all filesystem effects live in the staging tree and the archive
//! writer.

mod archive;
mod assembler;
pub mod paths;
pub mod render;
mod staging;

pub use assembler::PackageAssembler;
pub use staging::StagingTree;
