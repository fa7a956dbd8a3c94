//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// App package generator for the M5Stack Tab5 app store
#[derive(Parser, Debug)]
#[command(
    name = "m5pack",
    version,
    about = "M5Stack Tab5 app package generator",
    long_about = "Packages application metadata into installable .m5app archives for the \
M5Stack Tab5 app store.

Each catalog entry becomes one archive (manifest + docs + placeholder sources + install \
script). Running with no arguments packages the built-in catalog into ./packages/.

Usage:
  m5pack
  m5pack --output dist/
  m5pack --catalog my-apps.json --output dist/

Exit code 0 = every catalog entry was packaged."
)]
pub struct Args {
    /// Output directory for generated package archives
    #[arg(short, long, value_name = "DIR", default_value = "packages")]
    pub output: PathBuf,

    /// Alternate application catalog (JSON); defaults to the built-in catalog
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Print per-artifact detail while packaging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.output.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }

        if let Some(catalog) = &self.catalog {
            if !catalog.is_file() {
                return Err(format!("Catalog file not found: {}", catalog.display()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_no_argument_contract() {
        let args = Args::parse_from(["m5pack"]);
        assert_eq!(args.output, PathBuf::from("packages"));
        assert!(args.catalog.is_none());
        assert!(!args.verbose);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn missing_catalog_file_fails_validation() {
        let args = Args::parse_from(["m5pack", "--catalog", "/no/such/catalog.json"]);
        assert!(args.validate().is_err());
    }
}
