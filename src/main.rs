//! m5pack - M5Stack Tab5 app package generator.
//!
//! This binary bundles statically-declared application metadata into
//! installable `.m5app` archives for the Tab5 app store.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match m5pack::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
