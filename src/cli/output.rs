//! Styled terminal output for user-facing progress and summaries.

use console::style;

/// Writes progress, success and error lines to the terminal.
///
/// Diagnostic detail goes through the `log` macros instead; this type only
/// covers what a user watching the run should see.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Plain informational line.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Progress line for a step in flight.
    pub fn progress(&self, message: &str) {
        if !self.quiet {
            println!("{} {message}", style("→").cyan());
        }
    }

    /// Success line for a completed step.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {message}", style("✓").green());
        }
    }

    /// Warning line.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {message}", style("warning:").yellow().bold());
        }
    }

    /// Error line.
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", style("error:").red().bold());
    }

    /// Section header with underline.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("{}", style(title).bold());
            println!("{}", style("=".repeat(title.chars().count())).dim());
        }
    }

    /// Indented detail line under the current section.
    pub fn indent(&self, message: &str) {
        if !self.quiet {
            println!("   {message}");
        }
    }

    /// Detail shown only with `--verbose`.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{}", style(message).dim());
        }
    }
}
