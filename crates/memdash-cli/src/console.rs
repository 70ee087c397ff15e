//! CLI console utilities

use colored::*;
use console::Term;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use memdash_core::render::SectionView;
use std::io;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose mode only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// Print a separator
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(50).dimmed());
    }

    /// Print the full dashboard: title banner plus every section.
    pub fn print_dashboard(&self, sections: &[SectionView]) {
        println!();
        println!("{}", "Memory Dashboard".bold().underline());
        for section in sections {
            self.print_section(section);
        }
        println!();
    }

    /// Print a single rendered section; empty-state placeholders are dimmed.
    pub fn print_section(&self, section: &SectionView) {
        println!();
        println!("{}", section.title.bold());
        for row in &section.rows {
            if section.is_placeholder() {
                println!("  {}", row.dimmed());
            } else {
                println!("  {row}");
            }
        }
    }

    /// Start a spinner shown while a request is in flight.
    pub fn loading(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.blue} {msg}")
                .expect("Invalid progress template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Ask for user confirmation
    pub fn confirm(&self, message: &str) -> io::Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }

    /// Prompt for a command line. Blank lines re-prompt; exhausted input
    /// surfaces as `UnexpectedEof` so the caller can exit the loop cleanly.
    pub fn input(&self, prompt: &str) -> io::Result<String> {
        let term = Term::stdout();

        loop {
            term.write_str(&format!("{} ", format!("{prompt}>").blue().bold()))?;
            let line = term.read_line()?;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                // An empty read outside a terminal means stdin is drained
                if !term.is_term() {
                    return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
                }
                continue;
            }

            return Ok(trimmed.to_string());
        }
    }
}

impl Default for CliConsole {
    fn default() -> Self {
        Self::new(false)
    }
}
