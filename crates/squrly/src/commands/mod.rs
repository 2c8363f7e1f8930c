//! Command implementations for the squrly CLI
//!
//! Each command module handles the CLI interface and delegates to
//! squrly-format for the actual substitution.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub mod keys;
pub mod render;

/// Where a command reads its template from.
#[derive(Debug, Default)]
pub struct TemplateInput {
    /// Inline template text
    pub template: Option<String>,
    /// Template file, `-` for stdin
    pub file: Option<PathBuf>,
}

impl TemplateInput {
    /// Load the template text.
    pub fn read(&self) -> Result<String> {
        match (&self.template, &self.file) {
            (Some(template), _) => Ok(template.clone()),
            (None, Some(path)) if path.as_os_str() == "-" => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read template from stdin")?;
                Ok(text)
            }
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path.display())),
            (None, None) => anyhow::bail!("No template given: pass TEMPLATE or --file"),
        }
    }
}

/// Print command output, ending it with a newline if it lacks one.
pub fn print_output(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}
