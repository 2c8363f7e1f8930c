/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! Arguments come from exactly one of three places:
//! - `--data FILE`: a JSON document used as the single aggregate
//! - `--set KEY=VALUE`: assignments collected into a map
//! - trailing values after `--`: discrete positional values
//!
//! With none of them, every placeholder renders empty. Giving more than one
//! is an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use squrly_format::args::{parse_assignments, parse_data, parse_value};
use squrly_format::substitute;

use super::{TemplateInput, print_output};

/// Arguments for the render command
#[derive(Debug, Default)]
pub struct RenderArgs {
    /// Template source
    pub input: TemplateInput,
    /// JSON data file
    pub data: Option<PathBuf>,
    /// KEY=VALUE assignments
    pub set: Vec<String>,
    /// Positional values
    pub values: Vec<String>,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let output = render(&args)?;
    print_output(&output);
    Ok(())
}

/// Render the template described by `args`.
pub fn render(args: &RenderArgs) -> Result<String> {
    let template = args.input.read()?;
    let values = collect_values(args)?;
    debug!(
        template_len = template.len(),
        values = values.len(),
        "rendering template"
    );
    Ok(substitute(&template, &values))
}

fn collect_values(args: &RenderArgs) -> Result<Vec<Value>> {
    let sources = [
        args.data.is_some(),
        !args.set.is_empty(),
        !args.values.is_empty(),
    ];
    if sources.into_iter().filter(|&given| given).count() > 1 {
        anyhow::bail!("Pass only one of --data, --set, or positional values");
    }

    if let Some(path) = &args.data {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file: {}", path.display()))?;
        let data = parse_data(&text)
            .with_context(|| format!("Failed to parse data file: {}", path.display()))?;
        return Ok(vec![data]);
    }

    if !args.set.is_empty() {
        return Ok(vec![parse_assignments(&args.set)?]);
    }

    Ok(args.values.iter().map(|v| parse_value(v)).collect())
}
