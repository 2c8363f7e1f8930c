/*
 * keys.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Keys command implementation
 */

//! Keys command implementation.
//!
//! Lists the placeholders of a template, one per line, or as a JSON array
//! with offsets and affixes when `--json` is given.

use anyhow::Result;

use squrly_format::{Placeholder, placeholders};

use super::{TemplateInput, print_output};

/// Arguments for the keys command
#[derive(Debug, Default)]
pub struct KeysArgs {
    /// Template source
    pub input: TemplateInput,
    /// Emit JSON instead of plain lines
    pub json: bool,
}

/// Execute the keys command
pub fn execute(args: KeysArgs) -> Result<()> {
    let template = args.input.read()?;
    let output = list_keys(&template, args.json)?;
    if !output.is_empty() {
        print_output(&output);
    }
    Ok(())
}

/// Describe the placeholders of `template`.
pub fn list_keys(template: &str, json: bool) -> Result<String> {
    let found: Vec<Placeholder<'_>> = placeholders(template).collect();

    if json {
        return Ok(serde_json::to_string_pretty(&found)?);
    }

    let lines: Vec<String> = found
        .iter()
        .map(|p| {
            if p.escaped {
                format!("{} (escaped)", p.key)
            } else {
                p.key.to_string()
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_keys_plain() {
        let output = list_keys("Hello {name}, {{0}} {[, ]title}{bad key}", false).unwrap();
        assert_eq!(output, "name\n0 (escaped)\ntitle");
    }

    #[test]
    fn test_list_keys_empty() {
        assert_eq!(list_keys("no placeholders", false).unwrap(), "");
        assert_eq!(list_keys("no placeholders", true).unwrap(), "[]");
    }

    #[test]
    fn test_list_keys_json() {
        let output = list_keys("Hi{[, ]name[!]}", true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{
                "start": 2,
                "len": 13,
                "prefix": ", ",
                "key": "name",
                "suffix": "!",
                "escaped": false,
            }])
        );
    }
}
