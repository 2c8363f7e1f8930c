/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Textual rendering of argument values.
//!
//! Values render the way a dynamic host language stringifies them, so that a
//! template produces the same text whether it is fed `5`, `"5"` or `5.0`:
//!
//! - String: returned as-is
//! - Bool: "true" or "false"
//! - Number: integers in decimal, floats in shortest round-trip form
//! - Array: elements rendered and joined with `,` (nulls render empty)
//! - Object: "[object Object]"
//! - Null: ""

use serde_json::{Number, Value};

const OBJECT_TEXT: &str = "[object Object]";

/// Append the textual form of `value` to `out`.
pub fn render_into(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&render_number(n)),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_into(out, item);
            }
        }
        Value::Object(_) => out.push_str(OBJECT_TEXT),
    }
}

fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(String::new, render_float)
    }
}

/// Format a float like a dynamic language does: no trailing `.0`, and
/// exponent notation (with an explicit sign) outside `[1e-6, 1e21)`.
fn render_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0.0 as well.
    if f == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }

    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
