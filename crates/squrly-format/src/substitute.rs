/*
 * substitute.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template substitution.

use serde_json::Value;
use tracing::trace;

use crate::lookup::LookupSource;
use crate::scanner::placeholders;
use crate::value::render_into;

/// Substitute the placeholders of `template` with values from `args`.
///
/// `args` is either a single aggregate (`&[json!({...})]` or `&[json!([...])]`)
/// or any number of discrete values addressed as `{0}`, `{1}`, ... See
/// [`LookupSource::from_args`] for the exact rules.
///
/// Unresolved placeholders, and null values, render as the empty string along
/// with their affixes. `{{key}}` renders as `{key}`. This never fails.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use squrly_format::substitute;
///
/// let out = substitute("Hello{[, ]name}!", &[json!({"name": "Mark"})]);
/// assert_eq!(out, "Hello, Mark!");
/// ```
pub fn substitute(template: &str, args: &[Value]) -> String {
    substitute_with(template, &LookupSource::from_args(args))
}

/// Substitute the placeholders of `template` against an already normalized source.
pub fn substitute_with(template: &str, source: &LookupSource<'_>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut last = 0;

    for placeholder in placeholders(template) {
        let span = placeholder.span();
        output.push_str(&template[last..span.start]);
        last = span.end;

        if placeholder.escaped {
            output.push_str(placeholder.key);
            continue;
        }

        match source.get(placeholder.key) {
            Some(value) => {
                output.push_str(placeholder.prefix.unwrap_or_default());
                render_into(&mut output, value);
                output.push_str(placeholder.suffix.unwrap_or_default());
            }
            None => trace!(key = placeholder.key, "unresolved placeholder"),
        }
    }

    output.push_str(&template[last..]);
    output
}
