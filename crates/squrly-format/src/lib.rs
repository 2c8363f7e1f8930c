/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Single-pass string templates.
//!
//! Placeholders are brace-delimited keys, resolved against caller-supplied
//! values in one left-to-right pass:
//!
//! - Named keys: `Hello {name}` with `{"name": "Mark"}`
//! - Positional keys: `Hello {0}` with `["Mark"]` or the discrete value `"Mark"`
//! - Affixes: `Hello{[, ]name}!` emits `, ` only when `name` has a value
//! - Escaping: `{{name}}` renders as the literal `{name}`
//!
//! Missing keys and null values render as nothing. Substitution is total:
//! every template, however malformed, produces a string.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use squrly_format::{squrly, substitute};
//!
//! let out = substitute("Hello {name}, you have {emails} new messages",
//!     &[json!({"name": "Anna", "emails": 5})]);
//! assert_eq!(out, "Hello Anna, you have 5 new messages");
//!
//! assert_eq!(squrly!("Hello {0}, you have {1} new messages", "Anna", 5),
//!     "Hello Anna, you have 5 new messages");
//! ```

pub mod args;
pub mod error;
pub mod lookup;
pub mod scanner;
pub mod substitute;
pub mod value;

// Re-export main types at crate root
pub use error::{SqurlyError, SqurlyResult};
pub use lookup::LookupSource;
pub use scanner::{Placeholder, Placeholders, placeholders};
pub use substitute::{substitute, substitute_with};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Substitute a template with discrete values.
///
/// Each argument is converted with `serde_json::Value::from`, so strings,
/// numbers, booleans, vectors and `serde_json::Value`s all work, and `()` is the
/// null marker. A single map or list argument is used as the aggregate, exactly
/// as [`substitute`] treats a one-element slice.
///
/// ```
/// use serde_json::json;
/// use squrly_format::squrly;
///
/// assert_eq!(squrly!("Hello{0}"), "Hello");
/// assert_eq!(squrly!("{0} and {1}", "this", 2), "this and 2");
/// assert_eq!(squrly!("Hi {who}", json!({"who": "you"})), "Hi you");
/// ```
#[macro_export]
macro_rules! squrly {
    ($template:expr $(,)?) => {
        $crate::substitute($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::substitute(
            $template,
            &[$($crate::__private::serde_json::Value::from($arg)),+],
        )
    };
}
