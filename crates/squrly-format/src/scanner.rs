/*
 * scanner.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder scanning.
//!
//! A placeholder is `{key}` where `key` is one or more ASCII letters or digits.
//! The key may be wrapped in bracketed affixes, `{[prefix]key[suffix]}`, each
//! of which is emitted only when the key resolves to a value.
//!
//! Affix text may itself contain brackets. For each affix the scanner picks
//! the shortest content that still lets the rest of the placeholder parse, so
//! `{[, [ ]]name}` has the prefix `, [ ]`. Affix content is at least one
//! character and never spans a line break.
//!
//! Anything that does not parse is not a placeholder and is left alone.
//! After a `{` that starts no placeholder, scanning resumes at the next
//! character, so `{{name}}` contains the placeholder `{name}` at offset 1.

use std::ops::Range;

use memchr::memchr;
use serde::Serialize;

/// A placeholder found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder<'t> {
    /// Byte offset of the opening `{`.
    pub start: usize,

    /// Byte length of the placeholder, braces included.
    pub len: usize,

    /// Prefix text, without its brackets.
    pub prefix: Option<&'t str>,

    /// The key to look up.
    pub key: &'t str,

    /// Suffix text, without its brackets.
    pub suffix: Option<&'t str>,

    /// True when the placeholder is directly wrapped in a second pair of
    /// braces (`{{key}}`), in which case it renders as its bare key.
    pub escaped: bool,
}

impl Placeholder<'_> {
    /// Byte offset just past the closing `}`.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Byte range covered by the placeholder.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Iterator over the placeholders of a template, in order.
///
/// Matches never overlap.
#[derive(Debug, Clone)]
pub struct Placeholders<'t> {
    template: &'t str,
    pos: usize,
    lookahead: Lookahead,
}

/// Scan `template` for placeholders.
///
/// Scanning is linear in the template length: lookahead tables are built
/// once, after which each `{` is decided in constant time plus its key length.
pub fn placeholders(template: &str) -> Placeholders<'_> {
    let lookahead = if memchr(b'{', template.as_bytes()).is_some() {
        Lookahead::build(template)
    } else {
        Lookahead::default()
    };
    Placeholders {
        template,
        pos: 0,
        lookahead,
    }
}

impl<'t> Iterator for Placeholders<'t> {
    type Item = Placeholder<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.template.as_bytes();
        while let Some(offset) = memchr(b'{', &bytes[self.pos..]) {
            let start = self.pos + offset;
            match self.match_at(start) {
                Some(placeholder) => {
                    self.pos = placeholder.end();
                    return Some(placeholder);
                }
                None => self.pos = start + 1,
            }
        }
        self.pos = bytes.len();
        None
    }
}

impl<'t> Placeholders<'t> {
    /// Try to parse a placeholder whose `{` sits at `start`.
    fn match_at(&self, start: usize) -> Option<Placeholder<'t>> {
        let template = self.template;
        let bytes = template.as_bytes();
        let after_brace = start + 1;

        // A key can't start with `[`, so the prefix is mandatory here.
        let (prefix, key_start) = if bytes.get(after_brace) == Some(&b'[') {
            let close = self
                .lookahead
                .fragment_close(after_brace, &self.lookahead.tail_close)?;
            (Some(&template[after_brace + 1..close]), close + 1)
        } else {
            (None, after_brace)
        };

        let tail = self.lookahead.tail(bytes, key_start)?;
        let escaped =
            start > 0 && bytes[start - 1] == b'{' && bytes.get(tail.end) == Some(&b'}');

        Some(Placeholder {
            start,
            len: tail.end - start,
            prefix,
            key: &template[key_start..tail.key_end],
            suffix: tail
                .suffix_close
                .map(|close| &template[tail.key_end + 1..close]),
            escaped,
        })
    }
}

/// Offsets of a parsed `key}` or `key[suffix]}`.
#[derive(Debug, Clone, Copy)]
struct Tail {
    key_end: usize,
    suffix_close: Option<usize>,
    end: usize,
}

/// Per-offset lookahead over a template.
///
/// Every table has one entry per byte plus one for the end of the template,
/// and is filled right to left in a single pass. "Same line" searches stop at
/// the first line terminator byte.
#[derive(Debug, Clone, Default)]
struct Lookahead {
    /// Whether the byte belongs to a line terminator.
    line_break: Vec<bool>,

    /// End of the ASCII alphanumeric run starting here.
    key_end: Vec<usize>,

    /// First `]` at or after this offset on the same line that is directly
    /// followed by `}`. Closes a suffix.
    brace_close: Vec<Option<usize>>,

    /// First `]` at or after this offset on the same line after which a tail
    /// parses. Closes a prefix.
    tail_close: Vec<Option<usize>>,
}

impl Lookahead {
    fn build(template: &str) -> Self {
        let bytes = template.as_bytes();
        let n = bytes.len();

        let mut line_break = vec![false; n + 1];
        for (i, c) in template.char_indices() {
            if is_line_terminator(c) {
                line_break[i..i + c.len_utf8()].fill(true);
            }
        }

        let mut key_end = vec![n; n + 1];
        let mut brace_close = vec![None; n + 1];
        for i in (0..n).rev() {
            key_end[i] = if bytes[i].is_ascii_alphanumeric() {
                key_end[i + 1]
            } else {
                i
            };
            brace_close[i] = if line_break[i] {
                None
            } else if bytes[i] == b']' && bytes.get(i + 1) == Some(&b'}') {
                Some(i)
            } else {
                brace_close[i + 1]
            };
        }

        let mut lookahead = Lookahead {
            line_break,
            key_end,
            brace_close,
            tail_close: vec![None; n + 1],
        };

        // `tail(i + 1)` only reads entries right of `i`, all final by now.
        for i in (0..n).rev() {
            let close = if lookahead.line_break[i] {
                None
            } else if bytes[i] == b']' && lookahead.tail(bytes, i + 1).is_some() {
                Some(i)
            } else {
                lookahead.tail_close[i + 1]
            };
            lookahead.tail_close[i] = close;
        }
        lookahead
    }

    /// Parse `key}` or `key[suffix]}` starting at `from`.
    fn tail(&self, bytes: &[u8], from: usize) -> Option<Tail> {
        let key_end = *self.key_end.get(from)?;
        if key_end == from {
            return None;
        }
        match bytes.get(key_end) {
            Some(b'}') => Some(Tail {
                key_end,
                suffix_close: None,
                end: key_end + 1,
            }),
            Some(b'[') => {
                let close = self.fragment_close(key_end, &self.brace_close)?;
                Some(Tail {
                    key_end,
                    suffix_close: Some(close),
                    end: close + 2,
                })
            }
            _ => None,
        }
    }

    /// Shortest acceptable closing `]` for a fragment opened at `open`.
    ///
    /// The content is at least one character and contains no line terminator;
    /// `closes` decides which `]` is acceptable.
    fn fragment_close(&self, open: usize, closes: &[Option<usize>]) -> Option<usize> {
        if *self.line_break.get(open + 1)? {
            return None;
        }
        closes.get(open + 2).copied().flatten()
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
