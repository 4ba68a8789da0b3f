//! Glob expansion for input patterns
//!
//! Patterns use shell-style wildcards: `*`, `?`, `[...]` and `[!...]`.
//! There is no recursive `**`; a run of stars behaves like a single `*`.

use std::borrow::Cow;
use std::path::PathBuf;

use glob::MatchOptions;

use crate::error::EmbedError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Resolve every pattern in order and concatenate the matches
///
/// Matches are not deduplicated: a file matched by two patterns appears
/// twice. An empty result is not an error here.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>, EmbedError> {
    let mut paths = Vec::new();
    for pattern in patterns {
        paths.extend(expand_pattern(pattern.as_ref())?);
    }
    Ok(paths)
}

/// Resolve one pattern to the regular files it matches
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, EmbedError> {
    let normalized = collapse_stars(pattern);
    let entries =
        glob::glob_with(&normalized, MATCH_OPTIONS).map_err(|source| EmbedError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_dir() => {
                log::warn!("skipping directory {}", path.display());
            },
            Ok(path) => paths.push(path),
            Err(e) => {
                log::warn!("skipping unreadable path {}: {}", e.path().display(), e.error());
            },
        }
    }

    log::debug!("pattern {pattern:?} matched {} file(s)", paths.len());
    Ok(paths)
}

/// Collapse runs of `*` outside character classes into one `*`
///
/// The glob crate gives `**` recursive meaning, which this tool does not
/// support.
fn collapse_stars(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains("**") {
        return Cow::Borrowed(pattern);
    }

    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut prev_star = false;

    while let Some(c) = chars.next() {
        match c {
            '*' if prev_star => continue,
            '*' => {
                out.push(c);
                prev_star = true;
                continue;
            },
            '[' => {
                // Copy the class verbatim. A `]` right after `[` or `[!` is a
                // literal member, not the terminator.
                out.push(c);
                if chars.next_if_eq(&'!').is_some() {
                    out.push('!');
                }
                if chars.next_if_eq(&']').is_some() {
                    out.push(']');
                }
                for member in chars.by_ref() {
                    out.push(member);
                    if member == ']' {
                        break;
                    }
                }
            },
            _ => out.push(c),
        }
        prev_star = false;
    }

    Cow::Owned(out)
}
