//! Path patterns and path normalization
//!
//! Matching is non-strict and case-insensitive: a single trailing slash,
//! repeated slashes, letter case, query strings and fragments never change
//! which route a path resolves to.

use crate::error::RouteError;
use std::fmt;

/// Normalize a request path into its canonical logical form.
///
/// The query and fragment are dropped, empty segments are collapsed and the
/// result always starts with `/` and never ends with one (except for `/`).
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let segments: Vec<&str> = raw[..end]
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Comparison key for an already normalized path
fn match_key(normalized: &str) -> String {
    normalized.to_lowercase()
}

/// A route path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches exactly one logical path
    Literal(String),
    /// Matches the prefix itself and everything below it
    CatchAll { prefix: String },
}

impl RoutePattern {
    /// Parse a pattern as written in a route definition.
    ///
    /// Accepted catch-all spellings are `*`, `/*`, `/docs/*` and the
    /// parameter form `/:pathMatch(.*)*` (optionally under a prefix).
    pub fn parse(source: &str) -> Result<Self, RouteError> {
        let trimmed = source.trim();
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: source.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("pattern is empty"));
        }
        if trimmed.contains(['?', '#']) {
            return Err(invalid("patterns cannot contain a query or fragment"));
        }

        let (head, last) = match trimmed.rsplit_once('/') {
            Some((head, last)) => (head, last),
            None => ("", trimmed),
        };

        if last == "*" || is_catch_all_param(last) {
            if head.contains(['*', ':']) {
                return Err(invalid("only the last segment may be a wildcard"));
            }
            return Ok(Self::CatchAll {
                prefix: normalize_path(head),
            });
        }

        if trimmed.contains('*') {
            return Err(invalid("wildcards are only allowed as the last segment"));
        }
        if trimmed.split('/').any(|segment| segment.starts_with(':')) {
            return Err(invalid("named path parameters are not supported"));
        }

        Ok(Self::Literal(normalize_path(trimmed)))
    }

    /// Whether this pattern matches the given normalized path
    pub fn matches(&self, normalized: &str) -> bool {
        let key = match_key(normalized);
        match self {
            Self::Literal(path) => match_key(path) == key,
            Self::CatchAll { prefix } if prefix == "/" => true,
            Self::CatchAll { prefix } => {
                let prefix = match_key(prefix);
                key == prefix
                    || key
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }

    /// Whether this is a catch-all pattern
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll { .. })
    }

    /// The literal path, if this pattern is a literal
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(path) => Some(path.as_str()),
            Self::CatchAll { .. } => None,
        }
    }

    /// Number of prefix segments; deeper catch-alls are more specific
    pub fn depth(&self) -> usize {
        let path = match self {
            Self::Literal(path) => path,
            Self::CatchAll { prefix } => prefix,
        };
        path.split('/').filter(|segment| !segment.is_empty()).count()
    }

    /// Uniqueness key used when validating a route table
    pub(crate) fn identity(&self) -> String {
        match_key(&self.to_string())
    }
}

/// `:name(.*)*` or `:name(.*)`
fn is_catch_all_param(segment: &str) -> bool {
    let Some(rest) = segment.strip_prefix(':') else {
        return false;
    };
    let rest = rest.strip_suffix('*').unwrap_or(rest);
    match rest.split_once('(') {
        Some((name, ".*)")) => {
            !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(path) => f.write_str(path),
            Self::CatchAll { prefix } if prefix == "/" => f.write_str("/*"),
            Self::CatchAll { prefix } => write!(f, "{prefix}/*"),
        }
    }
}
