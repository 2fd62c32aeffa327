//! Path matching logic.
//!
//! # Responsibilities
//! - Match a literal path (exact, optionally case-insensitive / trailing-slash lenient)
//! - Match segment patterns with `:param` captures
//! - Match a repeated tail (`:name(.*)*`) capturing the remaining segments
//!
//! # Design Decisions
//! - Matching is case-sensitive and strict by default
//! - No regex: segment comparison only, O(segments) per matcher
//! - A matcher reports captured params, empty for literals

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::MatchingConfig;

/// Captured path parameters, ordered by name.
pub type Params = BTreeMap<String, ParamValue>;

/// A captured parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// One segment (`:id`).
    Single(String),
    /// Zero or more segments (`:pathMatch(.*)*`).
    Repeated(Vec<String>),
}

/// Trait for matching a path against a compiled pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns captured params if the path matches.
    fn matches(&self, path: &str) -> Option<Params>;
}

/// Drop a single trailing slash when matching is not strict.
fn trim_trailing<'a>(path: &'a str, options: &MatchingConfig) -> &'a str {
    if !options.strict && path.len() > 1 && path.ends_with('/') {
        &path[..path.len() - 1]
    } else {
        path
    }
}

fn segment_eq(a: &str, b: &str, options: &MatchingConfig) -> bool {
    if options.case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

/// Comparison key for a literal path under `options`.
///
/// Two literals collide exactly when their keys are equal.
pub fn literal_key(path: &str, options: &MatchingConfig) -> String {
    let trimmed = trim_trailing(path, options);
    if options.case_sensitive {
        trimmed.to_string()
    } else {
        trimmed.to_ascii_lowercase()
    }
}

/// Matches one literal path.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    path: String,
    options: MatchingConfig,
}

impl LiteralMatcher {
    pub fn new(path: impl Into<String>, options: MatchingConfig) -> Self {
        let path = path.into();
        let path = trim_trailing(&path, &options).to_string();
        Self { path, options }
    }
}

impl Matcher for LiteralMatcher {
    fn matches(&self, path: &str) -> Option<Params> {
        let path = trim_trailing(path, &self.options);
        segment_eq(&self.path, path, &self.options).then(Params::new)
    }
}

/// One segment of a dynamic pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// Repeated trailing capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tail {
    pub name: String,
    /// 0 for `*`, 1 for `+`.
    pub min_segments: usize,
}

/// Matches segment patterns such as `/users/:id` or `/:pathMatch(.*)*`.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    segments: Vec<Segment>,
    tail: Option<Tail>,
    options: MatchingConfig,
}

impl SegmentMatcher {
    pub fn new(segments: Vec<Segment>, tail: Option<Tail>, options: MatchingConfig) -> Self {
        Self {
            segments,
            tail,
            options,
        }
    }

    fn split(path: &str) -> Vec<&str> {
        match path.strip_prefix('/') {
            Some("") => Vec::new(),
            Some(rest) => rest.split('/').collect(),
            None => path.split('/').collect(),
        }
    }
}

impl Matcher for SegmentMatcher {
    fn matches(&self, path: &str) -> Option<Params> {
        let parts = Self::split(trim_trailing(path, &self.options));

        match &self.tail {
            None if parts.len() != self.segments.len() => return None,
            Some(tail) if parts.len() < self.segments.len() + tail.min_segments => return None,
            _ => {}
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts.iter()) {
            match segment {
                Segment::Static(expected) => {
                    if !segment_eq(expected, part, &self.options) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), ParamValue::Single((*part).to_string()));
                }
            }
        }

        if let Some(tail) = &self.tail {
            let rest = parts[self.segments.len()..]
                .iter()
                .map(|s| (*s).to_string())
                .collect();
            params.insert(tail.name.clone(), ParamValue::Repeated(rest));
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact() -> MatchingConfig {
        MatchingConfig::default()
    }

    fn lenient() -> MatchingConfig {
        MatchingConfig {
            case_sensitive: false,
            strict: false,
        }
    }

    #[test]
    fn test_literal_matcher() {
        let matcher = LiteralMatcher::new("/dashboard", exact());

        assert!(matcher.matches("/dashboard").is_some());
        assert!(matcher.matches("/Dashboard").is_none()); // Case sensitive
        assert!(matcher.matches("/dashboard/").is_none()); // Strict
        assert!(matcher.matches("/dashboard/x").is_none());
    }

    #[test]
    fn test_literal_matcher_lenient() {
        let matcher = LiteralMatcher::new("/dashboard", lenient());

        assert!(matcher.matches("/DASHBOARD").is_some());
        assert!(matcher.matches("/dashboard/").is_some());
        assert!(matcher.matches("/dashboard//").is_none());
    }

    #[test]
    fn test_root_literal() {
        let matcher = LiteralMatcher::new("/", lenient());
        assert!(matcher.matches("/").is_some());
        assert!(matcher.matches("/x").is_none());
    }

    #[test]
    fn test_param_matcher() {
        let matcher = SegmentMatcher::new(
            vec![Segment::Static("users".into()), Segment::Param("id".into())],
            None,
            exact(),
        );

        let params = matcher.matches("/users/42").unwrap();
        assert_eq!(params.get("id"), Some(&ParamValue::Single("42".into())));

        assert!(matcher.matches("/users/").is_none()); // Empty param
        assert!(matcher.matches("/users/42/posts").is_none());
        assert!(matcher.matches("/accounts/42").is_none());
    }

    #[test]
    fn test_tail_matcher() {
        let catch_all = SegmentMatcher::new(
            Vec::new(),
            Some(Tail {
                name: "pathMatch".into(),
                min_segments: 0,
            }),
            exact(),
        );

        let params = catch_all.matches("/a/b/c").unwrap();
        assert_eq!(
            params.get("pathMatch"),
            Some(&ParamValue::Repeated(vec!["a".into(), "b".into(), "c".into()]))
        );

        let root = catch_all.matches("/").unwrap();
        assert_eq!(root.get("pathMatch"), Some(&ParamValue::Repeated(vec![])));
    }

    #[test]
    fn test_tail_requires_one_segment() {
        let matcher = SegmentMatcher::new(
            vec![Segment::Static("docs".into())],
            Some(Tail {
                name: "rest".into(),
                min_segments: 1,
            }),
            exact(),
        );

        assert!(matcher.matches("/docs").is_none());
        assert!(matcher.matches("/docs/intro").is_some());
    }

    #[test]
    fn test_literal_key() {
        assert_eq!(literal_key("/A/", &exact()), "/A/");
        assert_eq!(literal_key("/A/", &lenient()), "/a");
    }
}
