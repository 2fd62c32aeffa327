//! Route pattern compilation.
//!
//! Supported syntax:
//! - literal paths: `/dashboard`, `/`
//! - parameter segments: `/users/:id`
//! - repeated tail: `/:pathMatch(.*)*` (zero or more segments) or
//!   `/docs/:rest(.*)+` (one or more), only as the last segment
//!
//! A pattern that is nothing but a zero-or-more tail is the catch-all.
//! Static text is percent-encoded the way normalized paths are.

use std::fmt;

use url::Url;

use crate::config::MatchingConfig;
use crate::routing::error::RouteError;
use crate::routing::matcher::{
    literal_key, LiteralMatcher, Matcher, Params, Segment, SegmentMatcher, Tail,
};

/// Shape of a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Literal,
    Dynamic,
    CatchAll,
}

/// A compiled path pattern.
#[derive(Debug)]
pub struct PathPattern {
    source: String,
    kind: PatternKind,
    key: String,
    matcher: Box<dyn Matcher>,
}

impl PathPattern {
    /// Parse and compile `source`.
    pub fn parse(source: &str, options: MatchingConfig) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: source.to_string(),
            reason: reason.to_string(),
        };

        let body = source
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let raw_segments: Vec<&str> = if body.is_empty() {
            Vec::new()
        } else {
            body.split('/').collect()
        };

        let mut segments = Vec::with_capacity(raw_segments.len());
        let mut tail = None;

        for (i, raw) in raw_segments.iter().enumerate() {
            let Some(param) = raw.strip_prefix(':') else {
                if raw.contains(['(', ')', '*']) {
                    return Err(invalid("unsupported characters in static segment"));
                }
                segments.push(Segment::Static(encode_path(raw)));
                continue;
            };

            let name_len = param
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(param.len());
            let (name, modifier) = param.split_at(name_len);
            if name.is_empty() {
                return Err(invalid("parameter name is empty"));
            }

            match modifier {
                "" => segments.push(Segment::Param(name.to_string())),
                "(.*)*" | "(.*)+" => {
                    if i + 1 != raw_segments.len() {
                        return Err(invalid("repeated parameter must be the last segment"));
                    }
                    tail = Some(Tail {
                        name: name.to_string(),
                        min_segments: usize::from(modifier.ends_with('+')),
                    });
                }
                _ => return Err(invalid("unsupported parameter modifier")),
            }
        }

        let is_literal = tail.is_none() && segments.iter().all(|s| matches!(s, Segment::Static(_)));
        let (kind, matcher): (PatternKind, Box<dyn Matcher>) = if is_literal {
            let matcher = LiteralMatcher::new(encode_path(source), options);
            (PatternKind::Literal, Box::new(matcher) as Box<dyn Matcher>)
        } else {
            let kind = match &tail {
                Some(t) if segments.is_empty() && t.min_segments == 0 => PatternKind::CatchAll,
                _ => PatternKind::Dynamic,
            };
            let matcher = SegmentMatcher::new(segments, tail, options);
            (kind, Box::new(matcher) as Box<dyn Matcher>)
        };

        let key = match kind {
            PatternKind::Literal => literal_key(&encode_path(source), &options),
            _ => source.to_string(),
        };

        Ok(Self {
            source: source.to_string(),
            kind,
            key,
            matcher,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn is_literal(&self) -> bool {
        self.kind == PatternKind::Literal
    }

    pub fn is_catch_all(&self) -> bool {
        self.kind == PatternKind::CatchAll
    }

    /// Key used to detect colliding patterns in a table.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn matches(&self, path: &str) -> Option<Params> {
        self.matcher.matches(path)
    }
}

/// Percent-encode `path` with the same rules `navigation::normalize_path` applies.
fn encode_path(path: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return path.to_string();
    };
    if path.starts_with('/') {
        url.set_path(path);
        url.path().to_string()
    } else {
        url.set_path(&format!("/{}", path));
        url.path()[1..].to_string()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
