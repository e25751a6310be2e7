use crate::error::{NavError, Result as NavResult};

use std::collections::HashMap;

/// Parameters captured from a matched path, keyed by segment name.
pub type RouteParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A declared path pattern: `/`-separated literal segments and `:name`
/// parameters, e.g. `/jobs/:id/edit`.
///
/// Literal segments match case-insensitively, so a link to
/// `/contracttemplate/manage` reaches a route declared as
/// `/contractTemplate/manage`. Parameter segments match any non-empty
/// value and capture it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> NavResult<Self> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(NavError::invalid_pattern(pattern, "must start with '/'"));
        };

        let mut segments = Vec::new();

        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(NavError::invalid_pattern(pattern, "empty segment"));
                }

                if let Some(name) = part.strip_prefix(':') {
                    if name.is_empty() {
                        return Err(NavError::invalid_pattern(pattern, "unnamed parameter"));
                    }
                    segments.push(Segment::Param(name.to_string()));
                } else {
                    segments.push(Segment::Literal(part.to_string()));
                }
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Match a concrete path, returning the captured parameters.
    ///
    /// A trailing slash on the path is tolerated; segment count must
    /// otherwise agree exactly.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let trimmed = path.strip_prefix('/')?;
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        let parts: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(literal) => {
                    if !literal.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }

        Some(params)
    }

    /// Number of literal segments, the specificity rank: when several
    /// patterns match one path, the most literal one wins.
    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Shape of the pattern with case and parameter names erased; two
    /// patterns with the same normalized form match the same paths.
    pub(crate) fn normalized(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Literal(literal) => literal.to_ascii_lowercase(),
                Segment::Param(_) => ":".to_string(),
            })
            .collect();

        format!("/{}", parts.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
