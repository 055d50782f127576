//! Path splitting and template segment parsing

use crate::RouteError;

/// Path separator
pub const SEPARATOR: char = '/';

/// Placeholder marker
pub const PLACEHOLDER_PREFIX: char = ':';

/// Split a path into segments.
///
/// One leading `/` is dropped and trailing empty segments are ignored, so
/// `/`, `` and `/users/` yield `[]`, `[]` and `["users"]`. Empty segments in
/// the middle (`/a//b`) are kept.
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_prefix(SEPARATOR).unwrap_or(path);
    let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}

/// Whether a template has any placeholder segment
#[inline]
pub fn is_dynamic(template: &str) -> bool {
    template.contains(PLACEHOLDER_PREFIX)
}

/// A named placeholder segment such as `:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pattern: String,
}

impl Placeholder {
    /// The pattern as written in the template, including the `:`
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The variable name bound by this placeholder
    pub fn name(&self) -> &str {
        &self.pattern[PLACEHOLDER_PREFIX.len_utf8()..]
    }

    /// Match one request segment, returning the captured value.
    #[inline]
    pub fn capture<'p>(&self, segment: &'p str) -> Option<&'p str> {
        if segment.is_empty() || segment.contains(SEPARATOR) {
            None
        } else {
            Some(segment)
        }
    }
}

/// One parsed template segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    Literal(&'t str),
    Placeholder(Placeholder),
}

impl<'t> Segment<'t> {
    /// Parse a single template segment.
    pub fn parse(template: &str, segment: &'t str) -> Result<Self, RouteError> {
        let Some(name) = segment.strip_prefix(PLACEHOLDER_PREFIX) else {
            if segment.contains(PLACEHOLDER_PREFIX) {
                return Err(RouteError::MisplacedPlaceholder {
                    template: template.to_string(),
                    segment: segment.to_string(),
                });
            }
            return Ok(Segment::Literal(segment));
        };

        if name.is_empty() {
            return Err(RouteError::EmptyPlaceholder {
                template: template.to_string(),
            });
        }
        if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(RouteError::InvalidPlaceholder {
                template: template.to_string(),
                segment: segment.to_string(),
            });
        }

        Ok(Segment::Placeholder(Placeholder {
            pattern: segment.to_string(),
        }))
    }
}
