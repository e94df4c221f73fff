//! Path templates with `{name}` placeholders.

use std::collections::HashMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::BuildError;

/// Characters escaped in a path segment: everything but RFC 3986 unreserved.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path template such as `/v1/payments/{payment_id}/capture`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template.
    ///
    /// ## Errors
    ///
    /// Returns [`BuildError::InvalidPathTemplate`] for unbalanced braces,
    /// nested braces or an empty placeholder.
    pub fn parse(source: &str) -> Result<Self, BuildError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for next in chars.by_ref() {
                        match next {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(BuildError::invalid_path(format!(
                                    "nested '{{' in {source}"
                                )));
                            }
                            other => name.push(other),
                        }
                    }
                    if !closed {
                        return Err(BuildError::invalid_path(format!("unclosed '{{' in {source}")));
                    }
                    if name.is_empty() {
                        return Err(BuildError::invalid_path(format!(
                            "empty placeholder in {source}"
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Param(name));
                }
                '}' => {
                    return Err(BuildError::invalid_path(format!("unmatched '}}' in {source}")));
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Returns the template text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns placeholder names in the order they appear.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Returns `true` if the template declares `name`.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders().any(|candidate| candidate == name)
    }

    /// Substitutes every placeholder, percent-encoding each value as a
    /// single path segment.
    ///
    /// ## Errors
    ///
    /// Returns [`BuildError::MissingPathParam`] for the first placeholder
    /// without a value.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, BuildError> {
        let mut path = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = values.get(name).ok_or_else(|| BuildError::MissingPathParam {
                        name: name.clone(),
                        template: self.source.clone(),
                    })?;
                    path.extend(utf8_percent_encode(value, PATH_SEGMENT));
                }
            }
        }
        Ok(path)
    }
}
