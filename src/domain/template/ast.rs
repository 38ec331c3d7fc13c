// Compiled template and match result types

use serde::Serialize;
use std::collections::BTreeMap;

/// One path segment of a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// The value side of a templated query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPart {
    Literal(String),
    Placeholder(String),
}

/// A template URI split into its literal and placeholder parts.
///
/// Built by [`TemplateParser::parse`](super::TemplateParser::parse) and never
/// mutated afterwards, so a single instance can be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTemplate {
    pub(super) source: String,
    pub(super) scheme: String,
    pub(super) host: String,
    pub(super) path_segments: Vec<Segment>,
    pub(super) query: Vec<(String, QueryPart)>,
}

impl CompiledTemplate {
    /// The template text this was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host including the port, if one was given
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path_segments(&self) -> &[Segment] {
        &self.path_segments
    }

    /// Query keys in template order, first occurrence of each key only
    pub fn query(&self) -> &[(String, QueryPart)] {
        &self.query
    }

    pub fn path_placeholders(&self) -> Vec<&str> {
        self.path_segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    pub fn query_placeholders(&self) -> Vec<&str> {
        self.query
            .iter()
            .filter_map(|(_, part)| match part {
                QueryPart::Placeholder(name) => Some(name.as_str()),
                QueryPart::Literal(_) => None,
            })
            .collect()
    }
}

/// Raw string parameters extracted by a successful match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// One entry per path placeholder
    pub path: BTreeMap<String, String>,
    /// One entry per query placeholder, empty when the URI omitted the key
    pub query: BTreeMap<String, String>,
}

impl MatchResult {
    pub fn path(&self, name: &str) -> Option<&str> {
        self.path.get(name).map(String::as_str)
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}
