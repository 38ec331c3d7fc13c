// Template compiler: classifies path segments and query values

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{CompiledTemplate, QueryPart, Segment};
use super::error::TemplateError;
use super::uri::RawUri;

// A path segment is a placeholder only when the whole segment is one
static SEGMENT_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{(\w+)\}$").expect("valid segment placeholder pattern"));

// A query value only has to contain one; text around it is dropped
static QUERY_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("valid query placeholder pattern"));

pub struct TemplateParser;

impl TemplateParser {
    pub fn parse(template: &str) -> Result<CompiledTemplate, TemplateError> {
        let invalid = |reason: String| TemplateError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };

        let raw = RawUri::parse(template).map_err(invalid)?;

        if raw.host.contains(|c: char| c == '{' || c == '}') {
            return Err(invalid(format!(
                "placeholders are not allowed in host '{}'",
                raw.host
            )));
        }

        let path_segments = raw
            .segments()
            .into_iter()
            .map(Self::classify_segment)
            .collect();

        let mut query: Vec<(String, QueryPart)> = Vec::new();
        for (key, value) in raw.query_pairs() {
            // Repeated keys keep their first declaration
            if query.iter().any(|(existing, _)| *existing == key) {
                continue;
            }
            query.push((key.into_owned(), Self::classify_query_value(&value)));
        }

        Ok(CompiledTemplate {
            source: template.to_string(),
            scheme: raw.scheme,
            host: raw.host.to_string(),
            path_segments,
            query,
        })
    }

    fn classify_segment(segment: &str) -> Segment {
        match SEGMENT_PLACEHOLDER.captures(segment.trim()) {
            Some(caps) => Segment::Placeholder(caps[1].to_string()),
            None => Segment::Literal(segment.to_string()),
        }
    }

    fn classify_query_value(value: &str) -> QueryPart {
        match QUERY_PLACEHOLDER.captures(value) {
            Some(caps) => QueryPart::Placeholder(caps[1].to_string()),
            None => QueryPart::Literal(value.to_string()),
        }
    }
}
