// Matching concrete URIs against a compiled template

use std::collections::HashMap;

use super::ast::{CompiledTemplate, MatchResult, QueryPart, Segment};
use super::error::TemplateError;
use super::uri::RawUri;

impl CompiledTemplate {
    /// Match `uri` against this template and extract its raw parameters.
    ///
    /// The scheme is compared case-insensitively, the host (with port) exactly.
    /// Every query placeholder is present in the result, bound to `""` when
    /// the URI does not carry its key. Query keys the template does not
    /// declare are ignored.
    pub fn match_uri(&self, uri: &str) -> Result<MatchResult, TemplateError> {
        let candidate = RawUri::parse(uri).map_err(|reason| TemplateError::InvalidUri {
            uri: uri.to_string(),
            reason,
        })?;

        if !candidate.scheme.eq_ignore_ascii_case(&self.scheme) {
            return Err(TemplateError::SchemeMismatch {
                expected: self.scheme.clone(),
                actual: candidate.scheme,
            });
        }

        if candidate.host != self.host {
            return Err(TemplateError::HostMismatch {
                expected: self.host.clone(),
                actual: candidate.host.to_string(),
            });
        }

        let mut result = MatchResult::default();

        let segments = candidate.segments();
        if segments.len() != self.path_segments.len() {
            return Err(TemplateError::PathSegmentCountMismatch {
                expected: self.path_segments.len(),
                actual: segments.len(),
            });
        }

        for (index, (expected, actual)) in self.path_segments.iter().zip(&segments).enumerate() {
            match expected {
                Segment::Literal(literal) => {
                    if literal != actual {
                        return Err(TemplateError::PathSegmentLiteralMismatch {
                            index,
                            expected: literal.clone(),
                            actual: actual.to_string(),
                        });
                    }
                }
                Segment::Placeholder(name) => {
                    result.path.insert(name.clone(), actual.to_string());
                }
            }
        }

        let mut values: HashMap<String, String> = HashMap::new();
        for (key, value) in candidate.query_pairs() {
            values.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }

        for (key, part) in &self.query {
            if let QueryPart::Placeholder(name) = part {
                let value = values.get(key).cloned().unwrap_or_default();
                result.query.insert(name.clone(), value);
            }
        }

        Ok(result)
    }
}
