// Template module for resource URI templates
//
// Templates are compiled once into literal and `{name}` placeholder parts,
// then concrete URIs are matched against them to pull out raw path and query
// parameters.

mod ast;
mod error;
mod matcher;
mod parser;
mod uri;

pub use ast::{CompiledTemplate, MatchResult, QueryPart, Segment};
pub use error::TemplateError;
pub use parser::TemplateParser;

/// Compile a template string, see [`TemplateParser::parse`]
pub fn compile(template: &str) -> Result<CompiledTemplate, TemplateError> {
    TemplateParser::parse(template)
}
