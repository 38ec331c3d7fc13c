// uriparams: resolve resource URIs against registered templates and turn
// their raw parameters into typed, validated values.

pub mod config;
pub mod domain;
pub mod registry;

pub use domain::schema::{
    boolean, int, list, log_fallback, string, Custom, In, NonNegative, NotBlank, NotEmpty, Policy,
    Positive, Schema, SchemaError, Validator, View,
};
pub use domain::template::{
    compile, CompiledTemplate, MatchResult, QueryPart, Segment, TemplateError, TemplateParser,
};
pub use registry::{RegistryError, TemplateRegistry};
