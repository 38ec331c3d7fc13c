// Typed parameter schemas
//
// A schema pairs one parser with an ordered list of validators. Views wrap a
// shared schema with a failure policy (required, optional or critical), and
// every view derived from a schema sees the validators attached through any
// of the others.

mod error;
mod parsers;
mod shared;
mod validators;
mod view;

pub use error::SchemaError;
pub use parsers::{boolean, int, list, parse_bool, parse_int, parse_list, string};
pub use shared::Schema;
pub use validators::{Custom, In, NonNegative, NotBlank, NotEmpty, Positive, Validator};
pub use view::{log_fallback, FallbackObserver, Policy, View};
