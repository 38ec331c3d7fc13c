// Errors raised while turning raw strings into typed values

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("cannot parse {input:?} as {expected}: {reason}")]
    Parse {
        input: String,
        expected: &'static str,
        reason: String,
    },

    #[error("validation failed ({validator}): {message}")]
    Validation {
        validator: &'static str,
        message: String,
    },
}

impl SchemaError {
    pub fn parse(input: &str, expected: &'static str, reason: impl Into<String>) -> Self {
        SchemaError::Parse {
            input: input.to_string(),
            expected,
            reason: reason.into(),
        }
    }

    pub fn validation(validator: &'static str, message: impl Into<String>) -> Self {
        SchemaError::Validation {
            validator,
            message: message.into(),
        }
    }
}
