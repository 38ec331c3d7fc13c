// Validator trait and the built-in validators

use std::fmt::Display;

use super::error::SchemaError;

/// A check run against an already parsed value
pub trait Validator<T>: Send + Sync {
    fn name(&self) -> &'static str;
    fn validate(&self, value: &T) -> Result<(), SchemaError>;
}

/// Integer must be greater than zero
pub struct Positive;

impl Validator<i64> for Positive {
    fn name(&self) -> &'static str {
        "positive"
    }

    fn validate(&self, value: &i64) -> Result<(), SchemaError> {
        if *value > 0 {
            Ok(())
        } else {
            Err(SchemaError::validation(
                self.name(),
                format!("expected positive integer (> 0), got: {}", value),
            ))
        }
    }
}

/// Integer must be zero or greater
pub struct NonNegative;

impl Validator<i64> for NonNegative {
    fn name(&self) -> &'static str {
        "non_negative"
    }

    fn validate(&self, value: &i64) -> Result<(), SchemaError> {
        if *value >= 0 {
            Ok(())
        } else {
            Err(SchemaError::validation(
                self.name(),
                format!("expected non-negative integer (>= 0), got: {}", value),
            ))
        }
    }
}

/// String must contain something other than whitespace
pub struct NotBlank;

impl Validator<String> for NotBlank {
    fn name(&self) -> &'static str {
        "not_blank"
    }

    fn validate(&self, value: &String) -> Result<(), SchemaError> {
        if value.trim().is_empty() {
            Err(SchemaError::validation(
                self.name(),
                format!("expected non-blank string, got: {:?}", value),
            ))
        } else {
            Ok(())
        }
    }
}

/// Value must equal one of a fixed set of options
pub struct In<T> {
    options: Vec<T>,
}

impl<T> In<T> {
    pub fn new<I, U>(options: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<T>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T> Validator<T> for In<T>
where
    T: PartialEq + Display + Send + Sync,
{
    fn name(&self) -> &'static str {
        "in"
    }

    fn validate(&self, value: &T) -> Result<(), SchemaError> {
        if self.options.contains(value) {
            return Ok(());
        }
        let options: Vec<String> = self.options.iter().map(ToString::to_string).collect();
        Err(SchemaError::validation(
            self.name(),
            format!("expected one of [{}], got: {}", options.join(", "), value),
        ))
    }
}

/// List must have at least one element
pub struct NotEmpty;

impl<E: Send + Sync> Validator<Vec<E>> for NotEmpty {
    fn name(&self) -> &'static str {
        "not_empty"
    }

    fn validate(&self, value: &Vec<E>) -> Result<(), SchemaError> {
        if value.is_empty() {
            Err(SchemaError::validation(
                "not_empty",
                "expected non-empty list, got: 0 elements",
            ))
        } else {
            Ok(())
        }
    }
}

/// A named caller-supplied check, for rules that are not built in
pub struct Custom<F> {
    name: &'static str,
    check: F,
}

impl<F> Custom<F> {
    pub fn new(name: &'static str, check: F) -> Self {
        Self { name, check }
    }
}

impl<T, F> Validator<T> for Custom<F>
where
    F: Fn(&T) -> Result<(), String> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate(&self, value: &T) -> Result<(), SchemaError> {
        (self.check)(value).map_err(|message| SchemaError::validation(self.name, message))
    }
}
