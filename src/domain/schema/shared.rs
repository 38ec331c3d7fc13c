// The schema shared by every view derived from it

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use super::error::SchemaError;
use super::validators::Validator;
use super::view::View;

type ParseFn<T> = dyn Fn(&str) -> Result<T, SchemaError> + Send + Sync;

struct Spec<T> {
    parser: Arc<ParseFn<T>>,
    validators: Vec<Arc<dyn Validator<T>>>,
}

/// One parser plus an ordered list of validators.
///
/// Cloning a `Schema` clones the handle, not the parser and validators: every clone
/// (and so every view) sees validators attached through any of them. Attach
/// all validators before handing views to other threads; parses that race
/// with an attachment may or may not run the new validator.
pub struct Schema<T> {
    inner: Arc<RwLock<Spec<T>>>,
}

impl<T: 'static> Schema<T> {
    /// Start a schema from a parser, viewed with the required policy
    #[allow(clippy::new_ret_no_self)]
    pub fn new<F>(parser: F) -> View<T>
    where
        F: Fn(&str) -> Result<T, SchemaError> + Send + Sync + 'static,
    {
        let schema = Self {
            inner: Arc::new(RwLock::new(Spec {
                parser: Arc::new(parser),
                validators: Vec::new(),
            })),
        };
        View::required_of(schema)
    }

    pub(super) fn attach(&self, validator: Box<dyn Validator<T>>) {
        self.inner.write().validators.push(Arc::from(validator));
    }

    /// Run the parser, then each validator in attachment order, stopping at
    /// the first failure. The lock is released before any of them runs, so a
    /// validator may itself attach to or parse through this schema.
    pub fn resolve(&self, raw: &str) -> Result<T, SchemaError> {
        let (parser, validators) = {
            let spec = self.inner.read();
            (Arc::clone(&spec.parser), spec.validators.clone())
        };
        let value = parser(raw)?;
        for validator in &validators {
            validator.validate(&value)?;
        }
        Ok(value)
    }

    /// Names of the attached validators, in attachment order
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.inner
            .read()
            .validators
            .iter()
            .map(|validator| validator.name())
            .collect()
    }

    /// Whether both handles point at the same parser and validators
    pub fn shares_with(&self, other: &Schema<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("validators", &self.validator_names())
            .finish()
    }
}
