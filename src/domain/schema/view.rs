// Views: a shared schema plus a failure policy

use std::fmt;
use std::sync::Arc;

use super::error::SchemaError;
use super::shared::Schema;
use super::validators::Validator;

/// Called with the fallback value and the error that caused it
pub type FallbackObserver<T> = Arc<dyn Fn(&T, &SchemaError) + Send + Sync>;

/// What a view does when parsing or validation fails
pub enum Policy<T> {
    /// Hand the error back to the caller
    Required,
    /// Notify observers in registration order, then return the fallback
    Optional {
        fallback: T,
        observers: Vec<FallbackObserver<T>>,
    },
    /// Abort: the caller cannot continue without this value
    Critical,
}

impl<T> Policy<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Policy::Required => "required",
            Policy::Optional { .. } => "optional",
            Policy::Critical => "critical",
        }
    }
}

impl<T: Clone> Clone for Policy<T> {
    fn clone(&self) -> Self {
        match self {
            Policy::Required => Policy::Required,
            Policy::Optional {
                fallback,
                observers,
            } => Policy::Optional {
                fallback: fallback.clone(),
                observers: observers.clone(),
            },
            Policy::Critical => Policy::Critical,
        }
    }
}

/// A schema seen through one failure policy.
///
/// `required`, `optional` and `critical` derive new views over the *same*
/// schema, so `must` on any of them is visible through all of them.
pub struct View<T> {
    schema: Schema<T>,
    policy: Policy<T>,
}

impl<T: 'static> View<T> {
    pub(super) fn required_of(schema: Schema<T>) -> Self {
        Self {
            schema,
            policy: Policy::Required,
        }
    }

    /// Append a validator to the shared schema
    pub fn must<V>(self, validator: V) -> Self
    where
        V: Validator<T> + 'static,
    {
        self.schema.attach(Box::new(validator));
        self
    }

    /// Append several validators, keeping their order
    pub fn must_all<I>(self, validators: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Validator<T>>>,
    {
        for validator in validators {
            self.schema.attach(validator);
        }
        self
    }

    pub fn required(&self) -> View<T> {
        View {
            schema: self.schema.clone(),
            policy: Policy::Required,
        }
    }

    pub fn optional(&self, fallback: T) -> View<T> {
        View {
            schema: self.schema.clone(),
            policy: Policy::Optional {
                fallback,
                observers: Vec::new(),
            },
        }
    }

    pub fn critical(&self) -> View<T> {
        View {
            schema: self.schema.clone(),
            policy: Policy::Critical,
        }
    }

    /// Register an observer for fallback events.
    ///
    /// # Panics
    ///
    /// Panics unless this is an optional view; only optional views fall back.
    pub fn on_fallback<F>(mut self, observer: F) -> Self
    where
        F: Fn(&T, &SchemaError) + Send + Sync + 'static,
    {
        match &mut self.policy {
            Policy::Optional { observers, .. } => observers.push(Arc::new(observer)),
            other => panic!(
                "on_fallback is only defined for optional views, this view is {}",
                other.kind()
            ),
        }
        self
    }

    pub fn schema(&self) -> &Schema<T> {
        &self.schema
    }

    pub fn policy(&self) -> &Policy<T> {
        &self.policy
    }
}

impl<T: Clone + 'static> View<T> {
    /// Parse and validate `raw`, then apply this view's failure policy.
    ///
    /// Only required views return `Err`. Optional views return their
    /// fallback on failure and critical views panic.
    pub fn parse(&self, raw: &str) -> Result<T, SchemaError> {
        let err = match self.schema.resolve(raw) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        match &self.policy {
            Policy::Required => Err(err),
            Policy::Optional {
                fallback,
                observers,
            } => {
                for observer in observers {
                    observer(fallback, &err);
                }
                Ok(fallback.clone())
            }
            Policy::Critical => {
                tracing::error!(input = raw, error = %err, "critical value rejected");
                panic!("critical value rejected: {}", err);
            }
        }
    }
}

impl<T: Clone> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            policy: self.policy.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for View<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("policy", &self.policy.kind())
            .field("schema", &self.schema)
            .finish()
    }
}

/// An observer that logs each fallback as a warning
pub fn log_fallback<T: fmt::Debug>(
    parameter: &'static str,
) -> impl Fn(&T, &SchemaError) + Send + Sync {
    move |fallback: &T, err: &SchemaError| {
        tracing::warn!(parameter, fallback = ?fallback, error = %err, "using fallback value");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, Once};

    use super::super::{int, list, Custom, NotEmpty, Positive};
    use super::*;

    #[test]
    fn test_required_propagates() {
        let view = int().must(Positive);
        assert_eq!(view.parse("5").unwrap(), 5);
        assert!(matches!(view.parse("0"), Err(SchemaError::Validation { .. })));
        assert!(matches!(view.parse("x"), Err(SchemaError::Parse { .. })));
    }

    #[test]
    fn test_parser_error_skips_validators() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let view = int().must(Custom::new("count", move |_: &i64| {
            *counter.lock().unwrap() += 1;
            Ok(())
        }));

        assert!(view.parse("nope").is_err());
        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(view.parse("1").is_ok());
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_first_failing_validator_wins() {
        let view = list(",")
            .must(NotEmpty)
            .must(Custom::new("short", |items: &Vec<String>| {
                if items.len() <= 2 {
                    Ok(())
                } else {
                    Err("too many".to_string())
                }
            }));

        let err = view.parse("").unwrap_err();
        assert!(matches!(err, SchemaError::Validation { validator: "not_empty", .. }));
        let err = view.parse("a,b,c").unwrap_err();
        assert!(matches!(err, SchemaError::Validation { validator: "short", .. }));
    }

    #[test]
    fn test_optional_observers_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&seen);
        let second = Arc::clone(&seen);

        let view = int()
            .optional(7)
            .on_fallback(move |value, _| first.lock().unwrap().push(("first", *value)))
            .on_fallback(move |value, _| second.lock().unwrap().push(("second", *value)));

        assert_eq!(view.parse("3").unwrap(), 3);
        assert!(seen.lock().unwrap().is_empty());

        assert_eq!(view.parse("bad").unwrap(), 7);
        assert_eq!(*seen.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_views_alias_one_schema() {
        let required = int();
        let optional = required.optional(1);
        let critical = optional.critical();

        let required = required.must(Positive);

        assert!(required.schema().shares_with(optional.schema()));
        assert!(critical.schema().shares_with(required.schema()));
        assert_eq!(optional.schema().validator_names(), vec!["positive"]);
        assert_eq!(optional.parse("-3").unwrap(), 1);
        assert!(required.parse("-3").is_err());
    }

    #[test]
    fn test_validator_may_attach_to_its_own_schema() {
        let view = int();
        let handle = view.clone();
        let once = Once::new();
        let view = view.must(Custom::new("attach_positive", move |_: &i64| {
            once.call_once(|| {
                let _ = handle.required().must(Positive);
            });
            Ok(())
        }));

        assert_eq!(view.parse("-1").unwrap(), -1);
        assert_eq!(
            view.schema().validator_names(),
            vec!["attach_positive", "positive"]
        );
        assert!(view.parse("-1").is_err());
    }

    #[test]
    #[should_panic(expected = "critical value rejected")]
    fn test_critical_panics() {
        let _ = int().critical().parse("");
    }

    #[test]
    #[should_panic(expected = "only defined for optional views")]
    fn test_on_fallback_requires_optional() {
        let _ = int().on_fallback(|_, _| {});
    }

    #[test]
    fn test_policy_kind() {
        let view = int();
        assert_eq!(view.policy().kind(), "required");
        assert_eq!(view.optional(0).policy().kind(), "optional");
        assert_eq!(view.critical().policy().kind(), "critical");
    }
}
