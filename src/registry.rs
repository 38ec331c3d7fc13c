// Registry of named templates, tried in registration order

use thiserror::Error;

use crate::domain::template::{CompiledTemplate, MatchResult, TemplateError, TemplateParser};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate template name: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    description: String,
    template: CompiledTemplate,
}

/// Named templates compiled once at startup and shared read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    entries: Vec<Entry>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, template: &str) -> Result<(), RegistryError> {
        self.register_described(name, template, "")
    }

    pub fn register_described(
        &mut self,
        name: &str,
        template: &str,
        description: &str,
    ) -> Result<(), RegistryError> {
        if self.get(name).is_some() {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        let template = TemplateParser::parse(template)?;
        self.entries.push(Entry {
            name: name.to_string(),
            description: description.to_string(),
            template,
        });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CompiledTemplate> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.template)
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.description.as_str())
    }

    /// Template names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Match `uri` against each template in registration order and return
    /// the first that accepts it
    pub fn resolve(&self, uri: &str) -> Option<(&str, MatchResult)> {
        for entry in &self.entries {
            match entry.template.match_uri(uri) {
                Ok(result) => {
                    tracing::debug!(uri, template = %entry.name, "resolved");
                    return Some((entry.name.as_str(), result));
                }
                Err(err) => {
                    tracing::debug!(uri, template = %entry.name, error = %err, "template rejected uri");
                }
            }
        }
        tracing::debug!(uri, "no template matched");
        None
    }
}
