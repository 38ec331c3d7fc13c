use anyhow::{Context, Result};
use std::path::Path;

use crate::{config::yml_settings::YmlSettings, registry::TemplateRegistry};

const DEFAULT_CONFIG_FILE: &str = "templates.yml";

/// Build a registry from a YAML list of `{ name, template, description }`
/// entries. Duplicate names and invalid templates are errors.
pub fn registry_from_yaml(yml: &str) -> Result<TemplateRegistry> {
    let settings: Vec<YmlSettings> =
        serde_yaml::from_str(yml).context("Invalid yaml configuration")?;

    let mut registry = TemplateRegistry::new();
    for entry in settings {
        registry
            .register_described(
                &entry.name,
                &entry.template,
                entry.description.as_deref().unwrap_or_default(),
            )
            .with_context(|| format!("Invalid template entry '{}'", entry.name))?;
    }
    Ok(registry)
}

/// Load a registry file, `templates.yml` in the working directory by default
pub fn load_registry(path: Option<&Path>) -> Result<TemplateRegistry> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let yml = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read file {}", path.display()))?;
    registry_from_yaml(&yml)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATES: &str = r#"
- name: issues
  template: https://api.example.com/repos/{owner}/{repo}/issues?state={state}
  description: Issues of a repository
- name: repo
  template: https://api.example.com/repos/{owner}/{repo}
"#;

    #[test]
    fn test_valid_registry() {
        let registry = registry_from_yaml(TEMPLATES).unwrap();
        assert_eq!(registry.names(), vec!["issues", "repo"]);
        assert_eq!(registry.description("issues"), Some("Issues of a repository"));
    }

    #[test]
    fn test_duplicate_name_is_error() {
        let yml = "- name: a\n  template: repo://h/x\n- name: a\n  template: repo://h/y\n";
        let err = registry_from_yaml(yml).unwrap_err();
        assert!(err.to_string().contains("Invalid template entry 'a'"));
        assert!(format!("{:#}", err).contains("duplicate template name: a"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let err = registry_from_yaml("name: [unclosed").unwrap_err();
        assert!(err.to_string().contains("Invalid yaml configuration"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_registry(Some(Path::new("does/not/exist.yml"))).unwrap_err();
        assert!(err.to_string().contains("Could not read file"));
    }
}
