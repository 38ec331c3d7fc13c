// Tests for loading a template registry file and resolving URIs through it

use std::io::Write;

use tempfile::NamedTempFile;
use uriparams::{config::templates, int, log_fallback, string, In, Positive};

const TEMPLATES: &str = r#"
- name: issue
  template: https://api.example.com/repos/{owner}/{repo}/issues/{number}
  description: A single issue
- name: issues
  template: https://api.example.com/repos/{owner}/{repo}/issues?state={state}&page={page}
  description: Issues of a repository
"#;

fn write_templates(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_registry_from_file() {
    let file = write_templates(TEMPLATES);
    let registry = templates::load_registry(Some(file.path())).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names(), vec!["issue", "issues"]);
    assert_eq!(
        registry.get("issue").map(|t| t.as_str()),
        Some("https://api.example.com/repos/{owner}/{repo}/issues/{number}")
    );
}

#[test]
fn test_resolve_and_convert_parameters() {
    let file = write_templates(TEMPLATES);
    let registry = templates::load_registry(Some(file.path())).unwrap();

    let state = string().must(In::new(["open", "closed", "all"])).optional("open".to_string());
    let page = int().must(Positive).optional(1).on_fallback(log_fallback::<i64>("page"));

    let (name, params) = registry
        .resolve("https://api.example.com/repos/rust-lang/cargo/issues?state=closed&page=0")
        .unwrap();
    assert_eq!(name, "issues");
    assert_eq!(params.path("owner"), Some("rust-lang"));
    assert_eq!(state.parse(params.query("state").unwrap()).unwrap(), "closed");
    assert_eq!(page.parse(params.query("page").unwrap()).unwrap(), 1);

    let (name, params) = registry
        .resolve("https://api.example.com/repos/rust-lang/cargo/issues/12")
        .unwrap();
    assert_eq!(name, "issue");
    let number = int().must(Positive);
    assert_eq!(number.parse(params.path("number").unwrap()).unwrap(), 12);
}

#[test]
fn test_unmatched_uri() {
    let registry = templates::registry_from_yaml(TEMPLATES).unwrap();
    assert!(registry
        .resolve("https://api.example.com/users/octocat")
        .is_none());
}

#[test]
fn test_invalid_template_in_file() {
    let file = write_templates("- name: broken\n  template: \"{scheme}://host/x\"\n");
    let err = templates::load_registry(Some(file.path())).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid template"));
}
