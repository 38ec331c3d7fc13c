use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches, Command};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use uriparams::{config::templates, TemplateParser};

const DEFAULT_LOG_LEVEL: &str = "warn";

fn cli() -> Command {
    let registry_arg = Arg::new("registry")
        .short('r')
        .long("registry")
        .value_name("FILE")
        .help("Path to a YAML file containing named templates (default: templates.yml)");

    Command::new("uriparams")
        .about("Match resource URIs against templates")
        .subcommand_required(true)
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .global(true)
                .help("Log filter, overrides RUST_LOG"),
        )
        .subcommand(
            Command::new("match")
                .about("Match one URI against one template")
                .arg(Arg::new("template").required(true).help("Template URI"))
                .arg(Arg::new("uri").required(true).help("Concrete URI")),
        )
        .subcommand(
            Command::new("resolve")
                .about("Find the first registered template matching a URI")
                .arg(registry_arg.clone())
                .arg(Arg::new("uri").required(true).help("Concrete URI")),
        )
        .subcommand(
            Command::new("list")
                .about("List registered templates")
                .arg(registry_arg),
        )
}

fn init_logging(level: Option<&String>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing argument <{}>", name))
}

fn run_match(matches: &ArgMatches) -> Result<()> {
    let template = TemplateParser::parse(required(matches, "template")?)?;
    let result = template.match_uri(required(matches, "uri")?)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_resolve(matches: &ArgMatches) -> Result<()> {
    let registry_path = matches.get_one::<String>("registry").map(Path::new);
    let registry = templates::load_registry(registry_path)?;
    let uri = required(matches, "uri")?;

    let (name, result) = registry
        .resolve(uri)
        .ok_or_else(|| anyhow!("no registered template matches {}", uri))?;
    let output = json!({
        "name": name,
        "path": result.path,
        "query": result.query,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_list(matches: &ArgMatches) -> Result<()> {
    let registry_path = matches.get_one::<String>("registry").map(Path::new);
    let registry = templates::load_registry(registry_path)?;

    for name in registry.names() {
        let template = registry.get(name).map(|t| t.as_str()).unwrap_or_default();
        match registry.description(name) {
            Some(description) if !description.is_empty() => {
                println!("{}\t{}\t{}", name, template, description)
            }
            _ => println!("{}\t{}", name, template),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_one::<String>("log_level"));

    match matches.subcommand() {
        Some(("match", sub)) => run_match(sub),
        Some(("resolve", sub)) => run_resolve(sub),
        Some(("list", sub)) => run_list(sub),
        _ => unreachable!("subcommand is required"),
    }
}
