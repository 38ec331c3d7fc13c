// Process-wide environment source
//
// Env files are loaded at most once per process through `init`. Lookups are
// cached for the life of the process; `reset_cache` clears the cache so tests
// can observe changed variables.

use anyhow::{Context, Result};
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::schema::{SchemaError, View};

static LOADED: OnceCell<Option<PathBuf>> = OnceCell::new();
static CACHE: Lazy<RwLock<HashMap<String, Option<String>>>> = Lazy::new(Default::default);

/// Load an env file into the process environment, once.
///
/// With `None`, a `.env` file is searched for from the working directory
/// upwards and its absence is not an error. Returns `true` when this call
/// performed the load and `false` when an earlier call already had.
/// Variables already present in the environment are never overwritten.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let mut loaded_now = false;
    LOADED.get_or_try_init(|| -> Result<Option<PathBuf>> {
        loaded_now = true;
        let loaded = match path {
            Some(path) => dotenvy::from_path(path)
                .with_context(|| format!("Could not load env file {}", path.display()))
                .map(|()| Some(path.to_path_buf())),
            None => found(dotenvy::dotenv()),
        };
        // Even a failed load may have set the variables before the bad line
        reset_cache();
        loaded
    })?;
    Ok(loaded_now)
}

/// A missing env file is fine when searching; anything else is an error
fn found(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e).context("Could not load .env file"),
    }
}

/// The env file loaded by `init`, if any
pub fn loaded_file() -> Option<&'static Path> {
    LOADED.get().and_then(|loaded| loaded.as_deref())
}

/// Read a variable, serving repeated reads from the cache
pub fn lookup(key: &str) -> Option<String> {
    if let Some(cached) = CACHE.read().get(key) {
        return cached.clone();
    }
    let value = std::env::var(key).ok();
    CACHE.write().insert(key.to_string(), value.clone());
    value
}

pub fn reset_cache() {
    CACHE.write().clear();
}

/// Feed a variable through a schema view. An unset variable is read as the
/// empty string, so the view's policy decides what missing means.
pub fn read<T: Clone + 'static>(key: &str, view: &View<T>) -> Result<T, SchemaError> {
    let raw = lookup(key).unwrap_or_default();
    view.parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let result = dotenvy::from_filename("uriparams-no-such-file.env");
        assert_eq!(found(result).unwrap(), None);
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "URIPARAMS_UNIT_BEFORE_BAD_LINE=1").unwrap();
        writeln!(file, "URIPARAMS_UNIT_BAD='unterminated").unwrap();

        let err = found(dotenvy::from_filename(file.path())).unwrap_err();
        assert!(err.to_string().contains("Could not load .env file"));
    }

    #[test]
    fn test_found_env_file_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "URIPARAMS_UNIT_FOUND=yes").unwrap();

        let path = found(dotenvy::from_filename(file.path())).unwrap();
        assert_eq!(path.as_deref(), Some(file.path()));
    }
}
