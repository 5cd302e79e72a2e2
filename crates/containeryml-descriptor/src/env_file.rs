//! Secondary environment files referenced by `env-file`.
//!
//! An env file is a YAML mapping of variable names to values. Each pair
//! becomes one `KEY=VALUE` assignment.

use std::path::Path;

use containeryml_common::error::{ContainerYmlError, Result};
use serde_yaml::Value;

use crate::descriptor::{key_text, kind, parse_mapping, scalar_text};

/// Loads an env file and returns its assignments in file order.
///
/// Null values produce an empty assignment (`KEY=`).
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, is not
/// a mapping, or holds a sequence or mapping as a value.
pub fn load_env_file(path: &Path) -> Result<Vec<(String, String)>> {
    tracing::debug!(path = %path.display(), "loading env file");
    let text = std::fs::read_to_string(path).map_err(|e| ContainerYmlError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_env(&text, path)
}

/// Parses env file text. `origin` is only used in error messages.
///
/// # Errors
///
/// Same conditions as [`load_env_file`], minus I/O.
pub fn parse_env(text: &str, origin: &Path) -> Result<Vec<(String, String)>> {
    let mapping = parse_mapping(text, origin)?;
    mapping
        .iter()
        .map(|(key, value)| {
            let key = key_text(key, origin)?;
            let value = match value {
                Value::Null => String::new(),
                other => scalar_text(other).ok_or_else(|| ContainerYmlError::Config {
                    message: format!(
                        "{}: value of {key} must be a scalar, found {}",
                        origin.display(),
                        kind(other)
                    ),
                })?,
            };
            Ok((key, value))
        })
        .collect()
}

/// Formats an assignment as passed to `-e`.
#[must_use]
pub fn assignment(key: &str, value: &str) -> String {
    format!("{key}={value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<(String, String)>> {
        parse_env(text, Path::new("env.yml"))
    }

    #[test]
    fn pairs_keep_file_order() {
        let vars = parse("ZED: last\nALPHA: first\n").unwrap();
        assert_eq!(
            vars,
            vec![
                ("ZED".to_string(), "last".to_string()),
                ("ALPHA".to_string(), "first".to_string()),
            ]
        );
    }

    #[test]
    fn scalars_are_stringified() {
        let vars = parse("PORT: 8080\nDEBUG: false\nEMPTY:\n").unwrap();
        assert_eq!(vars[0].1, "8080");
        assert_eq!(vars[1].1, "false");
        assert_eq!(vars[2].1, "");
    }

    #[test]
    fn nested_values_are_rejected() {
        let err = parse("LIST: [a, b]\n").unwrap_err();
        assert!(err.to_string().contains("value of LIST must be a scalar"));
    }

    #[test]
    fn assignment_joins_with_equals() {
        assert_eq!(assignment("FOO", "bar"), "FOO=bar");
        assert_eq!(assignment("URL", "a=b"), "URL=a=b");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_env_file(&dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, ContainerYmlError::Io { .. }));
    }
}
