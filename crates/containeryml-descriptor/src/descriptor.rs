//! The per-project `container.yml` descriptor.
//!
//! The file is a flat YAML mapping. It is read fresh on every invocation
//! and never validated against a schema: unknown keys are kept so they can
//! be passed through to the runtime as-is.

use std::path::Path;

use containeryml_common::constants::DESCRIPTOR_FILE;
use containeryml_common::error::{ContainerYmlError, Result};
use serde_yaml::{Mapping, Value};

/// A loaded descriptor: its entries in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    entries: Vec<(String, Value)>,
}

impl Descriptor {
    /// Loads `container.yml` from a project directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is not valid
    /// YAML, or is not a mapping.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(DESCRIPTOR_FILE);
        tracing::debug!(path = %path.display(), "loading descriptor");
        let text = std::fs::read_to_string(&path).map_err(|e| ContainerYmlError::Io {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&text, &path)
    }

    /// Parses descriptor text. `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML or is not a mapping.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let mapping = parse_mapping(text, origin)?;
        let entries = mapping
            .into_iter()
            .map(|(key, value)| Ok((key_text(&key, origin)?, value)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Returns all entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }
}

/// Parses a YAML document that must be a mapping. An empty document is an
/// empty mapping.
pub(crate) fn parse_mapping(text: &str, origin: &Path) -> Result<Mapping> {
    if text.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let doc: Value = serde_yaml::from_str(text).map_err(|e| ContainerYmlError::Yaml {
        path: origin.to_path_buf(),
        source: e,
    })?;
    match doc {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(ContainerYmlError::Config {
            message: format!(
                "{} must be a mapping, found {}",
                origin.display(),
                kind(&other)
            ),
        }),
    }
}

/// Renders a mapping key as text. Scalars only.
pub(crate) fn key_text(key: &Value, origin: &Path) -> Result<String> {
    scalar_text(key).ok_or_else(|| ContainerYmlError::Config {
        message: format!(
            "{}: keys must be scalars, found {}",
            origin.display(),
            kind(key)
        ),
    })
}

/// Renders a scalar the way it would appear on a command line.
///
/// Returns `None` for null, sequences, and mappings.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Short name of a YAML value's type for error messages.
pub(crate) const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Descriptor> {
        Descriptor::parse(text, Path::new("container.yml"))
    }

    #[test]
    fn entries_keep_file_order() {
        let d = parse("memory: 256m\ncpu: 50\nprivileged: true\n").unwrap();
        let keys: Vec<_> = d.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["memory", "cpu", "privileged"]);
    }

    #[test]
    fn empty_document_is_empty_descriptor() {
        assert!(parse("").unwrap().entries().is_empty());
        assert!(parse("# only a comment\n").unwrap().entries().is_empty());
        assert!(parse("~").unwrap().entries().is_empty());
    }

    #[test]
    fn top_level_sequence_is_rejected() {
        let err = parse("- a\n- b\n").unwrap_err();
        assert!(matches!(err, ContainerYmlError::Config { .. }));
        assert!(err.to_string().contains("must be a mapping"));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let err = parse("ports: [80:80\n").unwrap_err();
        assert!(matches!(err, ContainerYmlError::Yaml { .. }));
    }

    #[test]
    fn numeric_keys_are_stringified() {
        let d = parse("1: one\n").unwrap();
        assert_eq!(d.entries()[0].0, "1");
    }

    #[test]
    fn scalar_values_are_kept_verbatim() {
        let d = parse("memory: 1g\n").unwrap();
        assert_eq!(
            d.entries(),
            [("memory".to_owned(), Value::String("1g".into()))]
        );
    }

    #[test]
    fn load_reads_container_yml() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("container.yml"), "cpu: 10\n").unwrap();
        let d = Descriptor::load(dir.path()).unwrap();
        assert_eq!(d.entries().len(), 1);
        assert_eq!(d.entries()[0].0, "cpu");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Descriptor::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContainerYmlError::Io { .. }));
    }

    #[test]
    fn scalar_text_renders_command_line_values() {
        assert_eq!(scalar_text(&Value::from(512)).as_deref(), Some("512"));
        assert_eq!(scalar_text(&Value::from(true)).as_deref(), Some("true"));
        assert_eq!(scalar_text(&Value::from("256m")).as_deref(), Some("256m"));
        assert_eq!(scalar_text(&Value::Null), None);
    }
}
