//! Engine configuration (reflet.toml)
//!
//! ```toml
//! [annotations]
//! search_hierarchy = true
//! excluded_namespaces = ["core"]
//!
//! [invoke]
//! throw_on_error = true
//! ```
//!
//! Every key is optional; unknown keys are rejected.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ReflectError, ReflectResult};
use crate::reflect::CORE_NAMESPACE;

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReflectConfig {
    /// Annotation lookup defaults
    pub annotations: AnnotationConfig,

    /// Method invocation defaults
    pub invoke: InvokeConfig,
}

/// Defaults used by `Reflector::find_annotation`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotationConfig {
    /// Also search super types and interfaces (default: true)
    pub search_hierarchy: bool,

    /// Namespace prefixes never searched (default: ["core"])
    pub excluded_namespaces: Vec<String>,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            search_hierarchy: true,
            excluded_namespaces: vec![CORE_NAMESPACE.to_string()],
        }
    }
}

/// Defaults used by `Reflector::invoke`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InvokeConfig {
    /// Raise resolution failures instead of returning `None` (default: true)
    pub throw_on_error: bool,
}

impl Default for InvokeConfig {
    fn default() -> Self {
        Self { throw_on_error: true }
    }
}

impl ReflectConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> ReflectResult<Self> {
        toml::from_str(content)
            .map_err(|e| ReflectError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> ReflectResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReflectError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded reflect configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ReflectConfig::default();
        assert!(config.annotations.search_hierarchy);
        assert_eq!(config.annotations.excluded_namespaces, vec!["core".to_string()]);
        assert!(config.invoke.throw_on_error);

        // An empty document is the default configuration
        assert_eq!(ReflectConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_partial_override() {
        let config = ReflectConfig::from_toml_str(
            r#"
[annotations]
excluded_namespaces = ["core", "vendor."]

[invoke]
throw_on_error = false
"#,
        )
        .unwrap();

        assert!(config.annotations.search_hierarchy);
        assert_eq!(config.annotations.excluded_namespaces.len(), 2);
        assert!(!config.invoke.throw_on_error);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ReflectConfig::from_toml_str("[invoke]\nretry = 3\n").unwrap_err();
        assert!(matches!(err, ReflectError::Config(_)));

        let err = ReflectConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap_err();
        assert!(matches!(err, ReflectError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[annotations]\nsearch_hierarchy = false").unwrap();

        let config = ReflectConfig::load(file.path()).unwrap();
        assert!(!config.annotations.search_hierarchy);
        assert!(config.invoke.throw_on_error);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReflectConfig::load(&dir.path().join("reflet.toml")).unwrap_err();
        assert!(err.to_string().contains("reflet.toml"));
    }
}
