//! Describer configuration
//!
//! Parses TOML configuration and validates it:
//!
//! ```toml
//! indent = "\t"
//! namespace = "geometry"
//! cycle_policy = "marker"
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use describe_core_types::schema::OP_LOAD_CONFIG;
use serde::{Deserialize, Serialize};

use crate::errors::{invalid_config, DescribeError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// What capture does when a pointer leads back onto its own path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Emit a `<cycle>` back-reference marker and keep going
    #[default]
    Marker,
    /// Make `try_describe` fail with `CycleDetected`
    Error,
}

/// Settings for a [`Describer`](crate::Describer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescribeConfig {
    /// Indentation unit, repeated once per nesting level
    pub indent: String,

    /// Namespace the describer treats as its own: names declared in it are
    /// printed unqualified
    pub namespace: String,

    pub cycle_policy: CyclePolicy,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            namespace: String::new(),
            cycle_policy: CyclePolicy::Marker,
        }
    }
}

impl DescribeConfig {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }

    /// Check the invariants the renderer relies on
    ///
    /// # Errors
    ///
    /// Returns `DescribeError::InvalidConfig` for an empty indent or one with
    /// characters other than spaces and tabs.
    pub fn validate(&self) -> Result<()> {
        if self.indent.is_empty() {
            return Err(invalid_config("indent must not be empty"));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(invalid_config(format!(
                "indent must contain only spaces or tabs, got {:?}",
                self.indent
            )));
        }
        Ok(())
    }
}

/// Parse a describer configuration from a string
///
/// # Errors
///
/// Returns `DescribeError::InvalidConfig` on malformed TOML, unknown keys or
/// values that fail [`DescribeConfig::validate`].
pub fn parse_config_str(content: &str) -> Result<DescribeConfig> {
    let config: DescribeConfig = toml::from_str(content)
        .map_err(|e| invalid_config(format!("TOML parse error: {}", e)))?;

    config.validate()?;

    Ok(config)
}

/// Parse a describer configuration from a file
///
/// # Errors
///
/// Returns `DescribeError::Io` when the file cannot be read and
/// `DescribeError::InvalidConfig` when its contents are rejected.
pub fn parse_config_file(path: &Path) -> Result<DescribeConfig> {
    let start = Instant::now();
    log_op_start!(OP_LOAD_CONFIG, path = %path.display());

    let result = fs::read_to_string(path)
        .map_err(DescribeError::from)
        .and_then(|content| parse_config_str(&content));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(OP_LOAD_CONFIG, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(OP_LOAD_CONFIG, err, duration_ms = duration_ms);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config, DescribeConfig::default());
        assert_eq!(config.indent, "\t");
    }

    #[test]
    fn test_parse_all_fields() {
        let config = parse_config_str(
            r#"
indent = "  "
namespace = "geometry"
cycle_policy = "error"
"#,
        )
        .unwrap();

        assert_eq!(config.indent, "  ");
        assert_eq!(config.namespace, "geometry");
        assert_eq!(config.cycle_policy, CyclePolicy::Error);
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = parse_config_str("colour = true").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_rejects_non_whitespace_indent() {
        let err = parse_config_str(r#"indent = "->""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.to_string().contains("spaces or tabs"));
    }

    #[test]
    fn test_rejects_empty_indent() {
        let err = parse_config_str(r#"indent = """#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_parse_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "namespace = \"shapes\"").unwrap();

        let config = parse_config_file(file.path()).unwrap();
        assert_eq!(config.namespace, "shapes");
        assert_eq!(config.cycle_policy, CyclePolicy::Marker);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_config_file(Path::new("/nonexistent/describe.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
