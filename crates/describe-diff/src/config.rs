//! Context diff settings
//!
//! ```toml
//! context = 3
//! from_label = "Got"
//! to_label = "Want"
//! tab_replacement = " "
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use describe_core::errors::{invalid_config, DescribeError, Result};
use describe_core::{log_op_end, log_op_error, log_op_start};
use describe_core_types::schema::OP_LOAD_CONFIG;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Unchanged lines kept around each change
    pub context: usize,

    /// Header label of the first ("got") text
    pub from_label: String,

    /// Header label of the second ("want") text
    pub to_label: String,

    /// Replacement for every tab in the rendered diff
    pub tab_replacement: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            context: 3,
            from_label: "Got".to_string(),
            to_label: "Want".to_string(),
            tab_replacement: " ".to_string(),
        }
    }
}

impl DiffConfig {
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn with_labels(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_label = from.into();
        self.to_label = to.into();
        self
    }

    /// # Errors
    ///
    /// Returns `DescribeError::InvalidConfig` when a label is empty or the
    /// tab replacement itself contains a tab.
    pub fn validate(&self) -> Result<()> {
        if self.from_label.is_empty() || self.to_label.is_empty() {
            return Err(invalid_config("diff labels must not be empty"));
        }
        if self.tab_replacement.contains('\t') {
            return Err(invalid_config("tab_replacement must not contain a tab"));
        }
        Ok(())
    }
}

/// # Errors
///
/// Returns `DescribeError::InvalidConfig` on malformed TOML, unknown keys or
/// failed validation.
pub fn parse_diff_config_str(content: &str) -> Result<DiffConfig> {
    let config: DiffConfig = toml::from_str(content)
        .map_err(|e| invalid_config(format!("TOML parse error: {}", e)))?;

    config.validate()?;

    Ok(config)
}

/// # Errors
///
/// Returns `DescribeError::Io` when the file cannot be read, otherwise as
/// [`parse_diff_config_str`].
pub fn parse_diff_config_file(path: &Path) -> Result<DiffConfig> {
    let start = Instant::now();
    log_op_start!(OP_LOAD_CONFIG, path = %path.display());

    let result = fs::read_to_string(path)
        .map_err(DescribeError::from)
        .and_then(|content| parse_diff_config_str(&content));

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
    use describe_core::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = parse_diff_config_str("").unwrap();
        assert_eq!(config, DiffConfig::default());
        assert_eq!(config.context, 3);
        assert_eq!(config.from_label, "Got");
        assert_eq!(config.to_label, "Want");
    }

    #[test]
    fn test_partial_override() {
        let config = parse_diff_config_str("context = 1\nto_label = \"Expected\"").unwrap();
        assert_eq!(config.context, 1);
        assert_eq!(config.from_label, "Got");
        assert_eq!(config.to_label, "Expected");
    }

    #[test]
    fn test_rejects_empty_label() {
        let err = parse_diff_config_str("from_label = \"\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_rejects_negative_context() {
        let err = parse_diff_config_str("context = -1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tab_replacement = \"    \"").unwrap();
        let config = parse_diff_config_file(file.path()).unwrap();
        assert_eq!(config.tab_replacement, "    ");
    }
}
