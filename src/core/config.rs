//! Report configuration.
//!
//! The defaults reproduce the classic harness output: names padded to 25
//! columns and a status beginning with `1` meaning PASS.

use std::path::PathBuf;

use serde::Deserialize;

use crate::core::errors::{ReporterError, Result};

/// Default column width for the test name.
pub const DEFAULT_NAME_WIDTH: usize = 25;

/// Widest name column a config may request.
pub const MAX_NAME_WIDTH: usize = 1024;

/// Default leading status character that marks a passing test.
pub const DEFAULT_PASS_MARKER: char = '1';

/// Settings that shape how a results file is classified and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Width the test name is left-justified to in the report body
    pub name_width: usize,
    /// First character of the status field that classifies a line as PASS
    pub pass_marker: char,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            pass_marker: DEFAULT_PASS_MARKER,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ReporterError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.name_width == 0 {
            return Err(ReporterError::config_field(
                "name_width must be greater than 0",
                "name_width",
            ));
        }

        if self.name_width > MAX_NAME_WIDTH {
            return Err(ReporterError::config_field(
                format!("name_width must be at most {MAX_NAME_WIDTH}"),
                "name_width",
            ));
        }

        if self.pass_marker.is_whitespace() {
            return Err(ReporterError::config_field(
                "pass_marker cannot be whitespace",
                "pass_marker",
            ));
        }

        Ok(())
    }
}
