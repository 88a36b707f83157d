use crate::utils::error::{Result, SkylineError};
use crate::utils::validation::{validate_delimiter, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every field may be left out.
///
/// ```toml
/// [input]
/// delimiter = ";"
/// trim = true
///
/// [validation]
/// strict = true
///
/// [trace]
/// enabled = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub validation: Option<ValidationConfig>,
    pub trace: Option<TraceConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub delimiter: Option<String>,
    pub trim: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    pub enabled: Option<bool>,
}

impl TomlConfig {
    /// Loads settings from a TOML file; a missing file is a configuration error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SkylineError::ConfigError {
                message: format!("Settings file not found: {}", path.display()),
            },
            _ => SkylineError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content).map_err(|e| SkylineError::ConfigError {
            message: format!("Invalid TOML settings: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn delimiter(&self) -> Result<Option<u8>> {
        match self.input.as_ref().and_then(|i| i.delimiter.as_deref()) {
            Some(delimiter) => validate_delimiter("input.delimiter", delimiter).map(Some),
            None => Ok(None),
        }
    }

    pub fn trim(&self) -> Option<bool> {
        self.input.as_ref().and_then(|i| i.trim)
    }

    pub fn strict(&self) -> Option<bool> {
        self.validation.as_ref().and_then(|v| v.strict)
    }

    pub fn trace_enabled(&self) -> Option<bool> {
        self.trace.as_ref().and_then(|t| t.enabled)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.delimiter()?;
        Ok(())
    }
}
