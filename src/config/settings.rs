use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};

#[cfg(feature = "cli")]
use crate::config::cli::CliConfig;

/// Effective run settings: defaults, then the settings file, then flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub output_path: Option<String>,
    pub trace: bool,
    pub strict: bool,
    pub delimiter: u8,
    pub trim: bool,
}

impl Settings {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            trace: false,
            strict: false,
            delimiter: b',',
            trim: true,
        }
    }

    pub fn with_output(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn apply_file(mut self, file: &TomlConfig) -> Result<Self> {
        if let Some(delimiter) = file.delimiter()? {
            self.delimiter = delimiter;
        }
        if let Some(trim) = file.trim() {
            self.trim = trim;
        }
        if let Some(strict) = file.strict() {
            self.strict = strict;
        }
        if let Some(trace) = file.trace_enabled() {
            self.trace = trace;
        }
        Ok(self)
    }

    /// Flags only switch features on; they never turn off what the file enabled.
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::new(cli.input.clone());
        settings.output_path = cli.output.clone();

        if let Some(path) = &cli.config {
            tracing::debug!("Loading settings from: {}", path);
            settings = settings.apply_file(&TomlConfig::from_file(path)?)?;
        }

        settings.trace |= cli.trace;
        settings.strict |= cli.strict;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        if let Some(output) = &self.output_path {
            validate_path("output", output)?;
            validate_distinct_paths(&self.input_path, output)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn trace_enabled(&self) -> bool {
        self.trace
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
    }

    fn trim_fields(&self) -> bool {
        self.trim
    }
}
