//! Code input configuration
//!
//! Describes a control in `~/.config/pincode/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::code_input::{Alphabet, CodeConstraints, CodeInput, InputTraits};
use crate::error::CodeInputError;

/// Configuration for one code input control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeInputConfig {
    /// Number of slots
    #[serde(default = "default_digit")]
    pub digit: usize,

    /// Accepted characters (numeric, alphanumeric, hex)
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Whether keyboard edits are accepted initially
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Keyboard hints; derived from the alphabet when omitted
    #[serde(default)]
    pub input_traits: Option<InputTraits>,
}

fn default_digit() -> usize {
    4
}

fn default_enabled() -> bool {
    true
}

impl Default for CodeInputConfig {
    fn default() -> Self {
        Self {
            digit: default_digit(),
            alphabet: Alphabet::default(),
            enabled: default_enabled(),
            input_traits: None,
        }
    }
}

impl CodeInputConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from `path`
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CodeInputError> {
        if self.digit == 0 {
            return Err(CodeInputError::Config("digit must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn constraints(&self) -> Result<CodeConstraints, CodeInputError> {
        CodeConstraints::new(self.digit, self.alphabet)
    }

    /// Build a control in the configured initial state
    pub fn build(&self) -> Result<CodeInput, CodeInputError> {
        self.validate()?;
        let mut input = CodeInput::with_constraints(self.constraints()?);
        if let Some(traits) = self.input_traits {
            input.set_input_traits(traits);
        }
        input.set_enabled(self.enabled);
        Ok(input)
    }
}
