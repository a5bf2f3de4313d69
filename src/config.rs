use crate::charset::CharacterClassSelection;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MIN_LENGTH: usize = 4;
pub const DEFAULT_MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

/// Length bounds and default toggles for a [`PasswordGenerator`].
///
/// [`PasswordGenerator`]: crate::PasswordGenerator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub default_length: usize,
    pub classes: CharacterClassSelection,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            default_length: DEFAULT_LENGTH,
            classes: CharacterClassSelection::default(),
        }
    }
}

impl GeneratorConfig {
    /// Reads a JSON configuration file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&data)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length {
            return Err(Error::InvalidLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }

        self.check_length(self.default_length)
    }

    pub fn check_length(&self, length: usize) -> Result<()> {
        if (self.min_length..=self.max_length).contains(&length) {
            Ok(())
        } else {
            Err(Error::LengthOutOfRange {
                length,
                min: self.min_length,
                max: self.max_length,
            })
        }
    }
}
