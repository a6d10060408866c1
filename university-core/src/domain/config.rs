use std::{num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for a university registry and the services built on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Display name of the university.
    name: String,

    /// Upper bound on the capacity of any newly created course.
    ///
    /// If this is `None`, any positive capacity is accepted.
    max_course_capacity: Option<NonZeroUsize>,
}

/// Errors raised when a request falls outside configured limits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested course capacity is above the configured ceiling.
    #[error("course capacity {requested} exceeds the configured limit of {limit}")]
    CapacityAboveLimit {
        /// The capacity that was requested.
        requested: usize,
        /// The configured ceiling.
        limit: NonZeroUsize,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            max_course_capacity: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Display name of the university.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The configured ceiling on course capacity, if any.
    #[must_use]
    pub const fn max_course_capacity(&self) -> Option<NonZeroUsize> {
        self.max_course_capacity
    }

    /// Sets or clears the ceiling on course capacity.
    pub const fn set_max_course_capacity(&mut self, limit: Option<NonZeroUsize>) {
        self.max_course_capacity = limit;
    }

    /// Checks a requested course capacity against the configured ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CapacityAboveLimit`] if a ceiling is configured
    /// and the request exceeds it.
    pub fn check_course_capacity(&self, requested: usize) -> Result<(), ConfigError> {
        match self.max_course_capacity {
            Some(limit) if requested > limit.get() => {
                Err(ConfigError::CapacityAboveLimit { requested, limit })
            }
            _ => Ok(()),
        }
    }
}

fn default_name() -> String {
    "University".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_name")]
        name: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_course_capacity: Option<NonZeroUsize>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                name,
                max_course_capacity,
            } => Self {
                name,
                max_course_capacity,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        let Config {
            name,
            max_course_capacity,
        } = config;

        Self::V1 {
            name,
            max_course_capacity,
        }
    }
}
