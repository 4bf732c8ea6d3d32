// src/config.rs

use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;

use crate::estimate::{DietProfile, HouseholdProfile};

/// Errors for configuration and caller-supplied parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown diet profile `{0}` (expected Vegetarian, Mixed, High Meat or High Dairy)")]
    UnknownDiet(String),
    #[error("environment variable {var} has invalid value `{value}`")]
    InvalidEnv { var: String, value: String },
}

/// Where the resolver looks for the three source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    root: PathBuf,
}

impl ResolverConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/data`, tried first and written to by fallback synthesis.
    pub fn primary_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    /// `<root>` itself, tried second.
    pub fn secondary_dir(&self) -> &Path {
        &self.root
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// The collaborator's current widget state. `None` means "use the widget default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub state: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub crop: Option<String>,
    pub crop_state: Option<String>,
    /// When absent the dashboard does not run the estimator.
    pub household: Option<HouseholdProfile>,
}

impl Selection {
    /// Read a selection from `WATERDASH_*` variables. Only the binary calls this.
    pub fn from_env() -> Result<Self, ConfigError> {
        let household = HouseholdProfile {
            persons: env_parse("WATERDASH_PERSONS")?.unwrap_or(4),
            daily_liters_per_person: env_parse("WATERDASH_DAILY_LITERS")?.unwrap_or(150.0),
            diet: env_parse::<DietProfile>("WATERDASH_DIET")?.unwrap_or(DietProfile::Mixed),
            laundry_per_week: env_parse("WATERDASH_LAUNDRY")?.unwrap_or(2),
            showers_per_week: env_parse("WATERDASH_SHOWERS")?.unwrap_or(7),
        };

        Ok(Self {
            state: env_string("WATERDASH_STATE"),
            year: env_parse("WATERDASH_YEAR")?,
            month: env_parse("WATERDASH_MONTH")?,
            crop: env_string("WATERDASH_CROP"),
            crop_state: env_string("WATERDASH_CROP_STATE"),
            household: Some(household),
        })
    }
}

/// Root directory for the binary, from `WATERDASH_ROOT` or the working directory.
pub fn root_from_env() -> ResolverConfig {
    env_string("WATERDASH_ROOT")
        .map(ResolverConfig::new)
        .unwrap_or_default()
}

fn env_string(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(var: &str) -> Result<Option<T>, ConfigError> {
    match env_string(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                var: var.to_string(),
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_are_relative_to_root() {
        let cfg = ResolverConfig::new("/srv/water");
        assert_eq!(cfg.primary_dir(), PathBuf::from("/srv/water/data"));
        assert_eq!(cfg.secondary_dir(), Path::new("/srv/water"));
    }

    #[test]
    fn test_default_root_is_cwd() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.primary_dir(), PathBuf::from("./data"));
    }
}
