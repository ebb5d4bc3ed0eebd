//! Run configuration: regions, cap, and the species to process.
//!
//! Configuration is immutable once loaded and is handed to the selector
//! explicitly; nothing here is global.

use crate::compute::cascade::DEFAULT_CAP;
use crate::compute::validation::validate_regions;
use crate::error::{Result, RoostError};
use roostmap_types::region::Region;
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selection configuration.
///
/// # Example
///
/// ```rust
/// use roostmap::Config;
///
/// let json = r#"{
///     "regions": [
///         { "name": "Manaus", "min_lat": -3.4, "max_lat": -2.8, "min_lon": -60.2, "max_lon": -59.4 }
///     ],
///     "species": ["Carollia perspicillata"]
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.cap, 8);
/// assert_eq!(config.catch_all_label, "catch-all");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Regions in priority order, highest first
    #[serde(default)]
    pub regions: Vec<Region>,

    /// Maximum coordinates selected per species
    #[serde(default = "Config::default_cap")]
    pub cap: usize,

    /// Species to process, in output order
    #[serde(default)]
    pub species: Vec<String>,

    /// Label reported when the unconditional fallback bucket contributes
    #[serde(default = "Config::default_catch_all_label")]
    pub catch_all_label: String,

    /// Variable name of the generated Dart map
    #[serde(default = "Config::default_map_name")]
    pub map_name: String,
}

impl Config {
    const fn default_cap() -> usize {
        DEFAULT_CAP
    }

    fn default_catch_all_label() -> String {
        "catch-all".to_string()
    }

    fn default_map_name() -> String {
        "gbifLocations".to_string()
    }

    /// Append a region at the lowest named priority.
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_species<I, S>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.species = species.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_catch_all_label(mut self, label: impl Into<String>) -> Self {
        self.catch_all_label = label.into();
        self
    }

    /// Validate configuration values.
    ///
    /// Inverted or non-finite region bounds are reported here, before any
    /// selection runs.
    pub fn validate(&self) -> Result<()> {
        if self.catch_all_label.trim().is_empty() {
            return Err(RoostError::InvalidConfig(
                "catch_all_label must not be empty".to_string(),
            ));
        }

        if self.map_name.trim().is_empty() {
            return Err(RoostError::InvalidConfig(
                "map_name must not be empty".to_string(),
            ));
        }

        if self.cap > 10_000 {
            log::warn!(
                "Cap of {} coordinates per species is very large for static map markers",
                self.cap
            );
        }

        validate_regions(&self.regions, &self.catch_all_label)
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read and validate a `.json` or `.toml` configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RoostError::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::from_json(&contents)?),
            #[cfg(feature = "toml")]
            Some("toml") => {
                Self::from_toml(&contents).map_err(|e| RoostError::Toml(e.to_string()))
            }
            _ => Err(RoostError::InvalidConfig(format!(
                "unsupported configuration format: '{}'",
                path.display()
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            cap: Self::default_cap(),
            species: Vec::new(),
            catch_all_label: Self::default_catch_all_label(),
            map_name: Self::default_map_name(),
        }
    }
}
