//! Almanac configuration file support.
//!
//! Binaries read their observer site and search settings from a TOML file,
//! with environment-variable overrides applied on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AlmanacError;
use crate::models::GeographicLocation;
use crate::services::ScanSettings;
use crate::topo::{ObserverSite, IERS2010, WGS84};

/// Almanac configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlmanacConfig {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

/// Observer site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default)]
    pub elevation_m: Option<f64>,
    /// UTC offset applied to daylight sweeps so they cover local days.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: f64,
    #[serde(default = "default_ellipsoid")]
    pub ellipsoid: String,
}

/// Event search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_step_hours")]
    pub step_hours: f64,
    #[serde(default = "default_tolerance_seconds")]
    pub tolerance_seconds: f64,
}

fn default_site_name() -> String {
    "Grand Canyon Village".to_string()
}

fn default_latitude() -> f64 {
    36.0544
}

fn default_longitude() -> f64 {
    -112.1401
}

fn default_utc_offset() -> f64 {
    -7.0
}

fn default_ellipsoid() -> String {
    "WGS84".to_string()
}

fn default_step_hours() -> f64 {
    1.0
}

fn default_tolerance_seconds() -> f64 {
    1.0
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            elevation_m: None,
            utc_offset_hours: default_utc_offset(),
            ellipsoid: default_ellipsoid(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            step_hours: default_step_hours(),
            tolerance_seconds: default_tolerance_seconds(),
        }
    }
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            site: SiteSettings::default(),
            search: SearchSettings::default(),
        }
    }
}

impl AlmanacConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AlmanacConfig)` if successful
    /// * `Err(AlmanacError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AlmanacError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AlmanacError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: AlmanacConfig = toml::from_str(&content).map_err(|e| {
            AlmanacError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default locations, falling back to the
    /// built-in defaults when no file is found.
    ///
    /// Searches for `almanac.toml` in the current directory and its parent,
    /// or the file named by `ALMANAC_CONFIG`.
    pub fn from_default_location() -> Result<Self, AlmanacError> {
        if let Ok(path) = std::env::var("ALMANAC_CONFIG") {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("almanac.toml"),
            PathBuf::from("../almanac.toml"),
        ];
        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment-variable overrides on top of the loaded values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_f64("ALMANAC_SITE_LAT") {
            self.site.latitude = v;
        }
        if let Some(v) = env_f64("ALMANAC_SITE_LON") {
            self.site.longitude = v;
        }
        if let Some(v) = env_f64("ALMANAC_SITE_ELEVATION_M") {
            self.site.elevation_m = Some(v);
        }
        if let Some(v) = env_f64("ALMANAC_UTC_OFFSET_HOURS") {
            self.site.utc_offset_hours = v;
        }
        if let Some(v) = env_f64("ALMANAC_STEP_HOURS") {
            self.search.step_hours = v;
        }
        self
    }

    /// Build the observer site described by the configuration.
    pub fn observer_site(&self) -> Result<ObserverSite, AlmanacError> {
        let location = GeographicLocation::new(
            self.site.latitude,
            self.site.longitude,
            self.site.elevation_m,
        )?;
        let ellipsoid = match self.site.ellipsoid.to_ascii_uppercase().as_str() {
            "WGS84" => WGS84,
            "IERS2010" => IERS2010,
            other => {
                return Err(AlmanacError::Configuration(format!(
                    "unknown ellipsoid '{other}', expected WGS84 or IERS2010"
                )))
            }
        };
        Ok(ObserverSite::new(location, ellipsoid))
    }

    /// Build the scan settings described by the configuration.
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            step: qtty::Hours::new(self.search.step_hours),
            tolerance: qtty::Seconds::new(self.search.tolerance_seconds),
            ..ScanSettings::default()
        }
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AlmanacConfig::default();
        assert_eq!(config.site.latitude, 36.0544);
        assert_eq!(config.search.step_hours, 1.0);
        assert!(config.observer_site().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[site]
name = "Roque de los Muchachos"
latitude = 28.7624
longitude = -17.8892
elevation_m = 2396.0
utc_offset_hours = 0.0
ellipsoid = "IERS2010"

[search]
step_hours = 0.5
"#
        )
        .unwrap();

        let config = AlmanacConfig::from_file(file.path()).unwrap();
        assert_eq!(config.site.name, "Roque de los Muchachos");
        assert_eq!(config.site.elevation_m, Some(2396.0));
        assert_eq!(config.search.step_hours, 0.5);
        // tolerance falls back to its serde default
        assert_eq!(config.search.tolerance_seconds, 1.0);
        let site = config.observer_site().unwrap();
        assert_eq!(site.ellipsoid.name, "IERS2010");
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site = \"not a table\"").unwrap();
        assert!(AlmanacConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AlmanacConfig::from_file("/nonexistent/almanac.toml").is_err());
    }

    #[test]
    fn test_unknown_ellipsoid_rejected() {
        let mut config = AlmanacConfig::default();
        config.site.ellipsoid = "GRS80".to_string();
        assert!(config.observer_site().is_err());
    }

    #[test]
    fn test_scan_settings_conversion() {
        let mut config = AlmanacConfig::default();
        config.search.step_hours = 2.0;
        let settings = config.scan_settings();
        assert_eq!(settings.step.value(), 2.0);
        assert_eq!(settings.tolerance.value(), 1.0);
    }
}
