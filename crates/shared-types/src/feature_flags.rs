use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::geocode::GeoPoint;

/// Feature flags controlling which optional workflow capabilities are active.
///
/// Every field has a default so that a missing or incomplete config file
/// still produces a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Show the signature pad and star rating in the order detail view.
    #[serde(default = "default_true")]
    pub signature_and_rating: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            signature_and_rating: true,
        }
    }
}

/// Geocoding service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodingConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

/// Map widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_lat")]
    pub default_lat: f64,
    #[serde(default = "default_lon")]
    pub default_lon: f64,
}

impl MapConfig {
    /// Reference point shown before the first resolution completes.
    pub fn default_center(&self) -> GeoPoint {
        GeoPoint {
            lat: self.default_lat,
            lon: self.default_lon,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            default_lat: default_lat(),
            default_lon: default_lon(),
        }
    }
}

/// Photo upload settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    #[serde(default = "default_max_photo_bytes")]
    pub max_photo_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_photo_bytes: default_max_photo_bytes(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

impl AppConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.map.zoom > 19 {
            return Err(AppError::config(format!(
                "map.zoom must be between 0 and 19, got {}",
                config.map.zoom
            )));
        }
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_user_agent() -> String {
    "horizon-delivery/0.1".to_string()
}

fn default_zoom() -> u8 {
    15
}

// São Paulo city centre.
fn default_lat() -> f64 {
    -23.550520
}

fn default_lon() -> f64 {
    -46.633308
}

fn default_max_photo_bytes() -> usize {
    10 * 1024 * 1024
}
