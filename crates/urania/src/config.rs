//! TOML chart configuration.
//!
//! ```toml
//! [location]
//! latitude = 51.4769
//! longitude = -0.0005
//!
//! [chart]
//! datetime = "2024-03-20T03:06:00Z"
//! house_system = "whole_sign"
//! bodies = ["sun", "moon", "mercury"]
//! modern_rulers = false
//!
//! [aspects]
//! only_major = true
//! orbs = { trine = 6.0, square = 7.0 }
//! ```

use crate::aspects::{AspectKind, AspectSettings};
use crate::chart::ChartSettings;
use crate::ephemeris::{Body, GeoLocation};
use crate::houses::HouseSystem;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Environment variable the demo binary reads the config path from
pub const CONFIG_ENV_VAR: &str = "URANIA_CONFIG";

/// Validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UraniaConfig {
    pub location: GeoLocation,
    /// Fixed chart instant; `None` means "now"
    pub datetime: Option<DateTime<Utc>>,
    pub chart: ChartSettings,
}

impl Default for UraniaConfig {
    fn default() -> Self {
        Self {
            location: GeoLocation::new(default_latitude(), default_longitude()),
            datetime: None,
            chart: ChartSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    location: Option<LocationToml>,
    #[serde(default)]
    chart: Option<ChartToml>,
    #[serde(default)]
    aspects: Option<AspectsToml>,
}

#[derive(Debug, Clone, Deserialize)]
struct LocationToml {
    #[serde(default = "default_latitude")]
    latitude: f64,
    #[serde(default = "default_longitude")]
    longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default)]
    datetime: Option<String>,
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default)]
    bodies: Option<Vec<String>>,
    #[serde(default = "default_modern_rulers")]
    modern_rulers: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct AspectsToml {
    #[serde(default)]
    only_major: bool,
    #[serde(default)]
    orbs: HashMap<String, f64>,
}

// Royal Observatory, Greenwich
fn default_latitude() -> f64 {
    51.4769
}

fn default_longitude() -> f64 {
    -0.0005
}

fn default_house_system() -> String {
    "placidus".to_string()
}

fn default_modern_rulers() -> bool {
    true
}

/// Parse and validate configuration text.
pub fn parse_config(text: &str) -> anyhow::Result<UraniaConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania config: {e}"))?;
    let mut config = UraniaConfig::default();

    if let Some(LocationToml {
        latitude,
        longitude,
    }) = root.location
    {
        if !(-90.0..=90.0).contains(&latitude) {
            anyhow::bail!("location.latitude must be within [-90, 90], got {latitude}");
        }
        if !(-180.0..=180.0).contains(&longitude) {
            anyhow::bail!("location.longitude must be within [-180, 180], got {longitude}");
        }
        config.location = GeoLocation::new(latitude, longitude);
    }

    if let Some(chart) = root.chart {
        if let Some(text) = chart.datetime {
            let dt = DateTime::parse_from_rfc3339(&text)
                .map_err(|e| anyhow::anyhow!("chart.datetime {text:?} is not RFC 3339: {e}"))?;
            config.datetime = Some(dt.with_timezone(&Utc));
        }
        config.chart.house_system = chart
            .house_system
            .parse::<HouseSystem>()
            .map_err(|e| anyhow::anyhow!("chart.house_system: {e}"))?;
        if let Some(names) = chart.bodies {
            config.chart.bodies = names
                .iter()
                .map(|n| n.parse::<Body>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| anyhow::anyhow!("chart.bodies: {e}"))?;
        }
        config.chart.modern_rulers = chart.modern_rulers;
    }

    if let Some(aspects) = root.aspects {
        config.chart.aspects = aspect_settings(aspects)?;
    }

    Ok(config)
}

fn aspect_settings(raw: AspectsToml) -> anyhow::Result<AspectSettings> {
    let mut orb_settings = HashMap::new();
    for (name, orb) in raw.orbs {
        let kind = AspectKind::from_name(&name)
            .ok_or_else(|| anyhow::anyhow!("aspects.orbs: unknown aspect {name:?}"))?;
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("aspects.orbs.{name} must be a non-negative number, got {orb}");
        }
        orb_settings.insert(kind, orb);
    }
    Ok(AspectSettings {
        orb_settings,
        only_major: raw.only_major,
    })
}

/// Read and parse a config file.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<UraniaConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
    parse_config(&text)
}

/// Config from the file named by `URANIA_CONFIG`, or defaults when unset.
pub fn load_from_env() -> anyhow::Result<UraniaConfig> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => {
            log::info!("Loading config from {}", Path::new(&path).display());
            load_config(path)
        }
        None => Ok(UraniaConfig::default()),
    }
}
