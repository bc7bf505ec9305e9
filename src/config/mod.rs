use crate::errors::{AppError, AppResult};
use crate::models::{GeoPoint, GeofenceTarget};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_secs: u64,
}

fn default_tick_interval() -> u64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        // Default target: the office location the tool ships configured for.
        Self {
            latitude: 23.023095634068248,
            longitude: 72.54406814249094,
            radius_meters: 100.0,
            tick_interval_secs: default_tick_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("geopunch")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".geopunch")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("geopunch.conf")
    }

    /// The geofence this config describes.
    pub fn target(&self) -> GeofenceTarget {
        GeofenceTarget::new(GeoPoint::new(self.latitude, self.longitude), self.radius_meters)
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when no file exists yet.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let file = match path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if file.exists() {
            let content = fs::read_to_string(&file).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration to `path` (or the standard location),
    /// creating the parent directory if needed.
    pub fn save(&self, path: Option<&str>) -> AppResult<()> {
        let file = match path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut out = fs::File::create(&file).map_err(|_| AppError::ConfigSave)?;
        out.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize the configuration file, keeping an existing one untouched.
    /// Returns the path written (or found).
    pub fn init_all(path: Option<&str>, target: Option<GeofenceTarget>) -> AppResult<PathBuf> {
        let file = match path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if file.exists() {
            return Ok(file);
        }

        let mut cfg = Config::default();
        if let Some(t) = target {
            cfg.latitude = t.center.latitude;
            cfg.longitude = t.center.longitude;
            cfg.radius_meters = t.radius_meters;
        }

        cfg.save(file.to_str())?;
        Ok(file)
    }

    /// Render the config as YAML for `config --print`.
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn exists_at(path: Option<&str>) -> bool {
        match path {
            Some(p) => Path::new(p).exists(),
            None => Self::config_file().exists(),
        }
    }
}
