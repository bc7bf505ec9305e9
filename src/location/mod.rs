//! Location capability consumed by the tracker.
//!
//! The core never fetches a position on its own: callers resolve a fix
//! through a [`LocationProvider`] and pass the resulting point in. On the
//! CLI the "fix" comes from the `--at` flag or from the environment
//! (`GEOPUNCH_LAT` / `GEOPUNCH_LON`), standing in for a platform location
//! service.

use crate::errors::AppError;
use crate::models::GeoPoint;
use std::env;
use thiserror::Error;

pub const ENV_LAT: &str = "GEOPUNCH_LAT";
pub const ENV_LON: &str = "GEOPUNCH_LON";

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("permission to access location was denied")]
    PermissionDenied,

    #[error("no location fix available: {0}")]
    Unavailable(String),
}

/// Any location failure is a recoverable check-in failure for the caller.
impl From<LocationError> for AppError {
    fn from(e: LocationError) -> Self {
        AppError::LocationUnavailable(e.to_string())
    }
}

pub trait LocationProvider {
    fn current_location(&self) -> Result<GeoPoint, LocationError>;
}

/// A fixed point, e.g. parsed from the `--at` flag.
pub struct FixedProvider(pub GeoPoint);

impl LocationProvider for FixedProvider {
    fn current_location(&self) -> Result<GeoPoint, LocationError> {
        Ok(self.0)
    }
}

/// Reads GEOPUNCH_LAT / GEOPUNCH_LON from the environment.
pub struct EnvProvider;

impl LocationProvider for EnvProvider {
    fn current_location(&self) -> Result<GeoPoint, LocationError> {
        let lat = env::var(ENV_LAT)
            .map_err(|_| LocationError::Unavailable(format!("{} not set", ENV_LAT)))?;
        let lon = env::var(ENV_LON)
            .map_err(|_| LocationError::Unavailable(format!("{} not set", ENV_LON)))?;

        let latitude: f64 = lat
            .parse()
            .map_err(|_| LocationError::Unavailable(format!("bad {}: {}", ENV_LAT, lat)))?;
        let longitude: f64 = lon
            .parse()
            .map_err(|_| LocationError::Unavailable(format!("bad {}: {}", ENV_LON, lon)))?;

        Ok(GeoPoint::new(latitude, longitude))
    }
}

/// Resolve the current position for a CLI invocation: explicit `--at` point
/// first, then the environment.
pub fn resolve(explicit: Option<GeoPoint>) -> Result<GeoPoint, LocationError> {
    match explicit {
        Some(p) => FixedProvider(p).current_location(),
        None => EnvProvider.current_location(),
    }
}
