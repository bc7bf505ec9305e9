use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A WGS84 point in decimal degrees. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a CLI argument of the form "LAT,LON" (decimal degrees).
    pub fn parse(s: &str) -> AppResult<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoordinate(s.to_string()))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinate(s.to_string()));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Great-circle distance to another point in meters (haversine).
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

/// Circular geofence gating check-in. Fixed for the process lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeofenceTarget {
    pub center: GeoPoint,
    pub radius_meters: f64,
}

impl GeofenceTarget {
    pub fn new(center: GeoPoint, radius_meters: f64) -> Self {
        Self {
            center,
            radius_meters,
        }
    }

    pub fn distance_to(&self, point: &GeoPoint) -> f64 {
        self.center.distance_meters(point)
    }

    /// Boundary is inclusive: a point at exactly radius distance is inside.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.distance_to(point) <= self.radius_meters
    }
}
