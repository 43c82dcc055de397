use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::distance::haversine_km;

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Reasons a coordinate pair is rejected at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is not a finite number")]
    NonFiniteLatitude(f64),
    #[error("longitude {0} is not a finite number")]
    NonFiniteLongitude(f64),
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A position on the Earth's surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl Point {
    /// Create a point without range checks.
    ///
    /// The distance formula is defined for any real input, so the engine
    /// accepts whatever it is given. Use [`Point::validated`] on untrusted
    /// input.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Point {
            latitude,
            longitude,
        }
    }

    /// Create a point, rejecting non-finite or out-of-range coordinates
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() {
            return Err(CoordinateError::NonFiniteLatitude(latitude));
        }
        if !longitude.is_finite() {
            return Err(CoordinateError::NonFiniteLongitude(longitude));
        }
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Point::new(latitude, longitude))
    }

    /// Great-circle distance to `other` in kilometers
    pub fn distance_km(&self, other: &Point) -> f64 {
        haversine_km(*self, *other)
    }
}
