//! Request and response shapes for `POST /api/check-zone`
//!
//! Validation happens here, before the store or the engine are touched:
//! coordinates must be JSON numbers inside their valid ranges, and city and
//! state must be present and non-empty.

use serde::{Deserialize, Serialize};
use zonecheck_core::engine::Verdict;
use zonecheck_core::geo::{format_km, Point};
use zonecheck_core::zones::ZoneFilter;

use crate::error::AppError;

/// Message for a location outside every candidate zone
pub const SAFE_MESSAGE: &str = "Location is safe";

/// Message when the city/state lookup found no zones at all
pub const NO_ZONES_MESSAGE: &str = "No restricted zones in this city/state";

/// Body of a zone check request
///
/// Every field is optional at the serde level so that an absent field is
/// reported as missing rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckZoneRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl CheckZoneRequest {
    /// Split the request into the query point and the candidate filter
    pub fn validate(self) -> Result<(Point, ZoneFilter), AppError> {
        let (Some(latitude), Some(longitude), Some(city), Some(state)) =
            (self.latitude, self.longitude, self.city, self.state)
        else {
            return Err(AppError::MissingFields);
        };
        if city.is_empty() || state.is_empty() {
            return Err(AppError::MissingFields);
        }

        let point = Point::validated(latitude, longitude)?;
        Ok((point, ZoneFilter::new(city, state)))
    }
}

/// Body of a zone check response
///
/// Distances are strings with two decimals, e.g. `"0.00"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckZoneResponse {
    Restricted {
        restricted: bool,
        zone: String,
        description: String,
        distance_km: String,
    },
    Unrestricted {
        restricted: bool,
        message: String,
        nearest_zone: Option<String>,
        nearest_distance_km: Option<String>,
    },
}

impl From<Verdict> for CheckZoneResponse {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Restricted {
                zone,
                description,
                distance_km,
            } => CheckZoneResponse::Restricted {
                restricted: true,
                zone,
                description,
                distance_km: format_km(distance_km),
            },
            Verdict::Unrestricted { nearest: Some(n) } => CheckZoneResponse::Unrestricted {
                restricted: false,
                message: SAFE_MESSAGE.to_string(),
                nearest_zone: Some(n.zone),
                nearest_distance_km: Some(format_km(n.distance_km)),
            },
            Verdict::Unrestricted { nearest: None } => CheckZoneResponse::Unrestricted {
                restricted: false,
                message: NO_ZONES_MESSAGE.to_string(),
                nearest_zone: None,
                nearest_distance_km: None,
            },
        }
    }
}
