use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, Point};

/// A circular restricted zone
///
/// The serialized form uses the same field names as the zone table the
/// service reads from: `zone_name`, `description`, `latitude`, `longitude`,
/// `radius_km`, `city`, `state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone identifier reported back to callers
    #[serde(rename = "zone_name")]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Center of the zone
    #[serde(flatten)]
    pub center: Point,

    /// Radius in kilometers
    pub radius_km: f64,

    /// City, used only for pre-filtering
    pub city: String,

    /// State, used only for pre-filtering
    pub state: String,
}

impl Zone {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        center: Point,
        radius_km: f64,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Zone {
            name: name.into(),
            description: description.into(),
            center,
            radius_km,
            city: city.into(),
            state: state.into(),
        }
    }

    /// Distance from `point` to the zone center in kilometers
    pub fn distance_km(&self, point: &Point) -> f64 {
        haversine_km(*point, self.center)
    }

    /// True if `point` lies inside or exactly on the zone boundary
    pub fn contains(&self, point: &Point) -> bool {
        self.distance_km(point) <= self.radius_km
    }
}
