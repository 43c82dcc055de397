use crate::geo::format_km;

/// The closest non-containing zone
#[derive(Debug, Clone, PartialEq)]
pub struct NearestZone {
    /// Zone name
    pub zone: String,
    /// Distance from the query point to the zone center in kilometers
    pub distance_km: f64,
}

/// Outcome of a restriction check
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The point lies inside `zone`
    Restricted {
        zone: String,
        description: String,
        distance_km: f64,
    },
    /// The point lies outside every candidate zone
    Unrestricted {
        /// `None` when there were no candidates to compare against
        nearest: Option<NearestZone>,
    },
}

impl Verdict {
    pub fn is_restricted(&self) -> bool {
        matches!(self, Verdict::Restricted { .. })
    }

    /// Name of the containing zone, or of the nearest zone
    pub fn zone_name(&self) -> Option<&str> {
        match self {
            Verdict::Restricted { zone, .. } => Some(zone),
            Verdict::Unrestricted { nearest } => nearest.as_ref().map(|n| n.zone.as_str()),
        }
    }

    /// Distance to the containing zone, or to the nearest zone
    pub fn distance_km(&self) -> Option<f64> {
        match self {
            Verdict::Restricted { distance_km, .. } => Some(*distance_km),
            Verdict::Unrestricted { nearest } => nearest.as_ref().map(|n| n.distance_km),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Restricted {
                zone, distance_km, ..
            } => write!(f, "restricted by {} at {} km", zone, format_km(*distance_km)),
            Verdict::Unrestricted { nearest: Some(n) } => write!(
                f,
                "unrestricted, nearest {} at {} km",
                n.zone,
                format_km(n.distance_km)
            ),
            Verdict::Unrestricted { nearest: None } => write!(f, "unrestricted, no zones"),
        }
    }
}
