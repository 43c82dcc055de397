//! Zone Restriction Decision Engine
//!
//! Decides whether a query point lies inside any of a list of candidate
//! zones. The engine is a pure function of its inputs: it performs no I/O,
//! keeps no state between calls and cannot fail.
//!
//! # Semantics
//!
//! - Candidates are scanned in the order given.
//! - The first zone whose radius contains the point wins, even if a later
//!   zone's center is closer. The scan stops there.
//! - If no zone contains the point, the closest zone is reported. Ties go
//!   to the zone seen first.
//! - Distances are compared at full precision. Rounding is an output
//!   concern, see [`format_km`](crate::geo::format_km).
//!
//! # Example
//!
//! ```rust
//! use zonecheck_core::engine::{evaluate, Verdict};
//! use zonecheck_core::geo::Point;
//! use zonecheck_core::zones::Zone;
//!
//! let zones = vec![Zone::new(
//!     "Connaught Place",
//!     "Central Delhi",
//!     Point::new(28.6139, 77.2090),
//!     1.0,
//!     "Delhi",
//!     "Delhi",
//! )];
//!
//! let mumbai = Point::new(19.0760, 72.8777);
//! let verdict = evaluate(mumbai, &zones);
//! assert!(!verdict.is_restricted());
//! assert_eq!(verdict.zone_name(), Some("Connaught Place"));
//! ```

mod verdict;

pub use verdict::*;

use crate::geo::{haversine_km, Point};
use crate::zones::Zone;

/// Evaluate `query` against `candidates`
///
/// Returns [`Verdict::Restricted`] for the first containing zone, otherwise
/// [`Verdict::Unrestricted`] carrying the nearest zone (absent when there
/// were no candidates).
pub fn evaluate<'a, I>(query: Point, candidates: I) -> Verdict
where
    I: IntoIterator<Item = &'a Zone>,
{
    let mut nearest: Option<(&Zone, f64)> = None;

    for zone in candidates {
        let distance = haversine_km(query, zone.center);

        if distance <= zone.radius_km {
            return Verdict::Restricted {
                zone: zone.name.clone(),
                description: zone.description.clone(),
                distance_km: distance,
            };
        }

        // NaN never compares less, so it can never become the nearest zone
        let closer = match nearest {
            Some((_, best)) => distance < best,
            None => distance < f64::INFINITY,
        };
        if closer {
            nearest = Some((zone, distance));
        }
    }

    Verdict::Unrestricted {
        nearest: nearest.map(|(zone, distance_km)| NearestZone {
            zone: zone.name.clone(),
            distance_km,
        }),
    }
}
