//! Platform-independent restricted zone decision engine.
//!
//! This crate answers one question: is a given coordinate inside one of a
//! set of circular restricted zones? It contains no I/O, no async code and
//! no logging, so it can be embedded in any server or tool that already has
//! the candidate zones at hand.
//!
//! # Modules
//!
//! - [`geo`]: points, great-circle distance, distance formatting
//! - [`zones`]: zone records and the coarse city/state pre-filter
//! - [`engine`]: the decision engine and its [`Verdict`](engine::Verdict)
//!
//! # Example
//!
//! ```
//! use zonecheck_core::engine::{evaluate, Verdict};
//! use zonecheck_core::geo::Point;
//! use zonecheck_core::zones::Zone;
//!
//! let delhi = Point::new(28.6139, 77.2090);
//! let zones = vec![Zone::new("Connaught Place", "Central Delhi", delhi, 1.0, "Delhi", "Delhi")];
//!
//! match evaluate(delhi, &zones) {
//!     Verdict::Restricted { zone, .. } => assert_eq!(zone, "Connaught Place"),
//!     Verdict::Unrestricted { .. } => unreachable!(),
//! }
//! ```

pub mod engine;
pub mod geo;
pub mod zones;

pub use engine::{evaluate, NearestZone, Verdict};
pub use geo::{haversine_km, Point, EARTH_RADIUS_KM};
pub use zones::{Zone, ZoneFilter};
