//! Geodesy Primitives
//!
//! Latitude/longitude points on a spherical Earth and the haversine
//! great-circle distance between them.
//!
//! All angles are in degrees, all distances in kilometers.
//!
//! # Example
//!
//! ```rust
//! use zonecheck_core::geo::{format_km, Point};
//!
//! let mumbai = Point::new(19.0760, 72.8777);
//! let delhi = Point::new(28.6139, 77.2090);
//!
//! let km = mumbai.distance_km(&delhi);
//! assert_eq!(format_km(km), "1148.09");
//! ```

mod distance;
mod point;

pub use distance::*;
pub use point::*;
