//! Restricted Zones
//!
//! This module defines the circular zone records the engine checks against,
//! and the coarse city/state filter callers use to pick candidate zones
//! before running the engine.
//!
//! # Features
//!
//! - Circular zones (center + radius in kilometers)
//! - Inclusive boundary: a point on the circle is inside
//! - City OR state pre-filter
//!
//! # Example
//!
//! ```rust
//! use zonecheck_core::geo::Point;
//! use zonecheck_core::zones::{Zone, ZoneFilter};
//!
//! let zone = Zone::new(
//!     "India Gate",
//!     "War memorial perimeter",
//!     Point::new(28.6129, 77.2295),
//!     0.5,
//!     "New Delhi",
//!     "Delhi",
//! );
//!
//! let filter = ZoneFilter::new("Gurugram", "Delhi");
//! assert!(filter.matches(&zone));
//! assert!(zone.contains(&Point::new(28.6129, 77.2295)));
//! ```

mod filter;
mod zone;

pub use filter::*;
pub use zone::*;
