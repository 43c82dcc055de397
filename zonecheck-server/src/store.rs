//! Zone Store
//!
//! Supplies the candidate zones for a check. The handler only sees the
//! [`ZoneStore`] trait; the bundled implementation is an immutable
//! in-memory table loaded from a JSON file at startup.
//!
//! # File format
//!
//! A JSON array of zone rows:
//!
//! ```json
//! [
//!   {
//!     "zone_name": "Connaught Place",
//!     "description": "Central business district",
//!     "latitude": 28.6315,
//!     "longitude": 77.2167,
//!     "radius_km": 1.0,
//!     "city": "New Delhi",
//!     "state": "Delhi"
//!   }
//! ]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use zonecheck_core::geo::Point;
use zonecheck_core::zones::{Zone, ZoneFilter};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot parse zone table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid zone '{name}': {reason}")]
    InvalidZone { name: String, reason: String },

    /// Backend could not answer a lookup. The in-memory table never returns
    /// it; stores backed by a database or a remote service do.
    #[error("Zone store unavailable: {0}")]
    Unavailable(String),
}

/// Source of candidate zones
#[async_trait]
pub trait ZoneStore: Send + Sync {
    /// Zones whose city matches the filter's city OR whose state matches
    /// the filter's state, in store order
    async fn candidates(&self, filter: &ZoneFilter) -> Result<Vec<Zone>, StoreError>;
}

/// Read-only zone table held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryZoneStore {
    zones: Vec<Zone>,
}

impl MemoryZoneStore {
    /// Build a store, rejecting rows the engine could not sensibly evaluate
    pub fn new(zones: Vec<Zone>) -> Result<Self, StoreError> {
        for zone in &zones {
            check_zone(zone)?;
        }
        Ok(MemoryZoneStore { zones })
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let zones: Vec<Zone> = serde_json::from_str(json)?;
        Self::new(zones)
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[async_trait]
impl ZoneStore for MemoryZoneStore {
    async fn candidates(&self, filter: &ZoneFilter) -> Result<Vec<Zone>, StoreError> {
        Ok(filter.apply(&self.zones).cloned().collect())
    }
}

fn check_zone(zone: &Zone) -> Result<(), StoreError> {
    let invalid = |reason: String| StoreError::InvalidZone {
        name: zone.name.clone(),
        reason,
    };

    if !zone.radius_km.is_finite() || zone.radius_km < 0.0 {
        return Err(invalid(format!("radius {} km", zone.radius_km)));
    }
    Point::validated(zone.center.latitude, zone.center.longitude)
        .map_err(|e| invalid(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const TABLE: &str = r#"[
        {"zone_name": "Red Fort", "description": "Heritage site",
         "latitude": 28.6562, "longitude": 77.2410, "radius_km": 0.8,
         "city": "Delhi", "state": "Delhi"},
        {"zone_name": "Gateway", "description": "Harbour front",
         "latitude": 18.9220, "longitude": 72.8347, "radius_km": 0.5,
         "city": "Mumbai", "state": "Maharashtra"},
        {"zone_name": "Shaniwar Wada", "description": "Fort",
         "latitude": 18.5195, "longitude": 73.8553, "radius_km": 0.3,
         "city": "Pune", "state": "Maharashtra"}
    ]"#;

    fn names(zones: &[Zone]) -> Vec<&str> {
        zones.iter().map(|z| z.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_candidates_city_or_state() {
        let store = MemoryZoneStore::from_json(TABLE).unwrap();
        assert_eq!(store.len(), 3);

        let found = store
            .candidates(&ZoneFilter::new("Pune", "Maharashtra"))
            .await
            .unwrap();
        assert_eq!(names(&found), vec!["Gateway", "Shaniwar Wada"]);

        let found = store
            .candidates(&ZoneFilter::new("Delhi", "Nowhere"))
            .await
            .unwrap();
        assert_eq!(names(&found), vec!["Red Fort"]);

        let found = store
            .candidates(&ZoneFilter::new("Chennai", "Tamil Nadu"))
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();

        let store = MemoryZoneStore::load(file.path()).unwrap();
        let all = store
            .candidates(&ZoneFilter::new("Delhi", "Maharashtra"))
            .await
            .unwrap();
        assert_eq!(names(&all), vec!["Red Fort", "Gateway", "Shaniwar Wada"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match MemoryZoneStore::load(&path) {
            Err(StoreError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            MemoryZoneStore::from_json("{not json"),
            Err(StoreError::Parse(_))
        ));
        assert!(matches!(
            MemoryZoneStore::from_json(r#"[{"zone_name": "x"}]"#),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_negative_radius() {
        let json = r#"[{"zone_name": "Bad", "latitude": 0, "longitude": 0,
                        "radius_km": -1, "city": "C", "state": "S"}]"#;

        match MemoryZoneStore::from_json(json) {
            Err(StoreError::InvalidZone { name, .. }) => assert_eq!(name, "Bad"),
            other => panic!("expected InvalidZone, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_out_of_range_center() {
        let json = r#"[{"zone_name": "Far", "latitude": 95, "longitude": 0,
                        "radius_km": 1, "city": "C", "state": "S"}]"#;

        let err = MemoryZoneStore::from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid zone 'Far': latitude 95 out of range [-90, 90]"
        );
    }

    #[test]
    fn test_empty_table() {
        let store = MemoryZoneStore::from_json("[]").unwrap();
        assert!(store.is_empty());
    }
}
