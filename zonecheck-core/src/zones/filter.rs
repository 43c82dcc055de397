use super::zone::Zone;

/// Coarse candidate filter: a zone is a candidate when its city matches
/// OR its state matches.
///
/// Comparison is exact string equality, the same as the store lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFilter {
    pub city: String,
    pub state: String,
}

impl ZoneFilter {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        ZoneFilter {
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn matches(&self, zone: &Zone) -> bool {
        zone.city == self.city || zone.state == self.state
    }

    /// Keep only the matching zones, preserving order
    pub fn apply<'a, I>(&'a self, zones: I) -> impl Iterator<Item = &'a Zone> + 'a
    where
        I: IntoIterator<Item = &'a Zone>,
        I::IntoIter: 'a,
    {
        zones.into_iter().filter(move |zone| self.matches(zone))
    }
}
