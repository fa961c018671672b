use super::{DomainName, Zone, ZoneError};
use rustc_hash::FxHashMap;

/// Immutable set of configured zones keyed by apex name.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    zones: FxHashMap<DomainName, Zone>,
}

impl ZoneTable {
    pub fn new(zones: impl IntoIterator<Item = Zone>) -> Result<Self, ZoneError> {
        let mut map = FxHashMap::default();
        for zone in zones {
            let key = zone.name().clone();
            if map.contains_key(&key) {
                return Err(ZoneError::Duplicate(key.to_string()));
            }
            map.insert(key, zone);
        }
        Ok(Self { zones: map })
    }

    /// Longest label-aligned suffix match of `name` against the configured zones.
    pub fn match_zone(&self, name: &DomainName) -> Option<&Zone> {
        let mut candidate = Some(name.clone());
        while let Some(current) = candidate {
            if let Some(zone) = self.get(&current) {
                return Some(zone);
            }
            candidate = current.parent();
        }
        None
    }

    pub fn get(&self, name: &DomainName) -> Option<&Zone> {
        self.zones.get(name)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
