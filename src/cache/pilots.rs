use std::collections::{HashMap, HashSet};

use crate::models::Pilot;

/// Session cache of resolved pilot lists, keyed by ship name.
///
/// Entries are append-only: once a ship's pilots are stored they are never
/// invalidated for the lifetime of the session. The key is the ship name,
/// not the page, so the cache survives page navigation; ship names are
/// assumed unique across the whole catalog.
///
/// The cache also tracks which ships have a resolution in flight so that a
/// duplicate trigger attaches to the pending resolution instead of starting
/// a second fetch set.
#[derive(Debug, Default)]
pub struct PilotCache {
    resolved: HashMap<String, Vec<Pilot>>,
    in_flight: HashSet<String>,
}

impl PilotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached pilots for a ship, if a resolution has completed.
    pub fn get(&self, ship: &str) -> Option<&[Pilot]> {
        self.resolved.get(ship).map(|pilots| pilots.as_slice())
    }

    pub fn contains(&self, ship: &str) -> bool {
        self.resolved.contains_key(ship)
    }

    /// Whether a resolution for this ship is currently pending.
    pub fn is_resolving(&self, ship: &str) -> bool {
        self.in_flight.contains(ship)
    }

    /// Mark a resolution as started.
    ///
    /// Returns false when the ship is already resolved or already in flight,
    /// in which case the caller must not issue a new fetch set.
    pub fn begin(&mut self, ship: &str) -> bool {
        if self.resolved.contains_key(ship) || self.in_flight.contains(ship) {
            return false;
        }
        self.in_flight.insert(ship.to_string());
        true
    }

    /// Store a fully resolved pilot list and clear the in-flight marker.
    pub fn complete(&mut self, ship: String, pilots: Vec<Pilot>) {
        self.in_flight.remove(&ship);
        self.resolved.insert(ship, pilots);
    }

    /// Drop the in-flight marker after a failed resolution.
    /// Nothing is cached, so a later selection re-attempts every fetch.
    pub fn abandon(&mut self, ship: &str) {
        self.in_flight.remove(ship);
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pilot(name: &str) -> Pilot {
        Pilot {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_begin_then_complete_then_hit() {
        let mut cache = PilotCache::new();

        assert!(cache.begin("X-wing"));
        assert!(cache.is_resolving("X-wing"));
        assert!(!cache.contains("X-wing"));

        cache.complete("X-wing".to_string(), vec![pilot("Luke"), pilot("Biggs")]);
        assert!(!cache.is_resolving("X-wing"));
        assert!(cache.contains("X-wing"));

        let pilots = cache.get("X-wing").expect("entry should exist");
        assert_eq!(pilots.len(), 2);
        assert_eq!(pilots[0].name, "Luke");
        assert_eq!(pilots[1].name, "Biggs");

        // A resolved ship never starts another resolution
        assert!(!cache.begin("X-wing"));
    }

    #[test]
    fn test_duplicate_begin_while_in_flight_is_refused() {
        let mut cache = PilotCache::new();

        assert!(cache.begin("Millennium Falcon"));
        assert!(!cache.begin("Millennium Falcon"));
        assert!(cache.is_resolving("Millennium Falcon"));
    }

    #[test]
    fn test_abandon_allows_a_fresh_attempt() {
        let mut cache = PilotCache::new();

        assert!(cache.begin("TIE Fighter"));
        cache.abandon("TIE Fighter");

        // Nothing was cached and the in-flight marker is gone
        assert!(!cache.contains("TIE Fighter"));
        assert!(!cache.is_resolving("TIE Fighter"));
        assert!(cache.begin("TIE Fighter"));
    }

    #[test]
    fn test_empty_pilot_list_is_still_a_cache_entry() {
        let mut cache = PilotCache::new();

        assert!(cache.begin("Death Star"));
        cache.complete("Death Star".to_string(), vec![]);

        assert!(cache.contains("Death Star"));
        assert_eq!(cache.get("Death Star"), Some(&[][..]));
        assert!(!cache.begin("Death Star"));
    }
}
