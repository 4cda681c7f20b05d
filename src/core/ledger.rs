//! Per-player resource ledger.
//!
//! Tracks stock (banked amounts) and production (per-turn rates) for
//! each resource kind. The ledger is the only path by which any
//! component changes these counters; this single-writer discipline is
//! what makes ordered replay and auditing possible.
//!
//! Deltas may be negative. A production rate going negative is not
//! rejected here; floor enforcement is a caller/effect concern.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::resources::Resource;

/// Stock and production counters for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    stock: FxHashMap<Resource, i64>,
    production: FxHashMap<Resource, i64>,
}

impl Ledger {
    /// Create an empty ledger (all counters zero).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current banked amount of a resource.
    #[must_use]
    pub fn stock_of(&self, resource: Resource) -> i64 {
        self.stock.get(&resource).copied().unwrap_or(0)
    }

    /// Current production rate of a resource.
    #[must_use]
    pub fn production_of(&self, resource: Resource) -> i64 {
        self.production.get(&resource).copied().unwrap_or(0)
    }

    /// Add a (possibly negative) delta to a stock counter.
    ///
    /// Returns the new value.
    pub(crate) fn add_stock(&mut self, resource: Resource, delta: i64) -> i64 {
        let entry = self.stock.entry(resource).or_insert(0);
        *entry += delta;
        *entry
    }

    /// Add a (possibly negative) delta to a production counter.
    ///
    /// Returns the new value. Production may go negative.
    pub(crate) fn add_production(&mut self, resource: Resource, delta: i64) -> i64 {
        let entry = self.production.entry(resource).or_insert(0);
        *entry += delta;
        *entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_starts_at_zero() {
        let ledger = Ledger::new();
        for resource in Resource::ALL {
            assert_eq!(ledger.stock_of(resource), 0);
            assert_eq!(ledger.production_of(resource), 0);
        }
    }

    #[test]
    fn test_add_stock() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.add_stock(Resource::Steel, 4), 4);
        assert_eq!(ledger.add_stock(Resource::Steel, -1), 3);
        assert_eq!(ledger.stock_of(Resource::Steel), 3);
        assert_eq!(ledger.stock_of(Resource::Heat), 0);
    }

    #[test]
    fn test_production_may_go_negative() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.add_production(Resource::MegaCredits, -2), -2);
        assert_eq!(ledger.production_of(Resource::MegaCredits), -2);
    }

    #[test]
    fn test_counters_independent() {
        let mut ledger = Ledger::new();

        ledger.add_stock(Resource::Energy, 5);
        ledger.add_production(Resource::Energy, 2);

        assert_eq!(ledger.stock_of(Resource::Energy), 5);
        assert_eq!(ledger.production_of(Resource::Energy), 2);
    }

    #[test]
    fn test_ledger_serialization() {
        let mut ledger = Ledger::new();
        ledger.add_stock(Resource::Plants, 3);
        ledger.add_production(Resource::Heat, 1);

        let json = serde_json::to_string(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, back);
    }
}
