//! Resource and tag vocabulary.
//!
//! Both are closed enums: requirements, behaviors, and triggered
//! abilities dispatch over them, and the ledger keys its counters by
//! `Resource`. New card content combines these, it does not extend them.

use serde::{Deserialize, Serialize};

/// A kind of player resource.
///
/// Every player has a stock (banked amount) and a production rate
/// (per-turn recurring income) for each resource kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    MegaCredits,
    Steel,
    Titanium,
    Plants,
    Energy,
    Heat,
}

impl Resource {
    /// All resource kinds, in display order.
    pub const ALL: [Resource; 6] = [
        Resource::MegaCredits,
        Resource::Steel,
        Resource::Titanium,
        Resource::Plants,
        Resource::Energy,
        Resource::Heat,
    ];
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::MegaCredits => "megacredits",
            Resource::Steel => "steel",
            Resource::Titanium => "titanium",
            Resource::Plants => "plants",
            Resource::Energy => "energy",
            Resource::Heat => "heat",
        };
        f.write_str(name)
    }
}

/// A category label attached to a card.
///
/// Tags are counted per player as cards enter the tableau; requirements
/// and triggered abilities match against them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Building,
    Space,
    Power,
    Science,
    Plant,
    Earth,
    City,
    Moon,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tag::Building => "building",
            Tag::Space => "space",
            Tag::Power => "power",
            Tag::Science => "science",
            Tag::Plant => "plant",
            Tag::Earth => "earth",
            Tag::City => "city",
            Tag::Moon => "moon",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_display() {
        assert_eq!(Resource::MegaCredits.to_string(), "megacredits");
        assert_eq!(Resource::Heat.to_string(), "heat");
    }

    #[test]
    fn test_resource_all_distinct() {
        for (i, a) in Resource::ALL.iter().enumerate() {
            for b in &Resource::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::Moon.to_string(), "moon");
        assert_eq!(Tag::Building.to_string(), "building");
    }

    #[test]
    fn test_resource_serialization() {
        let json = serde_json::to_string(&Resource::Energy).unwrap();
        let back: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Resource::Energy);
    }
}
