//! Map seed data: the region, portal and thing tables a world is built from.
//!
//! The built-in map lives in [`state`](super::state); this module defines the
//! table format and loads alternative maps from JSON so a different world can
//! be played without recompiling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::QuestError;
use super::types::{Thing, ThingKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSeed {
    pub regions: Vec<RegionSeed>,
    pub portals: Vec<PortalSeed>,
    #[serde(default)]
    pub things: Vec<ThingSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSeed {
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monument: Option<String>,
}

/// A portal between two regions, named by either alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalSeed {
    pub from: String,
    pub to: String,
    pub cost: u32,
}

/// A thing placed on a region's floor at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingSeed {
    pub region: String,
    pub names: Vec<String>,
    #[serde(default)]
    pub strings: Vec<String>,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub kind: ThingKind,
}

impl ThingSeed {
    pub fn to_thing(&self) -> Result<Thing, QuestError> {
        let (first, rest) = self.names.split_first().ok_or_else(|| {
            QuestError::InvalidSeed(format!("thing seeded in {} has no names", self.region))
        })?;

        let mut thing = Thing::new(first).with_kind(self.kind.clone());
        for alias in rest {
            thing = thing.with_alias(alias);
        }
        if let ThingKind::Paper { runes, .. } = &self.kind {
            for rune in runes.split_whitespace() {
                thing = thing.with_string(rune);
            }
        }
        for string in &self.strings {
            thing = thing.with_string(string);
        }
        if self.fixed {
            thing = thing.immovable();
        }
        Ok(thing)
    }
}

impl MapSeed {
    pub fn region(mut self, name: &str, code: &str) -> Self {
        self.regions.push(RegionSeed {
            name: name.to_string(),
            code: code.to_string(),
            monument: None,
        });
        self
    }

    pub fn portal(mut self, from: &str, to: &str, cost: u32) -> Self {
        self.portals.push(PortalSeed {
            from: from.to_string(),
            to: to.to_string(),
            cost,
        });
        self
    }

    pub fn thing(mut self, seed: ThingSeed) -> Self {
        self.things.push(seed);
        self
    }
}

/// Load a map from a JSON file shaped like [`MapSeed`]
pub fn load_map_from_json<P: AsRef<Path>>(path: P) -> Result<MapSeed, QuestError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let seed: MapSeed = serde_json::from_str(&contents).map_err(|e| {
        QuestError::InvalidSeed(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    Ok(seed)
}
