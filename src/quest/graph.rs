//! Append-only registries of every region and portal in the world.

use std::collections::HashMap;

use log::{debug, info};

use super::dictionary::Dictionary;
use super::errors::QuestError;
use super::region::{Portal, PortalId, Region, RegionId};
use super::seed_loader::{MapSeed, ThingSeed};
use super::types::Thing;

/// All regions, resolvable by long name or short code
#[derive(Debug, Clone, Default)]
pub struct Regions {
    regions: Vec<Region>,
    region_lookup: HashMap<String, RegionId>,
}

impl Regions {
    /// Register a region under both of its aliases
    pub fn add_region(&mut self, name: &str, code: &str) -> Result<RegionId, QuestError> {
        let id = self.regions.len();
        let region = Region::new(id, name, code);
        for alias in region.aliases() {
            if self.region_lookup.contains_key(alias) {
                return Err(QuestError::DuplicateAlias(alias.to_string()));
            }
        }
        for alias in region.aliases() {
            self.region_lookup.insert(alias.to_string(), id);
        }
        debug!("Region registered: {}", region);
        self.regions.push(region);
        Ok(id)
    }

    /// Resolve a region by any alias, ignoring case
    pub fn get(&self, key: &str) -> Option<&Region> {
        self.region_lookup
            .get(&key.trim().to_uppercase())
            .map(|&id| &self.regions[id])
    }

    pub fn id_of(&self, key: &str) -> Result<RegionId, QuestError> {
        self.get(key)
            .map(Region::id)
            .ok_or_else(|| QuestError::UnknownRegion(key.to_string()))
    }

    pub fn by_id(&self, id: RegionId) -> Result<&Region, QuestError> {
        self.regions
            .get(id)
            .ok_or_else(|| QuestError::UnknownRegion(format!("#{}", id)))
    }

    pub fn by_id_mut(&mut self, id: RegionId) -> Result<&mut Region, QuestError> {
        self.regions
            .get_mut(id)
            .ok_or_else(|| QuestError::UnknownRegion(format!("#{}", id)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// All portals, in construction order
#[derive(Debug, Clone, Default)]
pub struct Portals {
    portals: Vec<Portal>,
}

impl Portals {
    pub fn get(&self, id: PortalId) -> Option<&Portal> {
        self.portals.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Portal> {
        self.portals.iter()
    }

    pub fn len(&self) -> usize {
        self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portals.is_empty()
    }
}

/// The map: regions plus the portals joining them.
///
/// Topology is fixed once construction finishes; only the inventories held
/// by each region change afterwards.
#[derive(Debug, Clone, Default)]
pub struct RegionGraph {
    pub regions: Regions,
    pub portals: Portals,
}

impl RegionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the whole map from a seed table
    pub fn from_seed(seed: &MapSeed) -> Result<Self, QuestError> {
        let mut graph = Self::new();
        for region in &seed.regions {
            let id = graph.regions.add_region(&region.name, &region.code)?;
            if let Some(monument) = &region.monument {
                graph.regions.by_id_mut(id)?.set_monument(Thing::new(monument));
            }
        }
        for portal in &seed.portals {
            graph.add_portal(&portal.from, &portal.to, portal.cost)?;
        }
        for thing in &seed.things {
            graph.place_thing(thing)?;
        }
        info!(
            "Map built: {} regions, {} portals, {} things placed",
            graph.regions.len(),
            graph.portals.len(),
            seed.things.len()
        );
        Ok(graph)
    }

    /// Join two regions and register the portal at both ends
    pub fn add_portal(&mut self, from: &str, to: &str, cost: u32) -> Result<PortalId, QuestError> {
        let a = self.regions.id_of(from)?;
        let b = self.regions.id_of(to)?;
        let id = self.portals.len();

        let portal = Portal::new(id, self.regions.by_id(a)?, self.regions.by_id(b)?, cost);
        debug!("{}", portal);

        let to_b = self.regions.by_id(b)?.aliases().map(str::to_string);
        let to_a = self.regions.by_id(a)?.aliases().map(str::to_string);
        self.regions.by_id_mut(a)?.portals.add(id, &to_b);
        self.regions.by_id_mut(b)?.portals.add(id, &to_a);

        self.portals.portals.push(portal);
        Ok(id)
    }

    /// Put a seeded thing on a region's floor
    pub fn place_thing(&mut self, seed: &ThingSeed) -> Result<(), QuestError> {
        let thing = seed.to_thing()?;
        let region = self.regions.by_id_mut(self.regions.id_of(&seed.region)?)?;
        debug!("Placing {} in {}", thing, region);
        region.inventory.add(thing);
        Ok(())
    }

    /// Look up a portal by id. A dangling id is a construction defect.
    pub fn portal(&self, id: PortalId) -> Result<&Portal, QuestError> {
        self.portals
            .get(id)
            .ok_or(QuestError::UnknownPortal(id))
    }
}

/// The map together with the word list of recognised things
#[derive(Debug, Clone)]
pub struct World {
    pub graph: RegionGraph,
    pub dictionary: Dictionary,
}

impl World {
    pub fn new(graph: RegionGraph, dictionary: Dictionary) -> Self {
        Self { graph, dictionary }
    }

    pub fn from_seed(seed: &MapSeed, dictionary: Dictionary) -> Result<Self, QuestError> {
        Ok(Self::new(RegionGraph::from_seed(seed)?, dictionary))
    }

    pub fn is_valid_thing(&self, word: &str) -> bool {
        self.dictionary.is_valid_thing(word)
    }

    pub fn description(&self) -> String {
        format!(
            "World has {} regions, {} portals, and {} strings recognised as valid things",
            self.graph.regions.len(),
            self.graph.portals.len(),
            self.dictionary.len()
        )
    }
}
