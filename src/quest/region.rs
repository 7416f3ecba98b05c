//! Regions, the portals between them, and the toll rule.
//!
//! Regions and portals live in the [`RegionGraph`](super::graph::RegionGraph)
//! registries and refer to each other by index. A portal is registered in the
//! outgoing set of both endpoints when it is built, so a single edge serves
//! travel in either direction.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::errors::QuestError;
use super::graph::RegionGraph;
use super::inventory::Inventory;
use super::player::Player;
use super::types::Thing;

pub type RegionId = usize;
pub type PortalId = usize;

/// Listed toll that a carried gem discounts.
pub const GEM_DISCOUNT_TOLL: u32 = 3;
/// What that toll becomes while a gem is at hand.
pub const GEM_DISCOUNTED_COST: u32 = 1;

/// A named location with its own floor inventory.
#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    name: String,
    code: String,
    pub portals: RegionPortals,
    pub monument: Option<Thing>,
    pub inventory: Inventory,
}

impl Region {
    pub fn new(id: RegionId, name: &str, code: &str) -> Self {
        Self {
            id,
            name: name.trim().to_uppercase(),
            code: code.trim().to_uppercase(),
            portals: RegionPortals::default(),
            monument: None,
            inventory: Inventory::new(),
        }
    }

    /// Attach a display-only monument. Monuments never move.
    pub fn set_monument(&mut self, monument: Thing) {
        self.monument = Some(monument.immovable());
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Both keys this region answers to.
    pub fn aliases(&self) -> [&str; 2] {
        [&self.name, &self.code]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Outgoing portals of one region, keyed by every alias of the far end.
#[derive(Debug, Clone, Default)]
pub struct RegionPortals {
    portals: Vec<PortalId>,
    destination_lookup: HashMap<String, PortalId>,
}

impl RegionPortals {
    pub fn add<S: AsRef<str>>(&mut self, portal: PortalId, destination_aliases: &[S]) {
        self.portals.push(portal);
        for alias in destination_aliases {
            self.destination_lookup
                .insert(alias.as_ref().to_string(), portal);
        }
    }

    /// Portal leading to the region called `key`, by long name or code,
    /// ignoring case.
    pub fn get(&self, key: &str) -> Option<PortalId> {
        self.destination_lookup
            .get(&key.trim().to_uppercase())
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PortalId> + '_ {
        self.portals.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portals.is_empty()
    }
}

/// What a portal needs to know about whoever is crossing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelerSnapshot {
    pub region: RegionId,
    pub coins: u32,
    /// A gem is carried or lies on the current floor.
    pub has_gem: bool,
}

/// A bidirectional toll edge between two regions.
#[derive(Debug, Clone)]
pub struct Portal {
    id: PortalId,
    region_a: RegionId,
    region_b: RegionId,
    cost: u32,
    label: String,
}

impl Portal {
    pub(crate) fn new(id: PortalId, region_a: &Region, region_b: &Region, cost: u32) -> Self {
        Self {
            id,
            region_a: region_a.id(),
            region_b: region_b.id(),
            cost,
            label: format!("{} <-> {}", region_a, region_b),
        }
    }

    pub fn id(&self) -> PortalId {
        self.id
    }

    pub fn endpoints(&self) -> (RegionId, RegionId) {
        (self.region_a, self.region_b)
    }

    pub fn listed_cost(&self) -> u32 {
        self.cost
    }

    /// Effective toll for this traveler. Evaluated fresh on every call since
    /// gem possession changes from turn to turn.
    pub fn cost(&self, traveler: &TravelerSnapshot) -> u32 {
        if self.cost == GEM_DISCOUNT_TOLL && traveler.has_gem {
            GEM_DISCOUNTED_COST
        } else {
            self.cost
        }
    }

    /// The endpoint opposite `region`.
    pub fn destination_from(&self, region: RegionId) -> Result<RegionId, QuestError> {
        if region == self.region_a {
            Ok(self.region_b)
        } else if region == self.region_b {
            Ok(self.region_a)
        } else {
            Err(QuestError::PortalNotConnected {
                portal: self.label.clone(),
                region: region.to_string(),
            })
        }
    }

    /// Move `you` across if the toll can be paid.
    ///
    /// Coins and location change together or not at all. Returns the toll
    /// that was charged.
    pub fn transit(&self, you: &mut Player, graph: &RegionGraph) -> Result<u32, QuestError> {
        let destination = self.destination_from(you.region())?;
        let traveler = you.snapshot(graph)?;
        let cost = self.cost(&traveler);

        if traveler.coins < cost {
            let destination = graph.regions.by_id(destination)?;
            debug!(
                "Transit refused across {}: cost {} coins {}",
                self.label, cost, traveler.coins
            );
            return Err(QuestError::CannotAfford {
                destination: destination.to_string(),
                cost,
                coins: traveler.coins,
            });
        }

        you.relocate(destination, cost);
        debug!("Transit across {} for {} coins", self.label, cost);
        Ok(cost)
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Portal between {} costing {}", self.label, self.cost)
    }
}
