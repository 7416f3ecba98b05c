//! "You": the single actor moving through the world.
//!
//! The player owns its location, coins, carried inventory and the history of
//! every command that succeeded. All mutation of the world on a turn goes
//! through the operations here.

use std::fmt;

use log::{debug, info};

use super::commands::QuestCommand;
use super::errors::QuestError;
use super::graph::{RegionGraph, World};
use super::inventory::Inventory;
use super::region::{RegionId, TravelerSnapshot};
use super::types::{InventoryResult, ThingId};

/// What a successful command did, for reporting back to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved { destination: String, cost: u32 },
    Took(String),
    Left(String),
    Quit { history: Vec<String> },
    AlreadyTerminated,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Moved { destination, cost } => {
                write!(f, "You pay {} and arrive in {}.", cost, destination)
            }
            Outcome::Took(name) => write!(f, "You take the {}.", name),
            Outcome::Left(name) => write!(f, "You leave the {} here.", name),
            Outcome::Quit { history } => {
                writeln!(f, "Your quest, step by step:")?;
                f.write_str(&history.join("\n"))
            }
            Outcome::AlreadyTerminated => f.write_str("Your quest is already over."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    region: RegionId,
    coins: u32,
    inventory: Inventory,
    command_history: Vec<String>,
    quit: bool,
}

impl Player {
    pub fn new(region: RegionId, coins: u32) -> Self {
        Self {
            region,
            coins,
            inventory: Inventory::new(),
            command_history: Vec::new(),
            quit: false,
        }
    }

    pub fn region(&self) -> RegionId {
        self.region
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn history(&self) -> &[String] {
        &self.command_history
    }

    /// Turn counter shown in the prompt
    pub fn step(&self) -> usize {
        self.command_history.len()
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// A gem is carried, or lies on the floor of the current region
    pub fn has_gem(&self, graph: &RegionGraph) -> Result<bool, QuestError> {
        if self.inventory.has_gem() {
            return Ok(true);
        }
        Ok(graph.regions.by_id(self.region)?.inventory.has_gem())
    }

    pub fn snapshot(&self, graph: &RegionGraph) -> Result<TravelerSnapshot, QuestError> {
        Ok(TravelerSnapshot {
            region: self.region,
            coins: self.coins,
            has_gem: self.has_gem(graph)?,
        })
    }

    /// Only [`Portal::transit`](super::region::Portal::transit) calls this,
    /// after checking the toll can be paid.
    pub(crate) fn relocate(&mut self, destination: RegionId, cost: u32) {
        self.coins -= cost;
        self.region = destination;
    }

    fn ensure_active(&self) -> Result<(), QuestError> {
        if self.quit {
            Err(QuestError::Terminated)
        } else {
            Ok(())
        }
    }

    fn record(&mut self, command: QuestCommand) {
        self.command_history.push(command.to_string());
    }

    /// Travel through the portal leading to `key` (a region name or code)
    pub fn go(&mut self, graph: &RegionGraph, key: &str) -> Result<Outcome, QuestError> {
        self.ensure_active()?;
        let key = key.trim().to_uppercase();
        let here = graph.regions.by_id(self.region)?;
        let portal_id = here
            .portals
            .get(&key)
            .ok_or_else(|| QuestError::NoSuchRoute(key.clone()))?;

        let portal = graph.portal(portal_id)?;
        let cost = portal.transit(self, graph)?;
        let destination = graph.regions.by_id(self.region)?.to_string();

        self.record(QuestCommand::Go(key));
        Ok(Outcome::Moved { destination, cost })
    }

    /// Pick up the single thing on the floor called `alias`
    pub fn take(&mut self, world: &mut World, alias: &str) -> Result<Outcome, QuestError> {
        self.ensure_active()?;
        let floor = &mut world.graph.regions.by_id_mut(self.region)?.inventory;

        let id = match floor.get(alias).as_slice() {
            [thing] => thing.id(),
            [] if world.dictionary.is_valid_thing(alias) => {
                return Err(QuestError::NoneHere(alias.to_string()))
            }
            [] => return Err(QuestError::NothingToTake(alias.to_string())),
            many => {
                return Err(QuestError::Ambiguous {
                    alias: alias.to_string(),
                    count: many.len(),
                })
            }
        };

        let thing = transfer(floor, &mut self.inventory, id)?;
        debug!("Took {} ({} coins, {} carried)", thing, self.coins, self.inventory.len());

        self.record(QuestCommand::Take(alias.to_string()));
        Ok(Outcome::Took(thing))
    }

    /// Put down the single carried thing called `alias`
    pub fn leave(&mut self, world: &mut World, alias: &str) -> Result<Outcome, QuestError> {
        self.ensure_active()?;
        let floor = &mut world.graph.regions.by_id_mut(self.region)?.inventory;

        let id = match self.inventory.get(alias).as_slice() {
            [thing] => thing.id(),
            [] => return Err(QuestError::NothingToLeave(alias.to_string())),
            many => {
                return Err(QuestError::Ambiguous {
                    alias: alias.to_string(),
                    count: many.len(),
                })
            }
        };

        let thing = transfer(&mut self.inventory, floor, id)?;
        debug!("Left {} ({} carried)", thing, self.inventory.len());

        self.record(QuestCommand::Leave(alias.to_string()));
        Ok(Outcome::Left(thing))
    }

    /// End the quest. Quitting twice is harmless.
    pub fn quit(&mut self) -> Outcome {
        if self.quit {
            return Outcome::AlreadyTerminated;
        }
        self.quit = true;
        self.record(QuestCommand::Quit);
        info!("Quest ended after {} commands", self.command_history.len());
        Outcome::Quit {
            history: self.command_history.clone(),
        }
    }

    /// Every command that is legal right now
    pub fn available_commands(&self, graph: &RegionGraph) -> Result<Vec<QuestCommand>, QuestError> {
        let here = graph.regions.by_id(self.region)?;
        let mut commands = Vec::new();

        for portal_id in here.portals.iter() {
            let destination = graph.portal(portal_id)?.destination_from(self.region)?;
            let code = graph.regions.by_id(destination)?.code();
            commands.push(QuestCommand::Go(code.to_string()));
        }
        for thing in self.inventory.things() {
            commands.push(QuestCommand::Leave(thing.name().to_string()));
        }
        for thing in here.inventory.things().iter().filter(|t| t.is_movable()) {
            commands.push(QuestCommand::Take(thing.name().to_string()));
        }
        Ok(commands)
    }

    /// Everything the player can see, including the live cost of each portal
    pub fn description(&self, graph: &RegionGraph) -> Result<String, QuestError> {
        let here = graph.regions.by_id(self.region)?;
        let traveler = self.snapshot(graph)?;

        let mut portal_descriptions = Vec::new();
        for portal_id in here.portals.iter() {
            let portal = graph.portal(portal_id)?;
            let destination = graph.regions.by_id(portal.destination_from(self.region)?)?;
            let cost = portal.cost(&traveler);
            let listed = portal.listed_cost();
            if cost != listed {
                portal_descriptions.push(format!(
                    "{} at a special cost of {} (normally {})",
                    destination, cost, listed
                ));
            } else {
                portal_descriptions.push(format!("{} at a cost of {}", destination, cost));
            }
        }

        let mut description = String::from("You");
        if self.coins > 0 {
            description.push_str(&format!(", with {} coins", self.coins));
        } else {
            description.push_str(", devoid of coins!");
        }
        description.push_str(&format!(" in the region of {}", here));
        description.push_str(&format!(
            " with portals to:\n{}",
            portal_descriptions.join("\n")
        ));
        if !self.inventory.is_empty() {
            description.push_str(&format!("\nCarrying: {}", self.inventory));
        }
        if let Some(monument) = &here.monument {
            description.push_str(&format!("\nThere is a monument to {} here!!!", monument));
        }
        if !here.inventory.is_empty() {
            description.push_str(&format!("\nYou see some 'things': {}", here.inventory));
        }
        Ok(description)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("You")
    }
}

/// Move one thing between inventories. Either both sides change or neither.
fn transfer(from: &mut Inventory, to: &mut Inventory, id: ThingId) -> Result<String, QuestError> {
    match from.remove(id)? {
        InventoryResult::Removed(thing) => {
            let name = thing.name().to_string();
            to.add(thing);
            Ok(name)
        }
        InventoryResult::NotMovable { name } => Err(QuestError::NotMovable(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::dictionary::Dictionary;
    use crate::quest::seed_loader::{MapSeed, ThingSeed};
    use crate::quest::types::{Thing, ThingKind};

    fn thing_seed(region: &str, names: &[&str]) -> ThingSeed {
        ThingSeed {
            region: region.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            strings: Vec::new(),
            fixed: false,
            kind: ThingKind::Plain,
        }
    }

    fn test_world() -> World {
        let seed = MapSeed::default()
            .region("YE OLD HOME TOWN", "A")
            .region("TRANSITION MEADOW", "B")
            .region("OPEN ZONE", "C")
            .portal("A", "B", 1)
            .portal("A", "C", 3)
            .thing(thing_seed("A", &["RUBY"]))
            .thing(thing_seed("A", &["LANTERN", "LAMP"]))
            .thing(ThingSeed {
                kind: ThingKind::Person { magic: None },
                ..thing_seed("A", &["PHRONTIERSMAN", "FIGURE"])
            });
        World::from_seed(&seed, Dictionary::from_words(["OCEAN"])).expect("world")
    }

    fn start(world: &World, coins: u32) -> Player {
        Player::new(world.graph.regions.id_of("A").unwrap(), coins)
    }

    #[test]
    fn test_go_debits_and_relocates() {
        let world = test_world();
        let mut you = start(&world, 15);

        let outcome = you.go(&world.graph, "B").unwrap();
        assert_eq!(
            outcome,
            Outcome::Moved {
                destination: "TRANSITION MEADOW (B)".to_string(),
                cost: 1
            }
        );
        assert_eq!(you.coins(), 14);
        assert_eq!(you.region(), world.graph.regions.id_of("B").unwrap());
        assert_eq!(you.history(), &["GB".to_string()]);
    }

    #[test]
    fn test_go_by_long_name() {
        let world = test_world();
        let mut you = start(&world, 15);
        you.go(&world.graph, "TRANSITION MEADOW").unwrap();
        assert_eq!(you.region(), world.graph.regions.id_of("B").unwrap());
    }

    #[test]
    fn test_go_ignores_case() {
        let world = test_world();
        let mut you = start(&world, 15);
        you.go(&world.graph, " b ").unwrap();
        assert_eq!(you.region(), world.graph.regions.id_of("B").unwrap());
        assert_eq!(you.history(), &["GB".to_string()]);
    }

    #[test]
    fn test_dangling_region_is_internal_error() {
        let world = test_world();
        let you = Player::new(99, 15);
        let err = you.snapshot(&world.graph).unwrap_err();
        assert!(matches!(err, QuestError::UnknownRegion(_)));
        assert!(!err.is_user_error());
        assert!(you.description(&world.graph).is_err());
    }

    #[test]
    fn test_go_nowhere() {
        let world = test_world();
        let mut you = start(&world, 15);
        let err = you.go(&world.graph, "Z").unwrap_err();
        assert!(matches!(err, QuestError::NoSuchRoute(ref k) if k == "Z"));
        assert_eq!(you.coins(), 15);
        assert!(you.history().is_empty());
    }

    #[test]
    fn test_gem_on_floor_discounts() {
        let world = test_world();
        // The ruby lies on the floor at A, which counts as at hand
        let mut you = start(&world, 1);
        you.go(&world.graph, "C").unwrap();
        assert_eq!(you.coins(), 0);
    }

    #[test]
    fn test_cannot_afford_leaves_state() {
        let world = test_world();
        let mut you = start(&world, 0);
        let err = you.go(&world.graph, "B").unwrap_err();
        assert!(matches!(err, QuestError::CannotAfford { cost: 1, coins: 0, .. }));
        assert_eq!(you.region(), world.graph.regions.id_of("A").unwrap());
        assert!(you.history().is_empty());
    }

    #[test]
    fn test_take_and_leave_transfer() {
        let mut world = test_world();
        let mut you = start(&world, 15);
        let a = you.region();

        assert_eq!(you.take(&mut world, "LAMP").unwrap(), Outcome::Took("LANTERN".into()));
        assert_eq!(you.inventory().len(), 1);
        assert!(world.graph.regions.by_id(a).unwrap().inventory.get("LAMP").is_empty());

        assert_eq!(you.leave(&mut world, "LANTERN").unwrap(), Outcome::Left("LANTERN".into()));
        assert_eq!(you.inventory().len(), 0);
        assert_eq!(world.graph.regions.by_id(a).unwrap().inventory.get("LAMP").len(), 1);
        assert_eq!(you.history(), &["T LAMP".to_string(), "L LANTERN".to_string()]);
    }

    #[test]
    fn test_take_person_refused() {
        let mut world = test_world();
        let mut you = start(&world, 15);
        let err = you.take(&mut world, "FIGURE").unwrap_err();
        assert!(matches!(err, QuestError::NotMovable(ref n) if n == "PHRONTIERSMAN"));
        assert!(you.inventory().is_empty());
        assert!(you.history().is_empty());
    }

    #[test]
    fn test_take_missing_and_known_words() {
        let mut world = test_world();
        let mut you = start(&world, 15);
        assert!(matches!(
            you.take(&mut world, "SWORD"),
            Err(QuestError::NothingToTake(_))
        ));
        assert!(matches!(
            you.take(&mut world, "OCEAN"),
            Err(QuestError::NoneHere(_))
        ));
        assert!(matches!(
            you.leave(&mut world, "RUBY"),
            Err(QuestError::NothingToLeave(_))
        ));
    }

    #[test]
    fn test_take_ambiguous() {
        let mut world = test_world();
        let a = world.graph.regions.id_of("A").unwrap();
        world
            .graph
            .regions
            .by_id_mut(a)
            .unwrap()
            .inventory
            .add(Thing::new("LAMP"));
        let mut you = start(&world, 15);

        let err = you.take(&mut world, "LAMP").unwrap_err();
        assert!(matches!(err, QuestError::Ambiguous { count: 2, .. }));
        assert!(you.inventory().is_empty());
    }

    #[test]
    fn test_quit_is_idempotent() {
        let world = test_world();
        let mut you = start(&world, 15);
        you.go(&world.graph, "B").unwrap();

        assert_eq!(
            you.quit(),
            Outcome::Quit {
                history: vec!["GB".to_string(), "Q".to_string()]
            }
        );
        assert!(you.has_quit());
        assert_eq!(you.quit(), Outcome::AlreadyTerminated);
        assert_eq!(you.step(), 2);
        assert!(matches!(you.go(&world.graph, "A"), Err(QuestError::Terminated)));
    }

    #[test]
    fn test_available_commands() {
        let mut world = test_world();
        let mut you = start(&world, 15);
        you.take(&mut world, "RUBY").unwrap();

        let commands: Vec<String> = you
            .available_commands(&world.graph)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(commands, vec!["GB", "GC", "L RUBY", "T LANTERN"]);
    }

    #[test]
    fn test_description() {
        let mut world = test_world();
        let mut you = start(&world, 15);
        you.take(&mut world, "RUBY").unwrap();

        let description = you.description(&world.graph).unwrap();
        assert_eq!(
            description,
            "You, with 15 coins in the region of YE OLD HOME TOWN (A) with portals to:\n\
             TRANSITION MEADOW (B) at a cost of 1\n\
             OPEN ZONE (C) at a special cost of 1 (normally 3)\n\
             Carrying: RUBY\n\
             You see some 'things': LANTERN\nLAMP\nPHRONTIERSMAN\nFIGURE"
        );
    }

    #[test]
    fn test_description_without_coins() {
        let world = test_world();
        let you = start(&world, 0);
        let description = you.description(&world.graph).unwrap();
        assert!(description.starts_with("You, devoid of coins! in the region of"));
    }
}
