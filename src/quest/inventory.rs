//! Alias-indexed inventory shared by the player and every region floor
use std::collections::HashMap;

use log::debug;

use super::errors::QuestError;
use super::types::{is_gem, is_zodiac, InventoryResult, Thing, ThingId};

/// Rendered in place of an empty listing.
pub const EMPTY_INVENTORY: &str = "no things or strings";

/// An ordered bag of things, indexed by every alias and matched string.
///
/// Each thing is owned by exactly one inventory; moving it elsewhere goes
/// through [`Inventory::remove`] which hands back ownership.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    things: Vec<Thing>,
    names_to_things: HashMap<String, Vec<ThingId>>,
    strings_to_things: HashMap<String, Vec<ThingId>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a thing and index all of its aliases and strings
    pub fn add(&mut self, thing: Thing) {
        let id = thing.id();
        index(&mut self.names_to_things, thing.names(), id);
        index(&mut self.strings_to_things, thing.strings(), id);
        debug!("Inventory add: {} ({} things)", thing.name(), self.things.len() + 1);
        self.things.push(thing);
    }

    /// Every thing carrying `alias`, in insertion order. Empty if none match.
    pub fn get(&self, alias: &str) -> Vec<&Thing> {
        self.names_to_things
            .get(alias)
            .map(|ids| ids.iter().filter_map(|id| self.thing(*id)).collect())
            .unwrap_or_default()
    }

    pub fn thing(&self, id: ThingId) -> Option<&Thing> {
        self.things.iter().find(|t| t.id() == id)
    }

    /// Remove a thing, returning ownership of it.
    ///
    /// Fixed things are left in place and reported as
    /// [`InventoryResult::NotMovable`]. A missing index entry means the
    /// inventory is corrupt and is returned as an error.
    pub fn remove(&mut self, id: ThingId) -> Result<InventoryResult, QuestError> {
        let position = self
            .things
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| QuestError::MissingThing(id.to_string()))?;

        let thing = &self.things[position];
        if !thing.is_movable() {
            debug!("Inventory remove refused: {} is fixed", thing.name());
            return Ok(InventoryResult::NotMovable {
                name: thing.name().to_string(),
            });
        }

        // Verify before purging so a failure leaves the inventory untouched
        verify_indexed(&self.names_to_things, thing.names(), id)?;
        verify_indexed(&self.strings_to_things, thing.strings(), id)?;

        let thing = self.things.remove(position);
        purge(&mut self.names_to_things, thing.names(), id);
        purge(&mut self.strings_to_things, thing.strings(), id);
        debug!("Inventory remove: {} ({} things left)", thing.name(), self.things.len());
        Ok(InventoryResult::Removed(thing))
    }

    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    pub fn len(&self) -> usize {
        self.things.len()
    }

    pub fn thing_names(&self) -> impl Iterator<Item = &str> {
        self.things
            .iter()
            .flat_map(|t| t.names().iter().map(String::as_str))
    }

    pub fn string_names(&self) -> impl Iterator<Item = &str> {
        self.things
            .iter()
            .flat_map(|t| t.strings().iter().map(String::as_str))
    }

    /// Aliases first, then matched strings, each in insertion order
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.thing_names().chain(self.string_names())
    }

    pub fn is_empty(&self) -> bool {
        self.all_names().next().is_none()
    }

    pub fn has_gem(&self) -> bool {
        self.all_names().any(is_gem)
    }

    pub fn has_zodiac_sign(&self) -> bool {
        self.all_names().any(is_zodiac)
    }

    /// True if `alias` is currently indexed
    pub fn is_indexed(&self, alias: &str) -> bool {
        self.names_to_things
            .get(alias)
            .is_some_and(|ids| !ids.is_empty())
    }
}

/// An alias repeated on one thing still maps to it once
fn index(index: &mut HashMap<String, Vec<ThingId>>, keys: &[String], id: ThingId) {
    for key in keys {
        let ids = index.entry(key.clone()).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
}

fn verify_indexed(
    index: &HashMap<String, Vec<ThingId>>,
    keys: &[String],
    id: ThingId,
) -> Result<(), QuestError> {
    for key in keys {
        if !index.get(key).is_some_and(|ids| ids.contains(&id)) {
            return Err(QuestError::IndexCorruption(key.clone()));
        }
    }
    Ok(())
}

fn purge(index: &mut HashMap<String, Vec<ThingId>>, keys: &[String], id: ThingId) {
    for key in keys {
        if let Some(ids) = index.get_mut(key) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                index.remove(key);
            }
        }
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_INVENTORY);
        }
        let names: Vec<&str> = self.all_names().collect();
        f.write_str(&names.join("\n"))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
