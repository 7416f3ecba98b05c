//! Zodiac quest world engine.
//! Regions joined by toll portals, alias-indexed inventories, the single
//! player "You", and the line-oriented command interpreter that drives them.

pub mod commands;
pub mod dictionary;
pub mod errors;
pub mod graph;
pub mod inventory;
pub mod player;
pub mod region;
pub mod seed_loader;
pub mod session;
pub mod state;
pub mod types;

pub use commands::{CommandInterpreter, QuestCommand, GO_CMD, LEAVE_CMD, QUIT_CMD, TAKE_CMD};
pub use dictionary::Dictionary;
pub use errors::QuestError;
pub use graph::{Portals, RegionGraph, Regions, World};
pub use inventory::{Inventory, EMPTY_INVENTORY};
pub use player::{Outcome, Player};
pub use region::{
    Portal, PortalId, Region, RegionId, RegionPortals, TravelerSnapshot, GEM_DISCOUNTED_COST,
    GEM_DISCOUNT_TOLL,
};
pub use seed_loader::{load_map_from_json, MapSeed, PortalSeed, RegionSeed, ThingSeed};
pub use session::GameSession;
pub use state::{canonical_map_seed, REQUIRED_START_REGION, STARTING_COINS};
pub use types::{is_gem, is_zodiac, InventoryResult, Thing, ThingId, ThingKind, GEMS, ZODIACS};
