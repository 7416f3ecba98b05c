//! # Zodiacquest - a turn-based text adventure engine
//!
//! A single player, "You", travels a fixed map of named regions joined by
//! toll portals, collecting and leaving things along the way. Carrying a gem
//! makes the most expensive portals cheaper.
//!
//! ## Features
//!
//! - **Regions and portals**: every region answers to a long name and a short
//!   code; portals are bidirectional toll edges.
//! - **Inventories**: things are indexed by every alias and matched string;
//!   take and leave move a thing between exactly two inventories.
//! - **Command interpreter**: `G<region>`, `T <alias>`, `L <alias>` and `Q`,
//!   with rejected commands reported and never recorded in history.
//! - **Data-driven setup**: the built-in map can be replaced by a JSON seed,
//!   and a word list decides which strings count as things.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zodiacquest::quest::{canonical_map_seed, Dictionary, GameSession, World};
//!
//! fn main() -> anyhow::Result<()> {
//!     let world = World::from_seed(&canonical_map_seed(), Dictionary::load_or_empty("data/9C.txt"))?;
//!     let mut session = GameSession::new(world, "A", 15)?;
//!
//!     let stdin = std::io::stdin();
//!     session.run(stdin.lock(), std::io::stdout())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`quest`] - world model, player and command interpreter
//! - [`config`] - configuration loading and defaults
//! - [`logutil`] - helpers for logging raw input

pub mod config;
pub mod logutil;
pub mod quest;
