//! Command parsing and dispatch for the quest.
//!
//! Input is classified by a fixed prefix code:
//!
//! - `G<region>` move through the portal to a region (long name or code)
//! - `T <alias>` take a thing from the floor
//! - `L <alias>` leave a carried thing on the floor
//! - `Q` quit and show the command history
//!
//! The interpreter never touches world state itself; every parsed command is
//! forwarded to the matching [`Player`] operation.

use std::fmt;

use log::debug;

use super::errors::QuestError;
use super::graph::World;
use super::player::{Outcome, Player};
use crate::logutil::escape_log;

pub const GO_CMD: &str = "G";
pub const TAKE_CMD: &str = "T ";
pub const LEAVE_CMD: &str = "L ";
pub const QUIT_CMD: &str = "Q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestCommand {
    Go(String),    // GB, GTRANSITION MEADOW
    Take(String),  // T RUBY
    Leave(String), // L RUBY
    Quit,          // Q
    Unknown(String),
}

impl fmt::Display for QuestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestCommand::Go(region) => write!(f, "{}{}", GO_CMD, region),
            QuestCommand::Take(alias) => write!(f, "{}{}", TAKE_CMD, alias),
            QuestCommand::Leave(alias) => write!(f, "{}{}", LEAVE_CMD, alias),
            QuestCommand::Quit => f.write_str(QUIT_CMD),
            QuestCommand::Unknown(input) => f.write_str(input),
        }
    }
}

/// Stateless front end turning raw lines into player operations.
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    pub fn new() -> Self {
        Self
    }

    /// Classify one line of input. Case and surrounding whitespace are ignored.
    pub fn parse_command(&self, input: &str) -> QuestCommand {
        let input = input.trim().to_uppercase();

        let command = if let Some(region) = argument(&input, GO_CMD) {
            QuestCommand::Go(region)
        } else if let Some(alias) = argument(&input, TAKE_CMD) {
            QuestCommand::Take(alias)
        } else if let Some(alias) = argument(&input, LEAVE_CMD) {
            QuestCommand::Leave(alias)
        } else if input.starts_with(QUIT_CMD) {
            QuestCommand::Quit
        } else {
            QuestCommand::Unknown(input)
        };

        debug!("Parsed command: {}", escape_log(&command.to_string()));
        command
    }

    /// Parse `input` and apply it to `you`.
    ///
    /// Failures the player caused come back as user errors (see
    /// [`QuestError::is_user_error`]) and leave all state unchanged.
    pub fn execute(
        &self,
        you: &mut Player,
        world: &mut World,
        input: &str,
    ) -> Result<Outcome, QuestError> {
        match self.parse_command(input) {
            QuestCommand::Go(region) => you.go(&world.graph, &region),
            QuestCommand::Take(alias) => you.take(world, &alias),
            QuestCommand::Leave(alias) => you.leave(world, &alias),
            QuestCommand::Quit => Ok(you.quit()),
            QuestCommand::Unknown(text) => Err(QuestError::UnknownCommand(text)),
        }
    }
}

/// Text following `prefix`, or None when the prefix is absent or nothing follows it
fn argument(input: &str, prefix: &str) -> Option<String> {
    let rest = input.strip_prefix(prefix)?.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}
