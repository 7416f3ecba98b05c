//! Interactive turn loop.
//!
//! One line is read, fully applied and described before the next prompt.
//! Input and output are generic so the loop runs equally on stdin/stdout
//! and on in-memory buffers.

use std::io::{BufRead, Write};

use log::{info, warn};

use super::commands::CommandInterpreter;
use super::errors::QuestError;
use super::graph::World;
use super::player::Player;
use crate::logutil::escape_log;

pub struct GameSession {
    world: World,
    you: Player,
    interpreter: CommandInterpreter,
}

impl GameSession {
    /// Place a new player with `coins` in the region called `start`
    pub fn new(world: World, start: &str, coins: u32) -> Result<Self, QuestError> {
        let region = world.graph.regions.id_of(start)?;
        Ok(Self {
            world,
            you: Player::new(region, coins),
            interpreter: CommandInterpreter::new(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.you
    }

    /// Apply one line of input, returning the text to show for it
    pub fn turn(&mut self, input: &str) -> Result<String, QuestError> {
        match self.interpreter.execute(&mut self.you, &mut self.world, input) {
            Ok(outcome) => Ok(outcome.to_string()),
            Err(e) if e.is_user_error() => {
                info!("Rejected {}: {}", escape_log(input.trim()), e);
                Ok(format!("ERROR: {}", e))
            }
            Err(e) => Err(e),
        }
    }

    /// Everything shown before the prompt: description and legal commands
    pub fn status(&self) -> Result<String, QuestError> {
        let commands: Vec<String> = self
            .you
            .available_commands(&self.world.graph)?
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(format!(
            "{}\nCommands: {}",
            self.you.description(&self.world.graph)?,
            commands.join(", ")
        ))
    }

    /// Play until the player quits or input runs out
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<(), QuestError> {
        writeln!(output, "{}", self.world.description())?;

        while !self.you.has_quit() {
            writeln!(output, "\n{}", self.status()?)?;
            write!(output, "{}> ", self.you.step())?;
            output.flush()?;

            // Raw bytes so a garbled line is just an unknown command
            let mut raw = Vec::new();
            if input.read_until(b'\n', &mut raw)? == 0 {
                warn!("Input closed after {} commands", self.you.step());
                writeln!(output)?;
                break;
            }

            let line = String::from_utf8_lossy(&raw);
            let reply = self.turn(&line)?;
            writeln!(output, "{}", reply)?;
        }

        output.flush()?;
        Ok(())
    }
}
