use thiserror::Error;

/// Errors that can arise while building or playing the quest world.
#[derive(Debug, Error)]
pub enum QuestError {
    /// Input did not start with a known command prefix.
    #[error("did not understand command {0}")]
    UnknownCommand(String),

    /// No portal from the current region leads to the requested key.
    #[error("you cannot get to {0} from here")]
    NoSuchRoute(String),

    /// The effective toll exceeds the coins on hand.
    #[error("sorry, you cannot afford to go to {destination} (cost {cost}, you have {coins})")]
    CannotAfford {
        destination: String,
        cost: u32,
        coins: u32,
    },

    /// Nothing on the floor carries the requested alias.
    #[error("no thing to take: {0}")]
    NothingToTake(String),

    /// The word is a known thing, but none lies here.
    #[error("{0} is a thing, but there is none here")]
    NoneHere(String),

    /// Nothing carried has the requested alias.
    #[error("no thing to leave: {0}")]
    NothingToLeave(String),

    /// More than one thing shares the requested alias.
    #[error("{alias} could mean {count} different things")]
    Ambiguous { alias: String, count: usize },

    /// Attempted to move a fixed thing (a person, a monument).
    #[error("sorry, {0} is not moveable")]
    NotMovable(String),

    /// The session already quit.
    #[error("the quest is over")]
    Terminated,

    /// An alias of a contained thing was missing from the inventory index.
    #[error("inventory index corrupted: expected alias {0}")]
    IndexCorruption(String),

    /// A thing id was not found in the inventory storage.
    #[error("could not find thing {0} in inventory")]
    MissingThing(String),

    /// A portal was asked about a region it does not connect.
    #[error("portal {portal} does not connect region {region}")]
    PortalNotConnected { portal: String, region: String },

    /// A portal id did not resolve in the registry.
    #[error("unknown portal #{0}")]
    UnknownPortal(usize),

    /// A map seed referenced a region that was never declared.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// Two regions tried to claim the same alias.
    #[error("duplicate region alias: {0}")]
    DuplicateAlias(String),

    /// Wrapper around IO errors (word list, map seeds).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A map seed file could not be parsed or describes something impossible.
    #[error("invalid map seed: {0}")]
    InvalidSeed(String),
}

impl QuestError {
    /// True for mistakes the player made at the prompt. These are reported
    /// and the game continues; everything else is a defect or setup failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            QuestError::UnknownCommand(_)
                | QuestError::NoSuchRoute(_)
                | QuestError::CannotAfford { .. }
                | QuestError::NothingToTake(_)
                | QuestError::NoneHere(_)
                | QuestError::NothingToLeave(_)
                | QuestError::Ambiguous { .. }
                | QuestError::NotMovable(_)
                | QuestError::Terminated
        )
    }
}
