use rat_behavior::BehaviorError;
use rat_core::{AgentId, CoreError};
use rat_world::WorldError;
use thiserror::Error;

/// Why a rat could not be placed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free cell found after {attempts} attempts")]
    NoRoomFound { attempts: u32 },

    #[error("position ({x}, {y}) is blocked")]
    Blocked { x: i32, y: i32 },
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("world construction failed: {0}")]
    World(#[from] WorldError),

    #[error("behaviour policy rejected: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("spawn failed: {0}")]
    Spawn(#[from] SpawnError),

    #[error("{0} is not in the arena")]
    AgentNotFound(AgentId),
}

pub type SimResult<T> = Result<T, SimError>;
