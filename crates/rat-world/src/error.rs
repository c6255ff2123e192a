//! World error type.

use thiserror::Error;

use rat_core::{CoreError, ItemId, Rect};

/// Errors produced by `rat-world`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("wall {0} lies outside the arena")]
    WallOutOfBounds(Rect),

    #[error("wall {0} has no area")]
    EmptyWall(Rect),

    #[error("item {0} lies outside the arena or has no area")]
    BadItem(Rect),

    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type WorldResult<T> = Result<T, WorldError>;
